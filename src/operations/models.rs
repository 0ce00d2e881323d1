use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntitySource {
    MacsManagedExternalHost,
    EmManagedExternalHost,
    MacsManagedCloudHost,
    PeComanagedHost,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceStatus {
    Disabled,
    Enabled,
    Terminated,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    Creating,
    Updating,
    Active,
    Deleting,
    Deleted,
    Failed,
    NeedsAttention,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlatformType {
    Linux,
    Solaris,
    Sunos,
    Zlinux,
    Windows,
    Aix,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceMetric {
    Cpu,
    Memory,
    LogicalMemory,
    Storage,
    Network,
    Gpu,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum HostInsightSortBy {
    HostName,
    HostType,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HostInsight {
    pub id: String,
    pub compartment_id: String,
    pub host_name: String,
    pub entity_source: EntitySource,
    #[serde(default)]
    pub host_display_name: Option<String>,
    #[serde(default)]
    pub platform_type: Option<PlatformType>,
    pub status: ResourceStatus,
    pub lifecycle_state: LifecycleState,
    #[serde(default)]
    pub freeform_tags: HashMap<String, String>,
    #[serde(default)]
    pub time_created: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HostInsightSummary {
    pub id: String,
    pub compartment_id: String,
    pub host_name: String,
    pub entity_source: EntitySource,
    pub status: ResourceStatus,
    pub lifecycle_state: LifecycleState,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct HostInsightSummaryCollection {
    pub items: Vec<HostInsightSummary>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateHostInsightDetails {
    pub entity_source: EntitySource,
    pub compartment_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_agent_id: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHostInsightDetails {
    pub entity_source: EntitySource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<HashMap<String, String>>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChangeHostInsightCompartmentDetails {
    pub compartment_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeHostInsightResourceUsageAggregation {
    pub time_interval_start: String,
    pub time_interval_end: String,
    pub resource_metric: ResourceMetric,
    pub usage_unit: String,
    pub usage: f64,
    pub capacity: f64,
    #[serde(default)]
    pub usage_change_percent: Option<f64>,
}
