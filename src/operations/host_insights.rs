use super::models::*;
use super::API_VERSION;
use crate::error::Result;
use crate::pagination::PaginatedRequest;
use crate::path::encode;
use crate::request::{require, EmptyResponse, Request, RequestData};
use reqwest::Method;
use serde::Serialize;
use std::borrow::Cow;

fn host_insight_path(id: &str) -> String {
    format!("/{}/hostInsights/{}", API_VERSION, encode(id))
}

/// Lists host insights, one page per response.
#[derive(Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListHostInsights {
    pub compartment_id: Option<String>,
    pub id: Vec<String>,
    pub status: Vec<ResourceStatus>,
    pub lifecycle_state: Vec<LifecycleState>,
    pub host_type: Vec<String>,
    pub platform_type: Vec<PlatformType>,
    pub limit: Option<u32>,
    pub sort_order: Option<SortOrder>,
    pub sort_by: Option<HostInsightSortBy>,
    pub compartment_id_in_subtree: Option<bool>,
    #[serde(skip)]
    pub page: Option<String>,
}

impl ListHostInsights {
    pub fn in_compartment<S: Into<String>>(compartment_id: S) -> Self {
        Self {
            compartment_id: Some(compartment_id.into()),
            ..Default::default()
        }
    }
}

impl Request for ListHostInsights {
    type Data = Self;
    type Response = HostInsightSummaryCollection;

    fn endpoint(&self) -> Cow<str> {
        format!("/{}/hostInsights", API_VERSION).into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

impl PaginatedRequest for ListHostInsights {
    fn initial_page(&self) -> Option<String> {
        self.page.clone()
    }
}

#[derive(Clone, Debug)]
pub struct GetHostInsight {
    pub host_insight_id: String,
}

impl GetHostInsight {
    pub fn new<S: Into<String>>(host_insight_id: S) -> Self {
        Self {
            host_insight_id: host_insight_id.into(),
        }
    }
}

impl Request for GetHostInsight {
    type Data = ();
    type Response = HostInsight;

    fn endpoint(&self) -> Cow<str> {
        host_insight_path(&self.host_insight_id).into()
    }

    fn validate(&self) -> Result<()> {
        require("hostInsightId", &self.host_insight_id)
    }
}

#[derive(Clone, Debug)]
pub struct CreateHostInsight {
    pub details: CreateHostInsightDetails,
}

impl Request for CreateHostInsight {
    type Data = CreateHostInsightDetails;
    type Response = HostInsight;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<str> {
        format!("/{}/hostInsights", API_VERSION).into()
    }

    fn data(&self) -> RequestData<&CreateHostInsightDetails> {
        RequestData::Json(&self.details)
    }

    fn validate(&self) -> Result<()> {
        require("compartmentId", &self.details.compartment_id)
    }
}

#[derive(Clone, Debug)]
pub struct UpdateHostInsight {
    pub host_insight_id: String,
    pub details: UpdateHostInsightDetails,
}

impl Request for UpdateHostInsight {
    type Data = UpdateHostInsightDetails;
    type Response = EmptyResponse;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<str> {
        host_insight_path(&self.host_insight_id).into()
    }

    fn data(&self) -> RequestData<&UpdateHostInsightDetails> {
        RequestData::Json(&self.details)
    }

    fn validate(&self) -> Result<()> {
        require("hostInsightId", &self.host_insight_id)
    }
}

#[derive(Clone, Debug)]
pub struct DeleteHostInsight {
    pub host_insight_id: String,
}

impl Request for DeleteHostInsight {
    type Data = ();
    type Response = EmptyResponse;
    const METHOD: Method = Method::DELETE;

    fn endpoint(&self) -> Cow<str> {
        host_insight_path(&self.host_insight_id).into()
    }

    fn validate(&self) -> Result<()> {
        require("hostInsightId", &self.host_insight_id)
    }
}

/// Moves a host insight to another compartment.
#[derive(Clone, Debug)]
pub struct ChangeHostInsightCompartment {
    pub host_insight_id: String,
    pub details: ChangeHostInsightCompartmentDetails,
}

impl Request for ChangeHostInsightCompartment {
    type Data = ChangeHostInsightCompartmentDetails;
    type Response = EmptyResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<str> {
        format!(
            "{}/actions/changeCompartment",
            host_insight_path(&self.host_insight_id)
        )
        .into()
    }

    fn data(&self) -> RequestData<&ChangeHostInsightCompartmentDetails> {
        RequestData::Json(&self.details)
    }

    fn validate(&self) -> Result<()> {
        require("hostInsightId", &self.host_insight_id)?;
        require("compartmentId", &self.details.compartment_id)
    }
}

/// Aggregated usage and capacity of one resource across host insights.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeHostInsightResourceUsage {
    pub compartment_id: String,
    pub resource_metric: ResourceMetric,
    pub analysis_time_interval: Option<String>,
    pub time_interval_start: Option<String>,
    pub time_interval_end: Option<String>,
    pub platform_type: Vec<PlatformType>,
    pub id: Vec<String>,
    pub compartment_id_in_subtree: Option<bool>,
}

impl SummarizeHostInsightResourceUsage {
    pub fn new<S: Into<String>>(compartment_id: S, resource_metric: ResourceMetric) -> Self {
        Self {
            compartment_id: compartment_id.into(),
            resource_metric,
            analysis_time_interval: None,
            time_interval_start: None,
            time_interval_end: None,
            platform_type: Vec::new(),
            id: Vec::new(),
            compartment_id_in_subtree: None,
        }
    }
}

impl Request for SummarizeHostInsightResourceUsage {
    type Data = Self;
    type Response = SummarizeHostInsightResourceUsageAggregation;

    fn endpoint(&self) -> Cow<str> {
        format!("/{}/hostInsights/resourceUsageSummary", API_VERSION).into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }

    fn validate(&self) -> Result<()> {
        require("compartmentId", &self.compartment_id)
    }
}
