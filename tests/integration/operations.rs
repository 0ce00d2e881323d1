use crate::utils::fast_retry;
use opsi::operations::models::*;
use opsi::operations::*;
use opsi::{Client, ClientConfig, Error, RequestOptions};
use serde_json::json;
use std::collections::HashMap;
use wiremock::matchers::{any, body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn host_insight() -> serde_json::Value {
    json!({
        "id": "h1",
        "compartmentId": "c1",
        "hostName": "db1.example.com",
        "entitySource": "MACS_MANAGED_EXTERNAL_HOST",
        "platformType": "LINUX",
        "status": "ENABLED",
        "lifecycleState": "ACTIVE",
        "freeformTags": {"team": "dba"}
    })
}

#[tokio::test]
async fn get_host_insight() {
    let server = MockServer::start().await;
    let client = Client::new(server.uri());

    Mock::given(method("GET"))
        .and(path("/20200630/hostInsights/h1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(host_insight())
                .insert_header("etag", "e1"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client.send(&GetHostInsight::new("h1")).await.unwrap();
    assert_eq!(response.data.host_name, "db1.example.com");
    assert_eq!(response.data.platform_type, Some(PlatformType::Linux));
    assert_eq!(response.data.freeform_tags.get("team").map(String::as_str), Some("dba"));
    assert_eq!(response.etag.as_deref(), Some("e1"));
}

#[tokio::test]
async fn missing_parameter_fails_before_any_attempt() {
    let server = MockServer::start().await;
    let config = ClientConfig::new(server.uri()).with_retry_policy(fast_retry(3));
    let client = Client::with_config(config).unwrap();

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client.send(&GetHostInsight::new("")).await.unwrap_err();
    assert!(matches!(err, Error::MissingParameter("hostInsightId")));
}

#[tokio::test]
async fn create_host_insight() {
    let server = MockServer::start().await;
    let client = Client::new(server.uri());

    Mock::given(method("POST"))
        .and(path("/20200630/hostInsights"))
        .and(header_exists("opc-retry-token"))
        .and(body_json(json!({
            "entitySource": "MACS_MANAGED_EXTERNAL_HOST",
            "compartmentId": "c1",
            "managementAgentId": "agent-1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(host_insight()))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateHostInsight {
        details: CreateHostInsightDetails {
            entity_source: EntitySource::MacsManagedExternalHost,
            compartment_id: "c1".into(),
            management_agent_id: Some("agent-1".into()),
            freeform_tags: HashMap::new(),
        },
    };
    let response = client.send(&request).await.unwrap();
    assert_eq!(response.data.id, "h1");
}

#[tokio::test]
async fn update_with_if_match() {
    let server = MockServer::start().await;
    let client = Client::new(server.uri());

    Mock::given(method("PUT"))
        .and(path("/20200630/hostInsights/h1"))
        .and(header("if-match", "e1"))
        .and(body_json(json!({
            "entitySource": "MACS_MANAGED_EXTERNAL_HOST",
            "freeformTags": {"team": "ops"}
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let mut tags = HashMap::new();
    tags.insert("team".to_string(), "ops".to_string());
    let request = UpdateHostInsight {
        host_insight_id: "h1".into(),
        details: UpdateHostInsightDetails {
            entity_source: EntitySource::MacsManagedExternalHost,
            freeform_tags: Some(tags),
        },
    };
    let options = RequestOptions::new().with_if_match("e1");
    client.send_with(&request, &options).await.unwrap();
}

#[tokio::test]
async fn delete_and_change_compartment() {
    let server = MockServer::start().await;
    let client = Client::new(server.uri());

    Mock::given(method("DELETE"))
        .and(path("/20200630/hostInsights/h1"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/20200630/hostInsights/h1/actions/changeCompartment"))
        .and(body_json(json!({"compartmentId": "c2"})))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    client
        .send(&DeleteHostInsight {
            host_insight_id: "h1".into(),
        })
        .await
        .unwrap();
    client
        .send(&ChangeHostInsightCompartment {
            host_insight_id: "h1".into(),
            details: ChangeHostInsightCompartmentDetails {
                compartment_id: "c2".into(),
            },
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn summarize_resource_usage() {
    let server = MockServer::start().await;
    let client = Client::new(server.uri());

    Mock::given(method("GET"))
        .and(path("/20200630/hostInsights/resourceUsageSummary"))
        .and(query_param("compartmentId", "c1"))
        .and(query_param("resourceMetric", "CPU"))
        .and(query_param("analysisTimeInterval", "P30D"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "timeIntervalStart": "2024-01-01T00:00:00Z",
            "timeIntervalEnd": "2024-01-31T00:00:00Z",
            "resourceMetric": "CPU",
            "usageUnit": "CORES",
            "usage": 12.5,
            "capacity": 64.0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = SummarizeHostInsightResourceUsage::new("c1", ResourceMetric::Cpu);
    request.analysis_time_interval = Some("P30D".into());
    let response = client.send(&request).await.unwrap();
    assert_eq!(response.data.resource_metric, ResourceMetric::Cpu);
    assert_eq!(response.data.capacity, 64.0);
    assert_eq!(response.data.usage_change_percent, None);
}
