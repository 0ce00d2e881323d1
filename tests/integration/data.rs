use crate::utils::{JsonHello, NameGreeting, QueryHello};
use opsi::Client;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request as MockRequest, ResponseTemplate};

#[tokio::test]
async fn query() {
    let server = MockServer::start().await;
    let uri = server.uri();
    let client = Client::new(&uri);

    Mock::given(method("GET"))
        .and(path("/hello"))
        .and(query_param("name", "world"))
        .respond_with(|req: &MockRequest| {
            let name = req
                .url
                .query_pairs()
                .find(|(k, _)| k == "name")
                .map(|(_, v)| v)
                .unwrap();
            let body = NameGreeting {
                message: format!("Hello, {}!", name),
            };
            ResponseTemplate::new(200)
                .set_body_json(body)
                .insert_header("opc-request-id", "req-1")
        })
        .mount(&server)
        .await;

    let response = client
        .send(&QueryHello {
            name: "world".into(),
        })
        .await
        .unwrap();
    assert_eq!(
        response.data,
        NameGreeting {
            message: "Hello, world!".into(),
        }
    );
    assert_eq!(response.request_id.as_deref(), Some("req-1"));
    assert_eq!(response.attempts, 1);
}

#[tokio::test]
async fn json() {
    let server = MockServer::start().await;
    let uri = server.uri();
    let client = Client::new(&uri);

    Mock::given(method("GET"))
        .and(path("/hello"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "world"})))
        .respond_with(|_: &MockRequest| {
            let body = NameGreeting {
                message: "Hello, world!".into(),
            };
            ResponseTemplate::new(200).set_body_json(body)
        })
        .mount(&server)
        .await;

    let response = client
        .send(&JsonHello {
            name: "world".into(),
        })
        .await
        .unwrap();
    assert_eq!(
        response.into_inner(),
        NameGreeting {
            message: "Hello, world!".into(),
        }
    );
}

#[tokio::test]
async fn send_all_keeps_order() {
    let server = MockServer::start().await;
    let uri = server.uri();
    let client = Client::new(&uri);

    Mock::given(method("GET"))
        .and(path("/hello"))
        .respond_with(|req: &MockRequest| {
            let name = req
                .url
                .query_pairs()
                .find(|(k, _)| k == "name")
                .map(|(_, v)| v)
                .unwrap();
            let body = NameGreeting {
                message: format!("Hello, {}!", name),
            };
            ResponseTemplate::new(200).set_body_json(body)
        })
        .expect(2)
        .mount(&server)
        .await;

    let reqs = &[
        QueryHello {
            name: "world".into(),
        },
        QueryHello {
            name: "again".into(),
        },
    ];

    use futures::StreamExt;
    let messages: Vec<String> = client
        .send_all(reqs)
        .map(|r| r.unwrap().data.message)
        .collect()
        .await;
    assert_eq!(messages, vec!["Hello, world!", "Hello, again!"]);
}
