use crate::utils::{fast_retry, EmptyHello};
use opsi::{Client, ClientConfig, Error};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn bearer_auth_is_sent_on_every_attempt() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    let config = ClientConfig::new(server.uri()).with_retry_policy(fast_retry(2));
    let client = Client::with_config(config).unwrap().bearer_auth("PASSWORD");

    Mock::given(method("GET"))
        .and(path("/hello"))
        .and(header("Authorization", "Bearer PASSWORD"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/hello"))
        .and(header("Authorization", "Bearer PASSWORD"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.send(&EmptyHello).await.unwrap();
    assert_eq!(response.attempts, 2);
}

#[tokio::test]
async fn query_auth() {
    let server = MockServer::start().await;
    let auth = vec![("key", "k"), ("secret", "s")];
    let client = Client::new(server.uri()).query_auth(auth);

    Mock::given(method("GET"))
        .and(path("/hello"))
        .and(query_param("key", "k"))
        .and(query_param("secret", "s"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.send(&EmptyHello).await.unwrap();
}

#[tokio::test]
async fn header_auth() {
    let server = MockServer::start().await;
    let auth = vec![("key", "k"), ("secret", "s")];
    let client = Client::new(server.uri()).header_auth(auth).unwrap();

    Mock::given(method("GET"))
        .and(path("/hello"))
        .and(header("key", "k"))
        .and(header("secret", "s"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.send(&EmptyHello).await.unwrap();
}

#[test]
fn invalid_header_name() {
    let err = Client::new("http://localhost")
        .header_auth(vec![("bad key", "v")])
        .err()
        .unwrap();
    assert!(matches!(err, Error::InvalidHeader { name, .. } if name == "bad key"));
}
