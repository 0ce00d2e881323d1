use futures::StreamExt;
use opsi::operations::ListHostInsights;
use opsi::{Client, ClientConfig, RequestOptions, RetryPolicy};

#[tokio::main]
pub async fn main() -> opsi::Result<()> {
    env_logger::init();
    let compartment = std::env::var("OPSI_COMPARTMENT").unwrap_or_default();
    let token = std::env::var("OPSI_TOKEN").unwrap_or_default();

    let config = ClientConfig::from_env()?.with_retry_policy(RetryPolicy::default());
    let client = Client::with_config(config)?.bearer_auth(token);

    let mut request = ListHostInsights::in_compartment(compartment);
    request.limit = Some(50);
    let options = RequestOptions::new();

    // Each page is fetched, and retried, independently.
    let mut pages = client.send_paginated(&request, &options);
    while let Some(page) = pages.next().await {
        let page = page?;
        for insight in page.data.items {
            println!("{} {} {:?}", insight.id, insight.host_name, insight.lifecycle_state);
        }
    }
    Ok(())
}
