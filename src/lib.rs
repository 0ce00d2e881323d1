//! opsi is a strongly typed REST client for the Operations Insights API.
//!
//! Every call is described by a [Request], sent by a [Client] and, when a
//! [RetryPolicy] applies, retried until it succeeds or the policy gives up.
//! Mutating calls carry an `opc-retry-token` that stays the same across all
//! attempts of a call, so the server can discard duplicates.
//!
//! ```no_run
//! use opsi::operations::GetHostInsight;
//! use opsi::{Client, ClientConfig, RequestOptions, RetryPolicy};
//!
//! # async fn run() -> opsi::Result<()> {
//! let config = ClientConfig::for_region("us-ashburn-1").with_retry_policy(RetryPolicy::default());
//! let client = Client::with_config(config)?.bearer_auth("token");
//!
//! let request = GetHostInsight::new("ocid1.opsihostinsight.oc1..example");
//! let insight = client.send(&request).await?;
//! println!("{:?} (request id {:?})", insight.data, insight.request_id);
//!
//! // Opt out of retries for a single call.
//! let options = RequestOptions::new().with_retry(None::<RetryPolicy>);
//! client.send_with(&request, &options).await?;
//! # Ok(())
//! # }
//! ```
pub mod backoff;
mod client;
pub mod config;
mod error;
pub mod operations;
mod options;
pub mod pagination;
pub mod path;
mod request;
mod response;
pub mod retry;
mod retry_loop;
pub mod transport;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use options::RequestOptions;
pub use request::*;
pub use response::{Response, OPC_NEXT_PAGE, OPC_REQUEST_ID, OPC_RETRY_TOKEN};
pub use retry::{RetryPolicy, RetrySetting};
pub use retry_loop::retry_loop;
pub use reqwest::header;
pub use reqwest::Method;
pub use reqwest::StatusCode;
pub use tokio_util::sync::CancellationToken;
