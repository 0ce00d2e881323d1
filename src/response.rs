use crate::error::{Error, Result};
use crate::transport::HttpResponse;
use reqwest::header::{HeaderMap, ETAG};
use reqwest::StatusCode;
use serde::Deserialize;

pub const OPC_REQUEST_ID: &str = "opc-request-id";
pub const OPC_NEXT_PAGE: &str = "opc-next-page";
pub const OPC_RETRY_TOKEN: &str = "opc-retry-token";

/// A decoded response together with its metadata.
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub data: T,
    pub status: StatusCode,
    /// Unique id assigned by the server, useful when reporting problems.
    pub request_id: Option<String>,
    /// Cursor for the next page of a list call, absent on the last page.
    pub next_page: Option<String>,
    pub etag: Option<String>,
    /// Number of attempts made, including the successful one.
    pub attempts: u32,
}

impl<T> Response<T> {
    pub fn into_inner(self) -> T {
        self.data
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Response<U> {
        Response {
            data: f(self.data),
            status: self.status,
            request_id: self.request_id,
            next_page: self.next_page,
            etag: self.etag,
            attempts: self.attempts,
        }
    }
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Turns a raw response into a decoded one, or into a classified error.
pub(crate) fn decode<T>(res: HttpResponse, attempts: u32) -> Result<Response<T>>
where
    T: for<'de> Deserialize<'de>,
{
    let status = res.status;
    if !status.is_success() {
        let msg = String::from_utf8_lossy(&res.body).into_owned();
        return if status.is_client_error() {
            Err(Error::ClientError(status, msg))
        } else if status.is_server_error() {
            Err(Error::ServerError(status, msg))
        } else {
            Err(Error::UnexpectedStatus(status, msg))
        };
    }
    let body: &[u8] = if res.body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &res.body
    };
    let data = serde_json::from_slice(body).map_err(|error| Error::Serde {
        error,
        msg: String::from_utf8_lossy(body).into_owned(),
    })?;
    Ok(Response {
        data,
        status,
        request_id: header(&res.headers, OPC_REQUEST_ID),
        next_page: header(&res.headers, OPC_NEXT_PAGE),
        etag: header(&res.headers, ETAG.as_str()),
        attempts,
    })
}
