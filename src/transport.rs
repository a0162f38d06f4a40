//! Injected HTTP capability. Connectors describe the call as a [`Request`]
//! and receive raw status and body bytes back; everything else (timeouts,
//! TLS, proxies) belongs to the transport implementation.

use bytes::Bytes;
use error_stack::{report, ResultExt};

use crate::{
    errors::{CustomResult, TransportError},
    request::{Method, Request, RequestContent},
};

/// Raw response from the payment service.
#[derive(Clone, Debug)]
pub struct Response {
    pub status_code: u16,
    pub response: Bytes,
}

/// Single synchronous send. One invocation issues exactly one outbound
/// call and blocks until it completes or fails.
pub trait HttpTransport {
    fn send(&self, request: Request) -> CustomResult<Response, TransportError>;
}

/// Default transport backed by a blocking reqwest client.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> CustomResult<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .change_context(TransportError::ClientConstructionFailed)?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: Request) -> CustomResult<Response, TransportError> {
        let url = reqwest::Url::parse(&request.url)
            .change_context(TransportError::UrlEncodingFailed)?;

        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        if let Some(RequestContent::FormUrlEncoded(fields)) = &request.body {
            builder = builder.form(fields);
        }
        for (header, value) in &request.headers {
            builder = builder.header(header.as_str(), value.as_str());
        }

        tracing::debug!(url = %request.url, method = %request.method, "sending connector request");

        let response = builder.send().map_err(|error| {
            tracing::info!("unable to send request to connector");
            if error.is_timeout() {
                report!(TransportError::RequestTimeoutReceived)
            } else {
                report!(TransportError::RequestNotSent(error.to_string()))
            }
        })?;

        let status_code = response.status().as_u16();
        let body = response
            .bytes()
            .change_context(TransportError::ResponseDecodingFailed)?;

        tracing::debug!(status_code, "connector response received");

        Ok(Response {
            status_code,
            response: body,
        })
    }
}
