//! Outbound request description handed to the transport layer.

use error_stack::ResultExt;

use crate::errors::{ConnectorError, CustomResult};

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

/// Request body content. The service speaks URL-encoded form data only.
#[derive(Clone, serde::Serialize)]
pub enum RequestContent {
    FormUrlEncoded(Vec<(&'static str, String)>),
}

impl std::fmt::Debug for RequestContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::FormUrlEncoded(_) => "FormUrlEncodedRequestBody",
        })
    }
}

impl RequestContent {
    /// Renders the body as it goes on the wire.
    pub fn render(&self) -> CustomResult<String, ConnectorError> {
        match self {
            Self::FormUrlEncoded(fields) => serde_urlencoded::to_string(fields)
                .change_context(ConnectorError::RequestEncodingFailed),
        }
    }

    /// The fields carried by a form body, in payload order.
    pub fn form_fields(&self) -> &[(&'static str, String)] {
        match self {
            Self::FormUrlEncoded(fields) => fields,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Request {
    pub url: String,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestContent>,
}

impl Request {
    pub fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: String::from(url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn set_body(&mut self, body: RequestContent) {
        self.body.replace(body);
    }

    pub fn add_header(&mut self, header: &str, value: &str) {
        self.headers.push((String::from(header), String::from(value)));
    }
}
