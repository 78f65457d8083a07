//! Outgoing request model and the session-token decorator.
//!
//! Requests are described as plain data first, passed through
//! [`attach_session`], and only then turned into a `gloo-net` request. Keeping
//! the decoration a pure function lets it be checked natively.
//!
//! ERROR HANDLING
//! ==============
//! Expired or forged tokens are not detected here. The backend rejects them
//! and the caller sees an [`ApiError::Status`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::state::session::{Session, SessionStore};

pub const AUTHORIZATION: &str = "Authorization";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("request failed: {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Body(String),
    /// Request body could not be serialized.
    #[error("invalid request body: {0}")]
    Encode(#[from] serde_json::Error),
    /// HTTP is only wired up in the browser build.
    #[error("not available outside the browser")]
    Unsupported,
}

/// A file picked in the browser, sent as one part of a multipart body.
#[derive(Clone, Debug, PartialEq)]
pub struct Attachment {
    /// Form field the file is sent under.
    pub field: String,
    pub file_name: String,
    #[cfg(feature = "csr")]
    pub file: web_sys::File,
}

#[cfg(feature = "csr")]
impl Attachment {
    #[must_use]
    pub fn new(field: &str, file: web_sys::File) -> Self {
        Self { field: field.to_owned(), file_name: file.name(), file }
    }
}

/// Text fields plus an optional file, sent as `multipart/form-data`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipartBody {
    pub fields: Vec<(String, String)>,
    pub attachment: Option<Attachment>,
}

impl MultipartBody {
    #[must_use]
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_owned(), value.into()));
        self
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Json(String),
    Multipart(MultipartBody),
}

/// An outgoing API request before it is handed to the browser.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), headers: Vec::new(), body: None }
    }

    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    #[must_use]
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put, url)
    }

    #[must_use]
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    /// Set a header, replacing any existing value with the same name.
    #[must_use]
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.into()));
        self
    }

    /// Attach a JSON body and the matching content type.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be serialized.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = Some(RequestBody::Json(serde_json::to_string(body)?));
        Ok(self.header("Content-Type", "application/json"))
    }

    /// Attach a multipart body. The browser sets the content type and
    /// boundary itself.
    #[must_use]
    pub fn multipart(mut self, body: MultipartBody) -> Self {
        self.body = Some(RequestBody::Multipart(body));
        self
    }

    /// Serialized JSON body, if the body is JSON.
    #[must_use]
    pub fn json_body(&self) -> Option<&str> {
        match &self.body {
            Some(RequestBody::Json(raw)) => Some(raw),
            _ => None,
        }
    }

    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Add the session token as a bearer credential, if there is one.
#[must_use]
pub fn attach_session(request: ApiRequest, session: &Session) -> ApiRequest {
    if session.token().is_empty() {
        return request;
    }
    request.header(AUTHORIZATION, format!("Bearer {}", session.token()))
}

/// API client that decorates every request with the current session.
#[derive(Clone)]
pub struct HttpClient {
    config: ClientConfig,
    session: SessionStore,
}

impl HttpClient {
    #[must_use]
    pub fn new(config: ClientConfig, session: SessionStore) -> Self {
        Self { config, session }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Request as it would go on the wire right now.
    #[must_use]
    pub fn prepare(&self, request: ApiRequest) -> ApiRequest {
        attach_session(request, &self.session.snapshot())
    }

    /// Send `request` and decode a JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let request = self.prepare(request);
        #[cfg(feature = "csr")]
        {
            let resp = to_gloo(&request)?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            serde_json::from_str(&text).map_err(|e| ApiError::Body(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Unsupported)
        }
    }
}

#[cfg(feature = "csr")]
fn to_gloo(request: &ApiRequest) -> Result<gloo_net::http::Request, ApiError> {
    use gloo_net::http::{Method as GlooMethod, RequestBuilder};

    let method = match request.method {
        Method::Get => GlooMethod::GET,
        Method::Post => GlooMethod::POST,
        Method::Put => GlooMethod::PUT,
        Method::Delete => GlooMethod::DELETE,
    };
    let mut builder = RequestBuilder::new(&request.url).method(method);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let built = match &request.body {
        Some(RequestBody::Json(body)) => builder.body(body.clone()),
        Some(RequestBody::Multipart(body)) => builder.body(to_form_data(body)?),
        None => builder.build(),
    };
    built.map_err(|e| ApiError::Transport(e.to_string()))
}

#[cfg(feature = "csr")]
fn to_form_data(body: &MultipartBody) -> Result<web_sys::FormData, ApiError> {
    let rejected = |_| ApiError::Transport("form data rejected by the browser".to_owned());
    let form = web_sys::FormData::new().map_err(rejected)?;
    for (name, value) in &body.fields {
        form.append_with_str(name, value).map_err(rejected)?;
    }
    if let Some(attachment) = &body.attachment {
        form.append_with_blob_and_filename(&attachment.field, &attachment.file, &attachment.file_name)
            .map_err(rejected)?;
    }
    Ok(form)
}
