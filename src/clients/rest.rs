//! Shared HTTP plumbing for the platform's REST endpoints.
//!
//! Paths are given as segments and percent-encoded, so an id taken from
//! state always stays one segment. Every request carries
//! `Authorization: Bearer <api key>`. Successful
//! responses (200/201) are decoded with [`decode_body`]; any other status
//! becomes [`ClientError::Api`] with the raw body attached. There is no
//! retry layer on this path.

use std::fmt;

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::config::Credentials;
use crate::error::ClientError;

const USER_AGENT: &str = concat!("observability-provider/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to the REST base URL and API key.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl RestClient {
    /// Build a client from the credentials' REST URL, key and timeout.
    ///
    /// Fails if the REST URL is not an absolute URL that can carry a path.
    pub fn new(credentials: &Credentials) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidTarget {
            target: credentials.rest_url().to_string(),
            reason,
        };
        let base_url = Url::parse(credentials.rest_url()).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("REST URL cannot carry a path".to_string()));
        }

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = credentials.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            api_key: credentials.api_key().to_string(),
        })
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn url(&self, path: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(path);
        }
        url
    }

    fn request(&self, method: Method, path: &[&str]) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
    }

    /// `GET path`, decoding the response.
    #[instrument(skip(self), name = "rest.get")]
    pub async fn get<T: DeserializeOwned>(&self, path: &[&str]) -> Result<Option<T>, ClientError> {
        self.send(self.request(Method::GET, path)).await
    }

    /// `POST path` with a JSON body, decoding the response.
    #[instrument(skip(self, body), name = "rest.post")]
    pub async fn post<B, T>(&self, path: &[&str], body: &B) -> Result<Option<T>, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    /// `PUT path` with a JSON body, decoding the response.
    #[instrument(skip(self, body), name = "rest.put")]
    pub async fn put<B, T>(&self, path: &[&str], body: &B) -> Result<Option<T>, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    /// `DELETE path`. 200, 201 and 204 all count as success; the body is ignored.
    #[instrument(skip(self), name = "rest.delete")]
    pub async fn delete(&self, path: &[&str]) -> Result<(), ClientError> {
        let response = self.request(Method::DELETE, path).send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "Received response");

        match status {
            StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT => Ok(()),
            _ => Err(ClientError::Api {
                status: status.as_u16(),
                body: response.text().await?,
            }),
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Option<T>, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "Received response");

        match status {
            StatusCode::OK | StatusCode::CREATED => decode_body(&body),
            _ => Err(ClientError::Api {
                status: status.as_u16(),
                body,
            }),
        }
    }
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Decode a successful response body.
///
/// Some endpoints answer with a bare acknowledgement (`"ok"`, `true`, an
/// empty body) instead of the object. Anything that is not a JSON object is
/// therefore an empty success. Malformed JSON, or an object that does not
/// fit `T`, is an error.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<Option<T>, ClientError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let value: serde_json::Value = serde_json::from_str(body)?;
    if !value.is_object() {
        debug!("Response body is not an object, treating as empty");
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}
