use crate::canvas::EncodedImage;
use crate::error::SolveError;
use crate::solve::SolveAnswer;
use futures::FutureExt as _;
use futures::future::BoxFuture;
use reqwest::Client;
use serde::Serialize;

/// Body of a solve request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveRequest {
    /// The canvas as a data URL.
    pub image: String,
}

impl SolveRequest {
    pub fn from_image(image: &EncodedImage) -> Self {
        Self {
            image: image.to_data_url(),
        }
    }
}

/// The external recognition/solve service.
pub trait SolveClient: Send + Sync {
    /// Issue exactly one request for `request`.
    fn solve(&self, request: SolveRequest) -> BoxFuture<'static, Result<SolveAnswer, SolveError>>;
}

/// [`SolveClient`] that POSTs JSON to an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpSolveClient {
    http: Client,
    endpoint: String,
}

impl HttpSolveClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SolveError> {
        let http = Client::builder().build()?;
        Ok(Self::with_client(http, endpoint))
    }

    pub fn with_client(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SolveClient for HttpSolveClient {
    fn solve(&self, request: SolveRequest) -> BoxFuture<'static, Result<SolveAnswer, SolveError>> {
        let http = self.http.clone();
        let endpoint = self.endpoint.clone();

        async move {
            log::debug!("POST {} ({} byte image)", endpoint, request.image.len());
            let response = http.post(&endpoint).json(&request).send().await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(SolveError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            let body = response.bytes().await?;
            let answer = serde_json::from_slice::<SolveAnswer>(&body)?;
            Ok(answer)
        }
        .boxed()
    }
}
