use crate::error::{OptimizerError, Result};
use crate::mirror::ClientMirror;
use crate::types::{ErrorBody, HealthResponse, OptimizationRequest, OptimizeResponse};
use reqwest::{Client, StatusCode, Url};

/// HTTP client for the latency optimization API
#[derive(Debug, Clone)]
pub struct OptimizerClient {
    client: Client,
    base_url: Url,
    mirror: ClientMirror,
}

impl OptimizerClient {
    /// Create a new client
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the API (e.g., "http://localhost:5050")
    ///
    /// # Example
    ///
    /// ```no_run
    /// use latency_opt_sdk::OptimizerClient;
    ///
    /// let client = OptimizerClient::new("http://localhost:5050").unwrap();
    /// ```
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom reqwest client
    ///
    /// This allows you to configure timeouts, proxies, etc. A request that
    /// times out counts as the service being unreachable.
    pub fn with_client(base_url: impl AsRef<str>, client: Client) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())
            .map_err(|e| OptimizerError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            mirror: ClientMirror::new(),
        })
    }

    /// Check the health of the API server
    pub async fn health_check(&self) -> Result<HealthResponse> {
        let url = self.endpoint("/health")?;
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| OptimizerError::ParseError(e.to_string()))
    }

    /// Optimize one problem
    ///
    /// The service picks its own engine (native or in-process). If the
    /// service cannot be reached at all (connection failure or timeout), the
    /// problem is solved locally and the result is tagged `client-mirror`.
    /// HTTP error responses are returned as errors, never mirrored.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use latency_opt_sdk::{OptimizerClient, OptimizationRequest};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = OptimizerClient::new("http://localhost:5050")?;
    /// let request = OptimizationRequest::new(5.0, 2.5, 20.0, 1.2, 0.8, 0.5);
    ///
    /// let response = client.optimize(&request).await?;
    /// println!("Engine: {}", response.result.engine);
    /// println!("Latency: {}", response.result.latency);
    /// println!("Improvement: {}%", response.result.improvement_percent);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn optimize(&self, request: &OptimizationRequest) -> Result<OptimizeResponse> {
        let url = self.endpoint("/optimize")?;

        let response = match self.client.post(url).json(request).send().await {
            Ok(response) => response,
            Err(e) if e.is_connect() || e.is_timeout() => {
                return self.mirror.optimize(request);
            }
            Err(e) => return Err(e.into()),
        };

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| OptimizerError::ParseError(e.to_string()))
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| OptimizerError::InvalidUrl(e.to_string()))
    }

    async fn error_from(response: reqwest::Response) -> OptimizerError {
        let status = response.status();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);

        match status {
            StatusCode::BAD_REQUEST => OptimizerError::Rejected(message),
            _ => OptimizerError::ApiError {
                status: status.as_u16(),
                message,
            },
        }
    }
}
