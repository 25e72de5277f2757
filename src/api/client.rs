use crate::api::{ApiRequest, ApiResponse, Method};
use crate::error::Result;
use crate::ui::log_verbose;
use reqwest::header::{HeaderValue, CONTENT_TYPE};

/// Single-shot HTTP client bound to one base URL.
pub struct RestClient {
    base_url: String,
    http: reqwest::Client,
    verbose: bool,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::with_client(base_url, http))
    }

    /// Use a preconfigured reqwest client, e.g. one with proxies disabled.
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Issue exactly one request. Non-2xx statuses come back as data.
    pub async fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = self.url_for(&request.endpoint);

        log_verbose(self.verbose, format!("{} {}", request.method, url));

        let builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => {
                let builder = self
                    .http
                    .post(&url)
                    .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                match &request.data {
                    Some(data) => {
                        log_verbose(self.verbose, format!("Request body: {} bytes", data.len()));
                        builder.body(data.clone())
                    }
                    None => builder,
                }
            }
        };

        let response = builder.send().await?;
        let status_code = response.status().as_u16();
        let body = response.text().await?;

        log_verbose(
            self.verbose,
            format!("Response: status {}, {} bytes", status_code, body.len()),
        );

        Ok(ApiResponse { status_code, body })
    }
}
