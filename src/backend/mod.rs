use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Result;

pub mod generate;

pub use generate::GenerateRequest;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/v1/generate";

/// Full URL of the backend's generate route.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Endpoint(Url);

impl Endpoint {
    pub fn url(&self) -> &Url {
        &self.0
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        let url: Url = DEFAULT_ENDPOINT
            .parse()
            .expect("should be able to parse default endpoint");
        Endpoint(url)
    }
}

impl FromStr for Endpoint {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self, Self::Err> {
        Ok(Endpoint(s.parse()?))
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

#[derive(Debug)]
pub struct Client {
    http: reqwest::blocking::Client,
    endpoint: Endpoint,
}

impl Client {
    pub fn new(endpoint: Endpoint) -> Self {
        // no local deadline: generation can be slow, and the host owns the
        // lifetime of a hanging query
        let http = reqwest::blocking::Client::builder()
            .timeout(None)
            .build()
            .expect("should be able to build the HTTP client");

        Client { http, endpoint }
    }

    /// POST one generate request and hand back the raw response body.
    /// Decoding the body is the caller's concern.
    pub fn generate(&self, request: &GenerateRequest) -> Result<String> {
        tracing::debug!(endpoint = %self.endpoint, "sending generate request");
        let response = self
            .http
            .post(self.endpoint.url().clone())
            .json(request)
            .send()?;

        Ok(response.text()?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_endpoint_is_the_local_generate_route() {
        let endpoint = Endpoint::default();

        assert_eq!(endpoint.url().as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn endpoint_parses_from_string() {
        let endpoint: Endpoint = "http://127.0.0.1:5001/api/v1/generate".parse().unwrap();

        assert_eq!(endpoint.to_string(), "http://127.0.0.1:5001/api/v1/generate");
    }
}
