use std::time::Duration;

use error_stack::{report, ResultExt};
use reqwest::{header::CONTENT_TYPE, Client};
use thiserror::Error;
use tracing::{event, instrument, Level};

use crate::adapters::config::newrelic_config::NewRelicConfig;
use crate::domain::{
    nrql::{GraphQlRequest, NrqlResponse},
    value::ResultRecord,
};
use crate::ports::metrics_source::{MetricsSource, MetricsSourceError};

const API_KEY_HEADER: &str = "API-Key";

#[derive(Error, Debug)]
pub enum NerdGraphClientError {
    #[error("Failed to build HTTP client")]
    ClientBuildError,

    #[error("HTTP request failed")]
    HttpError,

    #[error("HTTP status error: {0}")]
    HttpStatusError(String),

    #[error("JSON parsing failed")]
    JsonError,

    #[error("NerdGraph returned errors and no results")]
    GraphQlError,
}

#[derive(Debug, Clone)]
pub struct NerdGraphClient {
    client: Client,
    endpoint: String,
}

impl NerdGraphClient {
    pub fn new(config: &NewRelicConfig) -> error_stack::Result<Self, NerdGraphClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .change_context(NerdGraphClientError::ClientBuildError)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    #[instrument(skip(self, api_key), fields(endpoint = %self.endpoint))]
    pub async fn query(
        &self,
        api_key: &str,
        request: &GraphQlRequest,
    ) -> error_stack::Result<NrqlResponse, NerdGraphClientError> {
        event!(Level::DEBUG, nrql = %request.variables.nrql, "Sending NRQL query");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, api_key)
            .json(request)
            .send()
            .await
            .change_context(NerdGraphClientError::HttpError)?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .change_context(NerdGraphClientError::HttpError)?;

        if !status.is_success() {
            return Err(report!(NerdGraphClientError::HttpStatusError(
                status.to_string()
            )))
            .attach_printable_lazy(|| {
                format!("Response body: {}", String::from_utf8_lossy(&body))
            });
        }

        parse_response(&body)
    }
}

/// Decodes a NerdGraph response body.
///
/// GraphQL errors are only fatal when no results came back; partial results are kept and the
/// errors logged.
pub fn parse_response(body: &[u8]) -> error_stack::Result<NrqlResponse, NerdGraphClientError> {
    let response: NrqlResponse = serde_json::from_slice(body)
        .change_context(NerdGraphClientError::JsonError)
        .attach_printable_lazy(|| {
            format!("Response body: {}", String::from_utf8_lossy(body))
        })?;

    let messages = response.error_messages();
    if !messages.is_empty() {
        if !response.has_results() {
            return Err(report!(NerdGraphClientError::GraphQlError))
                .attach_printable_lazy(|| format!("Errors: {}", messages.join("; ")));
        }
        event!(Level::WARN, "NerdGraph returned partial results: {}", messages.join("; "));
    }

    Ok(response)
}

#[async_trait::async_trait]
impl MetricsSource for NerdGraphClient {
    async fn fetch_results(
        &self,
        api_key: &str,
        request: &GraphQlRequest,
    ) -> error_stack::Result<Vec<ResultRecord>, MetricsSourceError> {
        self.query(api_key, request)
            .await
            .map(NrqlResponse::into_records)
            .change_context(MetricsSourceError::FetchError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value::CellValue;

    #[test]
    fn test_parse_results() {
        let response = parse_response(
            br#"{"data":{"actor":{"nrql":{"results":[{"hostgroup":"play-1","Average CPU Percentage":12.25}]}}}}"#,
        )
        .unwrap();

        let records = response.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].get("Average CPU Percentage"),
            Some(&CellValue::from(12.25))
        );
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let error = parse_response(b"curl: (6) Could not resolve host").unwrap_err();
        assert!(matches!(
            error.current_context(),
            NerdGraphClientError::JsonError
        ));
    }

    #[test]
    fn test_errors_without_results_is_an_error() {
        let error = parse_response(
            br#"{"data":{"actor":{"nrql":null}},"errors":[{"message":"Invalid API key"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(
            error.current_context(),
            NerdGraphClientError::GraphQlError
        ));
        assert!(format!("{:?}", error).contains("Invalid API key"));
    }

    #[test]
    fn test_errors_with_results_are_kept() {
        let response = parse_response(
            br#"{"data":{"actor":{"nrql":{"results":[{"a":1}]}}},"errors":[{"message":"timeout on one shard"}]}"#,
        )
        .unwrap();
        assert_eq!(response.into_records().len(), 1);
    }

    #[test]
    fn test_client_uses_configured_endpoint() {
        let config = NewRelicConfig {
            endpoint: "http://localhost:9/graphql".to_string(),
            ..NewRelicConfig::default()
        };
        let client = NerdGraphClient::new(&config).unwrap();
        assert_eq!(client.endpoint, "http://localhost:9/graphql");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_http_error() {
        let config = NewRelicConfig {
            endpoint: "http://127.0.0.1:9/graphql".to_string(),
            timeout_secs: 2,
            ..NewRelicConfig::default()
        };
        let client = NerdGraphClient::new(&config).unwrap();
        let request = GraphQlRequest::nrql(
            &crate::domain::nrql::NrqlQuery::windowed(
                "SELECT 1",
                &crate::domain::time_window::TimeWindow::new("b", "e"),
            ),
            1,
        );

        let error = client.fetch_results("NRAK-TEST", &request).await.unwrap_err();
        assert!(matches!(
            error.current_context(),
            MetricsSourceError::FetchError
        ));
    }
}
