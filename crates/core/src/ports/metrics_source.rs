use thiserror::Error;

use crate::domain::{nrql::GraphQlRequest, value::ResultRecord};

#[derive(Error, Debug)]
pub enum MetricsSourceError {
    #[error("Failed to fetch NRQL results")]
    FetchError,
}

#[async_trait::async_trait]
pub trait MetricsSource: Send + Sync {
    /// Runs `request` with the given API key and returns the object entries of the results.
    async fn fetch_results(
        &self,
        api_key: &str,
        request: &GraphQlRequest,
    ) -> error_stack::Result<Vec<ResultRecord>, MetricsSourceError>;
}
