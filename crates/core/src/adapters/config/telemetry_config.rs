#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct TelemetryConfig {
    /// OTLP gRPC collector. Span export is disabled when unset.
    pub otlp_endpoint: Option<String>,
}
