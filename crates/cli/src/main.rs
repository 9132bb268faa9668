use nr_sheets_report_core::adapters::config::app_config::AppConfig;
use nr_sheets_report_core::adapters::config::telemetry_config::TelemetryConfig;
use nr_sheets_report_core::prettyprint::prettyprint::PrettyFormatter;
use nr_sheets_report_core::TimeWindow;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace as sdktrace;
use opentelemetry_sdk::Resource;
use std::env;
use std::sync::Arc;
use tracing::{error, info, instrument};
use tracing_indicatif::IndicatifLayer;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

mod application_service_factory;
mod cli_adapter;

use application_service_factory::ApplicationServiceFactory;
use cli_adapter::CliAdapter;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let invocation = cli_adapter::parse_args(&args)?;

    let config = AppConfig::load().map_err(|report| format!("{:?}", report))?;

    setup_tracing(&config.telemetry)?;
    setup_panic_hook();

    info!("Starting nr-sheets-report");

    let window = TimeWindow::resolve(
        (invocation.since, invocation.until),
        (config.window.begin.clone(), config.window.end.clone()),
        chrono::Local::now().into(),
    );
    info!("Time window: {}", window);

    let app_service = ApplicationServiceFactory::create(&config, window).await?;
    let cli_adapter = Arc::new(CliAdapter::new(app_service));

    let result = cli_adapter.run(invocation.command).await;
    opentelemetry::global::shutdown_tracer_provider();

    match result {
        Ok(_) => {
            info!("CLI execution completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("CLI execution failed: {:?}", e);
            Err(e)
        }
    }
}

fn setup_tracing(telemetry: &TelemetryConfig) -> Result<(), Box<dyn std::error::Error>> {
    let indicatif_layer = IndicatifLayer::new();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(true))
        .with_writer(indicatif_layer.get_stderr_writer());

    let log_file_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(false))
        .with_writer(std::fs::File::create("nr_sheets_report.log")?)
        .with_ansi(false);

    let otel_layer = match &telemetry.otlp_endpoint {
        Some(endpoint) => {
            let exporter = opentelemetry_otlp::new_exporter()
                .tonic()
                .with_endpoint(endpoint);

            let tracer = opentelemetry_otlp::new_pipeline()
                .tracing()
                .with_exporter(exporter)
                .with_trace_config(sdktrace::config().with_resource(Resource::new(vec![
                    KeyValue::new("service.name", "nr_sheets_report"),
                ])))
                .install_batch(opentelemetry_sdk::runtime::Tokio)?;

            Some(OpenTelemetryLayer::new(tracer))
        }
        None => None,
    };

    Registry::default()
        .with(
            tracing_subscriber::filter::Targets::new()
                .with_target("nr_sheets_report", tracing::Level::DEBUG)
                .with_target("nr_sheets_report_core", tracing::Level::DEBUG),
        )
        .with(otel_layer)
        .with(indicatif_layer)
        .with(log_file_layer)
        .with(stdout_layer)
        .init();

    Ok(())
}

fn setup_panic_hook() {
    tracing::trace!("Setting panic hook");
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
        opentelemetry::global::shutdown_tracer_provider();
    }));
}
