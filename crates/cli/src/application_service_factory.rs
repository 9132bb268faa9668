use nr_sheets_report_core::{
    adapters::{
        config::app_config::AppConfig, newrelic::nerdgraph_client::NerdGraphClient,
        sheets::spreadsheet_manager::SpreadsheetManager,
    },
    application::{report_routine::ReportRoutine, service::ReportApplicationService},
    ports::{
        application_service::ApplicationService, metrics_source::MetricsSource,
        report_sheet::ReportSheet, routine::Routine,
    },
    TimeWindow,
};

use std::sync::Arc;

pub struct ApplicationServiceFactory;

impl ApplicationServiceFactory {
    pub async fn create(
        config: &AppConfig,
        window: TimeWindow,
    ) -> Result<Arc<dyn ApplicationService>, Box<dyn std::error::Error>> {
        let routines = Self::create_routines(config, window).await?;
        let app_service = ReportApplicationService::new(routines);
        Ok(Arc::new(app_service))
    }

    async fn create_routines(
        config: &AppConfig,
        window: TimeWindow,
    ) -> Result<Vec<Box<dyn Routine>>, Box<dyn std::error::Error>> {
        let spreadsheet_manager: Arc<dyn ReportSheet> = Arc::new(
            SpreadsheetManager::new(config.sheets.clone())
                .await
                .map_err(|report| format!("{:?}", report))?,
        );

        let nerdgraph_client: Arc<dyn MetricsSource> = Arc::new(
            NerdGraphClient::new(&config.newrelic).map_err(|report| format!("{:?}", report))?,
        );

        let window = Arc::new(window);

        Ok(config
            .report_definitions()
            .into_iter()
            .map(|definition| {
                Box::new(ReportRoutine::new(
                    definition,
                    Arc::clone(&window),
                    Arc::clone(&spreadsheet_manager),
                    Arc::clone(&nerdgraph_client),
                )) as Box<dyn Routine>
            })
            .collect())
    }
}
