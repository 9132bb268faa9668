use nr_sheets_report_core::ports::application_service::ApplicationService;
use nr_sheets_report_core::ports::command_handler::{Command, CommandError, CommandHandler};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

const USAGE: &str = "Usage: nr-sheets-report [run [--sequential] | run-report <name> | list] [--since <timestamp>] [--until <timestamp>]";

/// What the command line asked for: the command plus optional time window overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub since: Option<String>,
    pub until: Option<String>,
}

pub fn parse_args(args: &[String]) -> Result<Invocation, CommandError> {
    let mut positional = Vec::new();
    let mut sequential = false;
    let mut since = None;
    let mut until = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--sequential" => sequential = true,
            "--since" | "--until" => {
                let value = iter.next().cloned().ok_or_else(|| CommandError::InvalidCommand {
                    details: format!("{} requires a timestamp. {}", arg, USAGE),
                })?;
                if arg == "--since" {
                    since = Some(value);
                } else {
                    until = Some(value);
                }
            }
            flag if flag.starts_with("--") => {
                return Err(CommandError::InvalidCommand {
                    details: format!("Unknown flag {}. {}", flag, USAGE),
                })
            }
            other => positional.push(other),
        }
    }

    let command = match positional.as_slice() {
        [] | ["run"] => Command::RunReports {
            parallel: !sequential,
        },
        ["run-report", name] => Command::RunSpecificReport {
            name: name.to_string(),
        },
        ["run-report"] => {
            return Err(CommandError::InvalidCommand {
                details: format!("Report name required. {}", USAGE),
            })
        }
        ["list"] => Command::ListReports,
        other => {
            return Err(CommandError::InvalidCommand {
                details: format!("Unexpected arguments {:?}. {}", other, USAGE),
            })
        }
    };

    Ok(Invocation {
        command,
        since,
        until,
    })
}

pub struct CliAdapter {
    application_service: Arc<dyn ApplicationService>,
}

impl std::fmt::Debug for CliAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliAdapter")
            .field("application_service", &"<ApplicationService>")
            .finish()
    }
}

impl CliAdapter {
    pub fn new(application_service: Arc<dyn ApplicationService>) -> Self {
        Self {
            application_service,
        }
    }

    /// Runs `command` until it completes or Ctrl-C is received; on Ctrl-C every in-flight
    /// report is dropped and the run fails.
    #[instrument]
    pub async fn run(&self, command: Command) -> Result<(), Box<dyn std::error::Error>> {
        let result = tokio::select! {
            result = self.handle(command) => result,
            _ = tokio::signal::ctrl_c() => {
                warn!("Interrupted, cancelling in-flight reports");
                return Err("Interrupted".into());
            }
        };

        match result {
            Ok(output) => {
                info!("{}", output);
                Ok(())
            }
            Err(report) => {
                error!("Command failed: {:?}", report);
                Err(format!("Command failed: {}", report.current_context()).into())
            }
        }
    }
}

#[async_trait::async_trait]
impl CommandHandler for CliAdapter {
    #[instrument]
    async fn handle(&self, command: Command) -> error_stack::Result<String, CommandError> {
        match command {
            Command::RunReports { parallel } => {
                let summary = self.application_service.run_all_reports(parallel).await;

                let mut output = "\nReport Results:\n".to_string();
                for (name, result) in &summary.results {
                    match result {
                        Ok(()) => output.push_str(&format!("✅ {}: OK\n", name)),
                        Err(report) => {
                            output.push_str(&format!("❌ {}: {}\n", name, report.current_context()))
                        }
                    }
                }
                output.push_str(&format!(
                    "\nSummary: {} successful, {} failed",
                    summary.success_count(),
                    summary.failure_count()
                ));

                if summary.is_success() {
                    Ok(output)
                } else {
                    let failed = summary
                        .failures()
                        .map(|(name, _)| name)
                        .collect::<Vec<_>>()
                        .join(", ");
                    Err(error_stack::report!(CommandError::ExecutionFailed {
                        details: format!("Reports failed: {}", failed),
                    })
                    .attach_printable(output))
                }
            }
            Command::RunSpecificReport { name } => {
                self.application_service
                    .run_report_by_name(&name)
                    .await
                    .map_err(|e| CommandError::ExecutionFailed {
                        details: format!("Failed to run report {}: {:?}", name, e),
                    })?;

                Ok(format!("✅ Report '{}' completed successfully", name))
            }
            Command::ListReports => {
                let reports = self.application_service.list_available_reports();
                Ok(format!("Available reports:\n{}", reports.join("\n")))
            }
        }
    }
}
