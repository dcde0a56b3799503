use clap::Parser;
use cli::{Args, Command};
use config::Config;
use dataset_sorter::DatasetSorter;
use error::AppError;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use pipeline::session::ClassifierSession;
use report_display::impl_console::ReportDisplayConsole;
use shell::{classify_and_show, classify_repl, sort_repl};
use std::process::ExitCode;
use std::sync::Arc;

mod cli;
mod config;
mod dataset_sorter;
mod decision_engine;
mod error;
mod image_classifier;
mod image_preprocessor;
mod label_catalog;
mod library;
mod pipeline;
mod report_display;
mod shell;
#[cfg(test)]
mod test_fixture;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = args.config();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    match run(args.command, config, logger.clone()) {
        Ok(code) => code,
        Err(e) => {
            logger.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(
    command: Command,
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<ExitCode, AppError> {
    match command {
        Command::Classify { image } => {
            let session = ClassifierSession::from_config(config, logger);
            let mut display = ReportDisplayConsole::stdio();

            match classify_and_show(&session, &image, &mut display)? {
                Ok(_) => Ok(ExitCode::SUCCESS),
                Err(_) => Ok(ExitCode::FAILURE),
            }
        }
        Command::Shell => {
            let session = ClassifierSession::from_config(config, logger.clone());
            let mut display = ReportDisplayConsole::stdio();

            let summary = classify_repl::run(
                &session,
                std::io::stdin().lock(),
                std::io::stdout(),
                &mut display,
            )?;
            logger.info(&format!(
                "{} classified, {} failed",
                summary.classified, summary.failed
            ));
            Ok(ExitCode::SUCCESS)
        }
        Command::Gui => {
            let session = ClassifierSession::from_config(config, logger.clone());
            report_display::impl_gui::run(session, logger)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Sort => {
            let sorter = DatasetSorter::new(config.dataset_dir, config.categories, logger);
            sort_repl::run(&sorter, std::io::stdin().lock(), std::io::stdout())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
