use std::path::Path;
use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::adapters::sink::console_sink::ConsoleSink;
use crate::adapters::sink::file_sink::FileSink;
use crate::adapters::sink::null_sink::NullSink;
use crate::adapters::sink::tee_sink::TeeSink;
use crate::adapters::store::json_store::JsonEmployeeStore;
use crate::cli::context;
use crate::config::app_config::AppConfig;
use crate::core::errors::{Result, RosterlyError};
use crate::core::observe::logged_api::LoggedEmployeeApi;
use crate::core::services::employee_service::EmployeeService;
use crate::core::traits::log_sink::LogSink;

/// The fully wired service stack every command talks to.
pub type Service = LoggedEmployeeApi<EmployeeService<JsonEmployeeStore>>;

/// Build the call-log sink from the project configuration.
///
/// Also returns the config so callers don't load it twice.
pub fn open_sink(verbose: bool) -> Result<(AppConfig, Arc<dyn LogSink>)> {
    let dir = context::rosterly_dir();
    let config = AppConfig::load(dir)?;
    let sink = build_sink(&config, dir, verbose);
    Ok((config, sink))
}

/// Build the logging-decorated employee service plus the sink it
/// shares with the handler wrappers.
pub fn open_service(verbose: bool) -> Result<(Service, Arc<dyn LogSink>)> {
    let (config, sink) = open_sink(verbose)?;
    let dir = context::rosterly_dir();
    let store = JsonEmployeeStore::new(dir.join(&config.rosterly.roster_file));
    let service = LoggedEmployeeApi::new(EmployeeService { store }, sink.clone());
    Ok((service, sink))
}

fn build_sink(config: &AppConfig, dir: &Path, verbose: bool) -> Arc<dyn LogSink> {
    if !config.log_enabled() {
        return Arc::new(NullSink);
    }
    let file = FileSink::new(dir, config.log_file());
    if verbose {
        Arc::new(TeeSink::new(vec![Box::new(file), Box::new(ConsoleSink)]))
    } else {
        Arc::new(file)
    }
}

/// Parse an ISO 8601 joining date, rejecting dates in the future.
pub fn parse_joined_on(value: &str) -> Result<NaiveDate> {
    let date =
        NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| RosterlyError::InvalidDate {
            value: value.to_string(),
        })?;
    if date > Local::now().date_naive() {
        return Err(RosterlyError::JoinDateInFuture {
            value: value.to_string(),
        });
    }
    Ok(date)
}
