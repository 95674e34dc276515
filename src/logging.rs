// src/logging.rs

use crate::constants::LOG_FILE_BASENAME;
use crate::errors::CvChatResult;
use crate::models::ApiCallLog;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use log::info;
use std::path::Path;

/// Starts file logging under `dir`. `RUST_LOG` wins over `level`.
///
/// The returned handle must be kept alive for the lifetime of the program.
pub fn init_logging(dir: &Path, level: &str) -> CvChatResult<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(level)?
        .log_to_file(
            FileSpec::default()
                .directory(dir)
                .basename(LOG_FILE_BASENAME)
                .suppress_timestamp(),
        )
        .append()
        .format(flexi_logger::detailed_format)
        .start()?;
    Ok(handle)
}

/// Logs a backend call.
pub fn log_api_call(log: &ApiCallLog) {
    info!("{}", format_api_call(log));
}

fn format_api_call(log: &ApiCallLog) -> String {
    let status = log
        .response_status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "none".to_string());
    format!(
        "[{}] {} - {} - Status: {} - Time: {}ms",
        log.timestamp.to_rfc3339(),
        log.endpoint,
        log.request_summary,
        status,
        log.response_time_ms
    )
}
