use env_logger::{Builder, Target, WriteStyle};
use log::{info, warn, LevelFilter};
use std::fs::OpenOptions;
use std::str::FromStr;

/// Initialize the logging system, writing to stderr or appending to a log file.
/// Calling it again after a logger is installed is not an error.
pub fn initialize_logging(
    level: &str,
    log_file: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = LevelFilter::from_str(level)?;

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .write_style(WriteStyle::Auto);

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(Target::Pipe(Box::new(file)));
    } else {
        builder.target(Target::Stderr);
    }

    if builder.try_init().is_ok() {
        info!("Logging system initialized at level {}", level);
    }
    Ok(())
}

/// Mask an identifier for log output
fn format_sensitive(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Build the auth-event log line. Only the masked username reaches the output.
pub fn format_auth_event(
    event_type: &str,
    username: &str,
    success: bool,
    details: Option<&str>,
    timestamp: &str,
) -> String {
    format!(
        "Auth event: type={}, user={}, success={}, timestamp={}, details={:?}",
        event_type,
        format_sensitive(username),
        success,
        timestamp,
        details
    )
}

/// Structured logging for authentication events. Never pass secrets in `details`.
pub fn log_auth_event(event_type: &str, username: &str, success: bool, details: Option<&str>) {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let message = format_auth_event(event_type, username, success, details, &timestamp);
    if success {
        info!("{}", message);
    } else {
        warn!("{}", message);
    }
}
