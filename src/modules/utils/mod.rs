pub mod logging;

pub use logging::{format_auth_event, initialize_logging, log_auth_event};
