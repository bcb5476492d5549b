pub mod config;
pub mod environment;
pub mod error;
pub mod report;
pub mod search;
pub mod vendor;

pub use config::{EnvironmentConfig, ARDUINO_DIST_DIR_GUESSES};
pub use environment::ResourceEnvironment;
pub use error::{Error, Result};
pub use report::{LogReporter, SearchReporter};
pub use search::{expand_places, expand_vars, JoinMode};
