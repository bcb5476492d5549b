use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{human_name} not found. Searched in following places:{}", format_places(.places))]
    NotFound {
        human_name: String,
        places: Vec<String>,
    },

    #[error("Environment key '{0}' has no value")]
    UnsetKey(String),

    #[error("Environment has no key '{0}'")]
    UnknownKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_places(places: &[String]) -> String {
    places.iter().map(|p| format!("\n  - {p}")).collect()
}

pub type Result<T> = std::result::Result<T, Error>;
