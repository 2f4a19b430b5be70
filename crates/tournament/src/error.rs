use thiserror::Error;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid results file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown engine '{0}'")]
    UnknownEngine(String),
}
