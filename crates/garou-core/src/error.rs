use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown character: {0}")]
    UnknownCharacter(String),

    #[error("No dodge-attack startup configured for {0}")]
    MissingDodgeStartup(String),

    #[error("Move not found for {character}: {name}")]
    MoveNotFound { character: String, name: String },

    #[error("Move has no startup frame and cannot be used as a meaty: {0}")]
    MoveHasNoStartup(String),

    #[error("Combo not found: #{0}")]
    ComboNotFound(u64),

    #[error("Combo recipe must not be empty")]
    EmptyRecipe,

    #[error("Invalid frame sheet {sheet}: {message}")]
    InvalidSheet { sheet: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
