/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("OMDb API key is not configured")]
    CredentialMissing,

    #[error("Invalid API key")]
    CredentialInvalid,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Provider(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// The error taxonomy the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    CredentialMissing,
    CredentialInvalid,
    NotFound,
    Transport,
    Provider,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::CredentialMissing => ErrorKind::CredentialMissing,
            AppError::CredentialInvalid => ErrorKind::CredentialInvalid,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::HttpClient(_) | AppError::UnexpectedStatus { .. } => ErrorKind::Transport,
            AppError::InvalidResponse(_) | AppError::Provider(_) | AppError::InvalidInput(_) => {
                ErrorKind::Provider
            }
        }
    }

    /// Short message suitable for the error slot of the view.
    ///
    /// Known kinds get a fixed wording; everything else shows its own text.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::CredentialMissing => {
                "API key is not configured. Get one at https://www.omdbapi.com/ and set MOVIEFINDER_OMDB_API_KEY".to_string()
            }
            ErrorKind::CredentialInvalid => {
                "Invalid API key. Check the value of MOVIEFINDER_OMDB_API_KEY".to_string()
            }
            ErrorKind::NotFound => "Movie not found".to_string(),
            ErrorKind::Transport | ErrorKind::Provider => self.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::InvalidResponse(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
