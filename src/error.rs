use thiserror::Error;

/// Errors that can occur while extracting a recipe
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The document could not be parsed into a tree
    #[error("Unable to parse body: {0}")]
    ParseError(String),

    /// A JSON-LD block is not valid JSON
    #[error("Invalid JSON-LD in block {block}: {source}")]
    InvalidJson {
        block: usize,
        #[source]
        source: serde_json::Error,
    },

    /// No JSON-LD blocks, or no candidate qualifies as a Recipe
    #[error("{0}")]
    NotFound(String),

    /// Failed to fetch the page from the upstream URL
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Unable to fetch from provided url. (status {0})")]
    UpstreamStatus(u16),

    /// Upstream answered with an empty body
    #[error("No body returned from fetch")]
    EmptyBody,

    /// The incoming request is unusable
    #[error("{0}")]
    InvalidRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// I/O error (reading local files, binding sockets)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Machine-checkable failure category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    NotFound,
    Fetch,
    InvalidRequest,
    Internal,
}

impl ExtractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractError::ParseError(_) | ExtractError::InvalidJson { .. } => ErrorKind::Parse,
            ExtractError::NotFound(_) => ErrorKind::NotFound,
            ExtractError::FetchError(_)
            | ExtractError::UpstreamStatus(_)
            | ExtractError::EmptyBody => ErrorKind::Fetch,
            ExtractError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            ExtractError::ConfigError(_) | ExtractError::Io(_) => ErrorKind::Internal,
        }
    }

    /// Whether the failure was caused by unusable input rather than by the service
    pub fn is_user_facing(&self) -> bool {
        self.kind() != ErrorKind::Internal
    }
}

/// A numeric field could not be coerced from its source value.
///
/// Recovered locally by omitting the field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot coerce {field} from {found}")]
pub struct CoercionError {
    pub field: &'static str,
    pub found: String,
}
