use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A required prompt answer was never supplied.
    #[error("missing answer for '{field}'")]
    MissingAnswer { field: &'static str },

    /// The user backed out of a prompt.
    #[error("prompt cancelled")]
    Cancelled,

    /// A choice prompt would have nothing to offer.
    #[error("no options available for '{field}'; add some data first")]
    NoChoices { field: &'static str },

    #[error("expected a 'First Last' name, got '{0}'")]
    InvalidName(String),

    #[error("invalid salary '{0}'")]
    InvalidSalary(String),

    /// A name lookup matched zero rows.
    #[error("{entity} '{name}' not found")]
    ReferenceNotFound { entity: &'static str, name: String },

    /// The store rejected a query; `context` names the operation.
    #[error("{context}: {message}")]
    Store {
        context: &'static str,
        message: String,
    },

    #[error("connection error: {0}")]
    Connection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap a store-level failure with the operation that issued it.
    pub fn store(context: &'static str, err: impl std::fmt::Display) -> Self {
        Error::Store {
            context,
            message: err.to_string(),
        }
    }
}

// Required by `Connection::transaction`, which rolls back through the
// caller's error type. Operation-specific wrapping happens at each call
// site; this only covers BEGIN/COMMIT failures.
impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        Error::store("executing statement", err)
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
