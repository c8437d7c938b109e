use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootrecovError {
    #[error("{0}")]
    Message(String),
    #[error("{0}")]
    Script(ScriptError),
    #[error("{0}")]
    Config(ConfigError),
    #[error("{0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse config: {0}")]
    Parse(String),
    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("script {0}: not found")]
    NotFound(String),
    #[error("script {0}: permission denied")]
    PermissionDenied(String),
    #[error("script {0}: {1}")]
    Io(String, String),
}

pub type Result<T> = std::result::Result<T, BootrecovError>;

impl BootrecovError {
    pub fn message(msg: impl Into<String>) -> Self {
        BootrecovError::Message(msg.into())
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, BootrecovError::Script(ScriptError::PermissionDenied(_)))
            || matches!(self, BootrecovError::Io(e) if e.kind() == io::ErrorKind::PermissionDenied)
    }
}

impl ScriptError {
    pub fn from_io(path: &std::path::Path, err: &io::Error) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => ScriptError::NotFound(path),
            io::ErrorKind::PermissionDenied => ScriptError::PermissionDenied(path),
            _ => ScriptError::Io(path, err.to_string()),
        }
    }
}

impl From<ScriptError> for BootrecovError {
    fn from(err: ScriptError) -> Self {
        BootrecovError::Script(err)
    }
}

impl From<ConfigError> for BootrecovError {
    fn from(err: ConfigError) -> Self {
        BootrecovError::Config(err)
    }
}
