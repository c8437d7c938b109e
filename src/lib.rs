pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod probe;
pub mod registry;
pub mod script;
pub mod types;

pub use config::Paths;
pub use error::{BootrecovError, Result};
pub use probe::BackupCandidate;
pub use registry::{Registry, ViewItem};
pub use script::ScriptStore;
pub use types::EntryId;
