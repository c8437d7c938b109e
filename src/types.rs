use std::fmt;
use std::path::Path;

pub const ENTRY_ID_PREFIX: &str = "bootrecov-";

/// Identity token embedded in a managed menu entry, derived from the
/// backup directory's base name. `2024-05-01-120000` yields
/// `bootrecov-2024-05-01-120000`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryId(String);

impl EntryId {
    pub fn for_name(name: &str) -> Self {
        EntryId(format!("{}{}", ENTRY_ID_PREFIX, name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Base name of a path as a display name. Backups under different roots
/// sharing a base name collide on the same display name and therefore on
/// the same entry identity; that is the documented join behavior.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
