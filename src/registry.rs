use std::collections::HashSet;
use std::path::PathBuf;

use tracing::warn;

use crate::config::Paths;
use crate::entry;
use crate::error::Result;
use crate::probe::{self, BackupCandidate};
use crate::script::ScriptStore;
use crate::types::{display_name, EntryId};

/// A discovered backup joined with whether the script currently carries a
/// menu entry for it. The join key is the display name, so backups under
/// different roots with the same base name share one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewItem {
    pub path: PathBuf,
    pub has_kernel: bool,
    pub has_initramfs: bool,
    pub has_entry: bool,
}

impl ViewItem {
    pub fn display_name(&self) -> String {
        display_name(&self.path)
    }

    pub fn is_complete(&self) -> bool {
        self.has_kernel && self.has_initramfs
    }
}

/// Combines the prober and the script store into the authoritative backup
/// view, and owns the in-memory ViewItem sequence between mutations.
#[derive(Debug)]
pub struct Registry {
    store: ScriptStore,
    roots: Vec<PathBuf>,
    items: Vec<ViewItem>,
}

impl Registry {
    pub fn new(paths: &Paths) -> Self {
        Registry {
            store: ScriptStore::new(&paths.script),
            roots: paths.roots(),
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> &[ViewItem] {
        &self.items
    }

    pub fn store(&self) -> &ScriptStore {
        &self.store
    }

    /// Rebuilds the view from disk: discovers candidates, decodes existing
    /// entries, joins by display name. A script the process cannot create
    /// (no write permission) degrades to a read-only view instead of
    /// aborting.
    pub fn load(&mut self) -> Result<Vec<ViewItem>> {
        if let Err(err) = self.store.ensure_ready() {
            if !err.is_permission_denied() {
                return Err(err);
            }
            warn!(script = %self.store.path().display(), "cannot create script, continuing read-only");
        }
        let candidates = probe::discover(&self.roots)?;
        let existing: HashSet<String> = self.store.list()?.into_iter().collect();
        self.items = candidates
            .into_iter()
            .map(|c| {
                let has_entry = existing.contains(&c.display_name());
                ViewItem {
                    path: c.path,
                    has_kernel: c.has_kernel,
                    has_initramfs: c.has_initramfs,
                    has_entry,
                }
            })
            .collect();
        Ok(self.items.clone())
    }

    /// Names of the entries currently encoded in the script, in file order.
    pub fn entries(&self) -> Result<Vec<String>> {
        self.store.list()
    }

    /// Adds or removes the menu entry for a backup. The view is updated
    /// only after the underlying write succeeds; on error the items are
    /// left exactly as they were.
    pub fn toggle_entry(&mut self, item: &ViewItem) -> Result<ViewItem> {
        let name = item.display_name();
        if item.has_entry {
            self.store.remove(&EntryId::for_name(&name))?;
            self.set_entry_flag(&name, false);
        } else {
            let block = entry::encode(&BackupCandidate {
                path: item.path.clone(),
                has_kernel: item.has_kernel,
                has_initramfs: item.has_initramfs,
            });
            self.store.append(&block)?;
            self.set_entry_flag(&name, true);
        }
        Ok(ViewItem {
            has_entry: !item.has_entry,
            ..item.clone()
        })
    }

    /// Removes an entry given only its display name, for callers holding
    /// the entries list rather than a full backup view.
    pub fn remove_entry_by_name(&mut self, name: &str) -> Result<()> {
        self.store.remove(&EntryId::for_name(name))?;
        self.set_entry_flag(name, false);
        Ok(())
    }

    fn set_entry_flag(&mut self, name: &str, value: bool) {
        for item in &mut self.items {
            if item.display_name() == name {
                item.has_entry = value;
            }
        }
    }
}
