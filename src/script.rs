use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::entry::{self, BLOCK_CLOSE, BLOCK_OPEN};
use crate::error::{Result, ScriptError};
use crate::types::EntryId;

pub const SCRIPT_HEADER: &str = "#!/bin/bash\n";

/// GRUB executes scripts under /etc/grub.d, so the file must be executable.
const SCRIPT_MODE: u32 = 0o755;

/// Observed state of the configuration script on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptState {
    Absent,
    MissingHeader,
    Ready,
}

/// Line scanner state while deleting a managed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Searching,
    InsideBlock,
}

/// Owns all reads and writes of the configuration script. Every mutation
/// is a whole-file read-modify-write; content outside managed blocks
/// survives byte for byte.
#[derive(Debug, Clone)]
pub struct ScriptStore {
    path: PathBuf,
}

impl ScriptStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScriptStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> Result<ScriptState> {
        match fs::read(&self.path) {
            Ok(data) => {
                if data.starts_with(SCRIPT_HEADER.as_bytes()) {
                    Ok(ScriptState::Ready)
                } else {
                    Ok(ScriptState::MissingHeader)
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(ScriptState::Absent),
            Err(e) => Err(ScriptError::from_io(&self.path, &e).into()),
        }
    }

    /// Creates the script with its shebang header, or prepends the header
    /// to an existing headerless file without touching any other byte.
    /// Safe to call repeatedly.
    pub fn ensure_ready(&self) -> Result<()> {
        match self.state()? {
            ScriptState::Ready => Ok(()),
            ScriptState::Absent => {
                debug!(script = %self.path.display(), "creating script with header");
                self.write_whole(SCRIPT_HEADER.as_bytes())
            }
            ScriptState::MissingHeader => {
                debug!(script = %self.path.display(), "prepending missing header");
                let existing = fs::read(&self.path)
                    .map_err(|e| ScriptError::from_io(&self.path, &e))?;
                let mut data = Vec::with_capacity(SCRIPT_HEADER.len() + existing.len());
                data.extend_from_slice(SCRIPT_HEADER.as_bytes());
                data.extend_from_slice(&existing);
                self.write_whole(&data)
            }
        }
    }

    /// Streaming membership test by identity token. A missing file means
    /// no entry, not an error.
    pub fn has_entry(&self, id: &EntryId) -> Result<bool> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(ScriptError::from_io(&self.path, &e).into()),
        };
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| ScriptError::from_io(&self.path, &e))?;
            if line.contains(id.as_str()) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Appends a rendered block after guaranteeing the header; existing
    /// bytes are never rewritten.
    pub fn append(&self, block: &str) -> Result<()> {
        self.ensure_ready()?;
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| ScriptError::from_io(&self.path, &e))?;
        file.write_all(block.as_bytes())
            .map_err(|e| ScriptError::from_io(&self.path, &e))?;
        Ok(())
    }

    /// Deletes the managed block carrying `id`, including its heredoc
    /// wrapper lines, and rewrites the file in a single write. A missing
    /// identity (or a missing file) leaves the file untouched.
    pub fn remove(&self, id: &EntryId) -> Result<()> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(ScriptError::from_io(&self.path, &e).into()),
        };

        // Split on '\n' rather than lines() so the trailing-newline shape
        // of untouched content survives the rejoin unchanged.
        let mut kept: Vec<&str> = Vec::new();
        let mut state = ScanState::Searching;
        let mut removed = false;
        for line in contents.split('\n') {
            match state {
                ScanState::InsideBlock => {
                    if line.trim() == BLOCK_CLOSE {
                        state = ScanState::Searching;
                    }
                }
                ScanState::Searching => {
                    if line.contains(id.as_str()) {
                        if kept
                            .last()
                            .is_some_and(|prev| prev.trim().starts_with(BLOCK_OPEN))
                        {
                            kept.pop();
                        }
                        state = ScanState::InsideBlock;
                        removed = true;
                    } else {
                        kept.push(line);
                    }
                }
            }
        }

        if !removed {
            return Ok(());
        }
        debug!(script = %self.path.display(), id = %id, "removed managed block");
        self.write_whole(kept.join("\n").as_bytes())
    }

    /// Decodes the display names of all managed entries; a missing file
    /// decodes to nothing.
    pub fn list(&self) -> Result<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(entry::decode(&contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(ScriptError::from_io(&self.path, &e).into()),
        }
    }

    fn write_whole(&self, data: &[u8]) -> Result<()> {
        fs::write(&self.path, data).map_err(|e| ScriptError::from_io(&self.path, &e))?;
        let mut perms = fs::metadata(&self.path)
            .map_err(|e| ScriptError::from_io(&self.path, &e))?
            .permissions();
        perms.set_mode(SCRIPT_MODE);
        fs::set_permissions(&self.path, perms)
            .map_err(|e| ScriptError::from_io(&self.path, &e))?;
        Ok(())
    }
}
