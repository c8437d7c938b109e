use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::types::display_name;

const KERNEL_IMAGES: [&str; 2] = ["vmlinuz-linux", "vmlinuz"];
const INITRAMFS_IMAGES: [&str; 2] = ["initramfs-linux.img", "initrd.img"];

/// A directory discovered under a configured root, classified by which
/// boot images it holds.
#[derive(Debug, Clone)]
pub struct BackupCandidate {
    pub path: PathBuf,
    pub has_kernel: bool,
    pub has_initramfs: bool,
}

impl BackupCandidate {
    pub fn is_complete(&self) -> bool {
        self.has_kernel && self.has_initramfs
    }

    pub fn display_name(&self) -> String {
        display_name(&self.path)
    }
}

/// Scans each root for immediate subdirectories and classifies them.
///
/// Roots that do not exist are skipped. Any other listing error aborts the
/// call; partial results are discarded. Candidates come out in per-root
/// listing order, roots in the configured order.
pub fn discover(roots: &[PathBuf]) -> Result<Vec<BackupCandidate>> {
    let mut candidates = Vec::new();
    for root in roots {
        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(root = %root.display(), "backup root missing, skipping");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let path = entry.path();
            let candidate = BackupCandidate {
                has_kernel: any_file_present(&path, &KERNEL_IMAGES),
                has_initramfs: any_file_present(&path, &INITRAMFS_IMAGES),
                path,
            };
            debug!(
                path = %candidate.path.display(),
                kernel = candidate.has_kernel,
                initramfs = candidate.has_initramfs,
                "found backup candidate"
            );
            candidates.push(candidate);
        }
    }
    Ok(candidates)
}

fn any_file_present(dir: &Path, names: &[&str]) -> bool {
    names.iter().any(|name| dir.join(name).is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        File::create(path).expect("create");
    }

    #[test]
    fn classifies_kernel_and_initramfs_variants() {
        let root = TempDir::new().expect("tempdir");
        let primary = root.path().join("primary");
        fs::create_dir(&primary).expect("mkdir");
        touch(&primary.join("vmlinuz-linux"));

        let alt = root.path().join("alt");
        fs::create_dir(&alt).expect("mkdir");
        touch(&alt.join("vmlinuz"));
        touch(&alt.join("initrd.img"));

        let mut found = discover(&[root.path().to_path_buf()]).expect("discover");
        found.sort_by_key(|c| c.display_name());

        assert_eq!(found.len(), 2);
        assert!(found[0].has_kernel && found[0].has_initramfs);
        assert!(found[0].is_complete());
        assert!(found[1].has_kernel && !found[1].has_initramfs);
        assert!(!found[1].is_complete());
    }

    #[test]
    fn missing_roots_yield_empty_result() {
        let base = TempDir::new().expect("tempdir");
        let roots = vec![base.path().join("nope"), base.path().join("also-nope")];
        let found = discover(&roots).expect("discover");
        assert!(found.is_empty());
    }

    #[test]
    fn plain_files_under_roots_are_ignored() {
        let root = TempDir::new().expect("tempdir");
        touch(&root.path().join("stray-file"));
        let found = discover(&[root.path().to_path_buf()]).expect("discover");
        assert!(found.is_empty());
    }

    #[test]
    fn roots_scanned_in_configured_order() {
        let base = TempDir::new().expect("tempdir");
        let first = base.path().join("snapshots");
        let second = base.path().join("efi");
        fs::create_dir_all(first.join("a")).expect("mkdir");
        fs::create_dir_all(second.join("b")).expect("mkdir");
        let found = discover(&[first, second]).expect("discover");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].display_name(), "a");
        assert_eq!(found[1].display_name(), "b");
    }
}
