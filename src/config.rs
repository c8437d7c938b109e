use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "/etc/bootrecov.yaml";

const DEFAULT_SNAPSHOT_DIR: &str = "/var/backups/boot-snapshots";
const DEFAULT_EFI_DIR: &str = "/boot/efi/boot-backups";
const DEFAULT_GRUB_SCRIPT: &str = "/etc/grub.d/41_custom_boot_backups";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default, rename = "snapshotDir", skip_serializing_if = "Option::is_none")]
    pub snapshot_dir: Option<String>,
    #[serde(default, rename = "efiDir", skip_serializing_if = "Option::is_none")]
    pub efi_dir: Option<String>,
    #[serde(default, rename = "grubScript", skip_serializing_if = "Option::is_none")]
    pub grub_script: Option<String>,
}

/// Resolved path set handed to the prober and the script store. Passed
/// explicitly so tests can run against isolated temp directories.
#[derive(Debug, Clone)]
pub struct Paths {
    pub snapshot_dir: PathBuf,
    pub efi_dir: PathBuf,
    pub script: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            snapshot_dir: PathBuf::from(DEFAULT_SNAPSHOT_DIR),
            efi_dir: PathBuf::from(DEFAULT_EFI_DIR),
            script: PathBuf::from(DEFAULT_GRUB_SCRIPT),
        }
    }
}

impl Paths {
    /// Discovery roots in scan order: snapshot root before efi root.
    pub fn roots(&self) -> Vec<PathBuf> {
        vec![self.snapshot_dir.clone(), self.efi_dir.clone()]
    }
}

/// Loads the optional config file. A missing file is not an error and
/// yields the built-in defaults.
pub fn load_paths(path: &Path) -> Result<Paths> {
    if !path.exists() {
        return Ok(Paths::default());
    }
    let mut contents = String::new();
    File::open(path)?.read_to_string(&mut contents)?;
    let cfg: Config =
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
    resolve(cfg)
}

fn resolve(cfg: Config) -> Result<Paths> {
    let defaults = Paths::default();
    let paths = Paths {
        snapshot_dir: cfg
            .snapshot_dir
            .map(PathBuf::from)
            .unwrap_or(defaults.snapshot_dir),
        efi_dir: cfg.efi_dir.map(PathBuf::from).unwrap_or(defaults.efi_dir),
        script: cfg
            .grub_script
            .map(PathBuf::from)
            .unwrap_or(defaults.script),
    };
    for (label, p) in [
        ("snapshotDir", &paths.snapshot_dir),
        ("efiDir", &paths.efi_dir),
        ("grubScript", &paths.script),
    ] {
        if !p.is_absolute() {
            return Err(
                ConfigError::Invalid(format!("{} must be an absolute path", label)).into(),
            );
        }
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_paths_with_overrides() {
        let mut file = NamedTempFile::new().expect("tempfile");
        let yaml = r#"
snapshotDir: "/srv/snapshots"
grubScript: "/etc/grub.d/41_test"
"#;
        file.write_all(yaml.as_bytes()).expect("write");
        let paths = load_paths(file.path()).expect("load");
        assert_eq!(paths.snapshot_dir, PathBuf::from("/srv/snapshots"));
        assert_eq!(paths.efi_dir, PathBuf::from(DEFAULT_EFI_DIR));
        assert_eq!(paths.script, PathBuf::from("/etc/grub.d/41_test"));
    }

    #[test]
    fn missing_config_yields_defaults() {
        let paths = load_paths(Path::new("/nonexistent/bootrecov.yaml")).expect("load");
        assert_eq!(paths.script, PathBuf::from(DEFAULT_GRUB_SCRIPT));
    }

    #[test]
    fn relative_path_rejected() {
        let mut file = NamedTempFile::new().expect("tempfile");
        file.write_all(b"efiDir: \"relative/dir\"\n").expect("write");
        assert!(load_paths(file.path()).is_err());
    }
}
