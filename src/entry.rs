use std::path::Path;

use crate::probe::BackupCandidate;
use crate::types::{display_name, EntryId};

pub const MENUENTRY_PREFIX: &str = "menuentry 'Bootrecov ";

/// Heredoc wrapper so GRUB emits the block verbatim instead of evaluating
/// it; robust against shell metacharacters inside backup paths.
pub const BLOCK_OPEN: &str = "cat <<'EOF'";
pub const BLOCK_CLOSE: &str = "EOF";

/// Renders the managed entry block for a backup. Same path, same bytes.
pub fn encode(candidate: &BackupCandidate) -> String {
    let name = candidate.display_name();
    let id = EntryId::for_name(&name);
    let path = candidate.path.display();
    format!(
        "{open}\n\
         menuentry 'Bootrecov {name}' --id {id} {{\n\
         \x20   search --file --set=root {path}/vmlinuz-linux\n\
         \x20   linux {path}/vmlinuz-linux root=UUID=your-root rw\n\
         \x20   initrd {path}/initramfs-linux.img\n\
         }}\n\
         {close}\n",
        open = BLOCK_OPEN,
        close = BLOCK_CLOSE,
    )
}

/// Extracts the display names of all managed entries in the script text.
///
/// Only lines matching `menuentry 'Bootrecov <name>' --id ...` count;
/// everything else, including near-miss lines, is skipped silently because
/// the script may carry arbitrary foreign content. Titles written by older
/// versions held the full backup path, so the captured name is normalized
/// to its base name.
pub fn decode(text: &str) -> Vec<String> {
    let mut names = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        let Some(rest) = line.strip_prefix(MENUENTRY_PREFIX) else {
            continue;
        };
        let Some(end) = rest.find('\'') else {
            continue;
        };
        names.push(display_name(Path::new(&rest[..end])));
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn candidate(path: &str) -> BackupCandidate {
        BackupCandidate {
            path: PathBuf::from(path),
            has_kernel: true,
            has_initramfs: true,
        }
    }

    #[test]
    fn encode_is_deterministic_and_wrapped() {
        let c = candidate("/boot/efi/boot-backups/2024-05-01-120000");
        let block = encode(&c);
        assert_eq!(block, encode(&c));
        assert!(block.starts_with("cat <<'EOF'\n"));
        assert!(block.ends_with("}\nEOF\n"));
        assert!(block.contains(
            "menuentry 'Bootrecov 2024-05-01-120000' --id bootrecov-2024-05-01-120000 {"
        ));
        assert!(block.contains("linux /boot/efi/boot-backups/2024-05-01-120000/vmlinuz-linux"));
        assert!(block.contains("initrd /boot/efi/boot-backups/2024-05-01-120000/initramfs-linux.img"));
    }

    #[test]
    fn decode_roundtrips_encode() {
        let block = encode(&candidate("/var/backups/boot-snapshots/backup1"));
        assert_eq!(decode(&block), vec!["backup1".to_string()]);
    }

    #[test]
    fn decode_ignores_foreign_and_malformed_lines() {
        let text = "#!/bin/bash\n\
                    exec tail -n +3 $0\n\
                    menuentry 'Some other distro' {\n\
                    menuentry 'Bootrecov broken-no-close-quote {\n\
                    \x20  menuentry 'Bootrecov spaced' --id bootrecov-spaced {\n";
        assert_eq!(decode(text), vec!["spaced".to_string()]);
    }

    #[test]
    fn decode_normalizes_full_path_titles() {
        let text = "menuentry 'Bootrecov /boot/efi/boot-backups/old-style' --id bootrecov-old-style {\n";
        assert_eq!(decode(text), vec!["old-style".to_string()]);
    }

    #[test]
    fn decode_empty_text_yields_no_names() {
        assert!(decode("").is_empty());
    }
}
