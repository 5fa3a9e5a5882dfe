use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// `snapshot_<first 6 chars of the contract>.csv`. Shorter contract strings
/// just use what is there.
pub fn file_name(contract: &str) -> String {
    let prefix: String = contract.chars().take(6).collect();
    format!("snapshot_{}.csv", prefix)
}

/// Ephemeral CSV artifact for one snapshot, written under the OS temp
/// directory. The file is removed when the value is dropped, so every handler
/// exit path cleans up. Two concurrent invocations for the same contract
/// share a path; that race is accepted.
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn write(contract: &str, csv: &str) -> io::Result<Self> {
        let path = std::env::temp_dir().join(file_name(contract));
        fs::write(&path, csv)?;

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SnapshotFile {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            log::warn!("Failed to remove {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_truncates_to_six_chars() {
        assert_eq!(file_name("0xABCDEF123"), "snapshot_0xABCD.csv");
    }

    #[test]
    fn file_name_keeps_short_contracts_whole() {
        assert_eq!(file_name("0xAB"), "snapshot_0xAB.csv");
    }

    #[test]
    fn write_puts_the_rendered_csv_on_disk() {
        let file = SnapshotFile::write("0xWRITETEST", "Wallet,Balance\n0x1,5").unwrap();

        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "Wallet,Balance\n0x1,5"
        );
    }

    #[test]
    fn drop_removes_the_file() {
        let file = SnapshotFile::write("0xDROPTEST", "Wallet,Balance").unwrap();
        let path = file.path().to_path_buf();
        assert!(path.exists());

        drop(file);

        assert!(!path.exists());
    }
}
