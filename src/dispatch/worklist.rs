/// Work list loading: one target address per line, blanks ignored.
use std::path::Path;

use crate::error::BotError;

/// Read targets from a newline-separated file. Lines are trimmed and empty
/// lines dropped; no address validation happens here, the chain rejects bad
/// addresses when the first transaction is simulated.
pub fn read_targets(path: &Path) -> Result<Vec<String>, BotError> {
    let display = path.display().to_string();
    let contents =
        std::fs::read_to_string(path).map_err(|_| BotError::WorkListMissing(display.clone()))?;

    let targets: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if targets.is_empty() {
        return Err(BotError::WorkListEmpty(display));
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("empe-bot-worklist-{}", name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_reads_trimmed_nonempty_lines() {
        let path = write_temp(
            "basic.txt",
            "empe1aaa\n  empe1bbb  \n\n\nempe1ccc\n",
        );
        let targets = read_targets(&path).unwrap();
        assert_eq!(targets, vec!["empe1aaa", "empe1bbb", "empe1ccc"]);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("empe-bot-worklist-does-not-exist.txt");
        assert!(matches!(
            read_targets(&path),
            Err(BotError::WorkListMissing(_))
        ));
    }

    #[test]
    fn test_whitespace_only_file_is_empty() {
        let path = write_temp("blank.txt", "\n   \n\t\n");
        assert!(matches!(read_targets(&path), Err(BotError::WorkListEmpty(_))));
        std::fs::remove_file(&path).ok();
    }
}
