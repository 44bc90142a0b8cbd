//! CLI subcommand implementations.

pub mod extract_id;
pub mod remove;
pub mod resolve;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

/// Environment variable naming the default roster file.
pub const ROSTER_ENV: &str = "MEMBERPHOTOS_ROSTER";

/// `--roster` if given, otherwise `MEMBERPHOTOS_ROSTER` (which may come from `.env`).
pub fn roster_path(arg: Option<&Path>) -> Result<PathBuf> {
    match arg
        .map(Path::to_path_buf)
        .or_else(|| std::env::var(ROSTER_ENV).ok().map(PathBuf::from))
    {
        Some(path) => Ok(path),
        None => bail!(
            "no roster given: pass --roster <file> or set {} (e.g. congress-legislators/legislators-current.yaml)",
            ROSTER_ENV
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_path_prefers_argument() {
        let path = roster_path(Some(Path::new("roster.yaml"))).unwrap();
        assert_eq!(path, PathBuf::from("roster.yaml"));
    }
}
