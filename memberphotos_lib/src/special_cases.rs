//! Captions the generic matching rules cannot resolve.
//!
//! Covers swapped name order, legal-name vs display-name mismatches and
//! compound surnames. The table is data: an embedded YAML file compiled in with
//! `include_str!`, optionally extended at runtime from a user file, in the same
//! way ticker aliases and seed mappings are shipped.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::bioguide::bioguide_id_valid;
use crate::normalize::comparison_key;

/// Error types for special-case table operations.
#[derive(Error, Debug)]
pub enum SpecialCaseError {
    #[error("Failed to read special-case file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse special-case YAML: {0}")]
    YamlParse(#[from] serde_yml::Error),
    #[error("Duplicate caption in special-case file: {0}")]
    DuplicateCaption(String),
    #[error("Invalid bioguide ID '{bioguide}' for caption '{caption}'")]
    InvalidBioguide { caption: String, bioguide: String },
}

/// Top-level structure for the special-case YAML file.
#[derive(Deserialize, Debug)]
struct SpecialCaseFile {
    special_cases: Vec<SpecialCase>,
}

/// A single caption-to-identifier override.
#[derive(Deserialize, Debug, Clone)]
pub struct SpecialCase {
    pub caption: String,
    pub bioguide: String,
    /// Free-text explanation for maintainers; not used in lookups.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Lookup table keyed by the caption's comparison key.
#[derive(Debug, Clone, Default)]
pub struct SpecialCases {
    by_caption: HashMap<String, String>,
}

impl SpecialCases {
    /// Identifier for a raw caption, if the table lists it.
    pub fn get(&self, caption: &str) -> Option<&str> {
        self.by_caption
            .get(&comparison_key(caption))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_caption.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_caption.is_empty()
    }

    /// Merge another table over this one. Entries in `other` win.
    pub fn extend(&mut self, other: SpecialCases) {
        self.by_caption.extend(other.by_caption);
    }
}

/// Parse a special-case table from YAML content.
pub fn parse_special_cases(yaml_content: &str) -> Result<SpecialCases, SpecialCaseError> {
    let file: SpecialCaseFile = serde_yml::from_str(yaml_content)?;

    let mut by_caption = HashMap::new();
    for entry in file.special_cases {
        if !bioguide_id_valid(Some(&entry.bioguide)) {
            return Err(SpecialCaseError::InvalidBioguide {
                caption: entry.caption,
                bioguide: entry.bioguide,
            });
        }
        let key = comparison_key(&entry.caption);
        if by_caption.contains_key(&key) {
            return Err(SpecialCaseError::DuplicateCaption(entry.caption));
        }
        by_caption.insert(key, entry.bioguide);
    }

    Ok(SpecialCases { by_caption })
}

/// Load the special-case table embedded at compile time.
pub fn load_special_cases() -> Result<SpecialCases, SpecialCaseError> {
    let yaml_content = include_str!("../../seed_data/special_cases.yml");
    parse_special_cases(yaml_content)
}

/// Load an additional special-case table from disk.
pub fn load_special_cases_file(path: &Path) -> Result<SpecialCases, SpecialCaseError> {
    let yaml_content = std::fs::read_to_string(path).map_err(|source| SpecialCaseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_special_cases(&yaml_content)
}
