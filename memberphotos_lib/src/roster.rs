//! Legislator roster in the congress-legislators YAML layout.
//!
//! Only the identifier and name fields are interpreted. Everything else in a
//! record (other ids, bio, terms) is carried along untouched so a roster can be
//! written back out in the shape it was read.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to read roster file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse roster YAML: {0}")]
    YamlParse(#[from] serde_yml::Error),
    #[error("Duplicate bioguide ID in roster: {0}")]
    DuplicateBioguide(String),
}

/// A legislator from the congress-legislators dataset
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Legislator {
    pub id: LegislatorId,
    pub name: LegislatorName,
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_yml::Value>,
}

/// Identifier fields for a legislator
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LegislatorId {
    pub bioguide: String,
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_yml::Value>,
}

/// Name fields for a legislator
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct LegislatorName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_full: Option<String>,
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_yml::Value>,
}

impl Legislator {
    /// Build a record from its identifier and name, with no other fields.
    pub fn new(bioguide: impl Into<String>, name: LegislatorName) -> Self {
        Self {
            id: LegislatorId {
                bioguide: bioguide.into(),
                other: BTreeMap::new(),
            },
            name,
            other: BTreeMap::new(),
        }
    }

    pub fn bioguide_id(&self) -> &str {
        &self.id.bioguide
    }

    pub fn first_name(&self) -> Option<&str> {
        self.name.first.as_deref()
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.name.middle.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.name.last.as_deref()
    }

    pub fn nickname(&self) -> Option<&str> {
        self.name.nickname.as_deref()
    }

    /// The official display name, or `first [middle] last[, suffix]` when the
    /// dataset leaves it out.
    pub fn official_full_name(&self) -> String {
        if let Some(full) = self.name.official_full.as_deref() {
            return full.to_string();
        }
        let parts: Vec<&str> = [self.first_name(), self.middle_name(), self.last_name()]
            .into_iter()
            .flatten()
            .collect();
        let mut composed = parts.join(" ");
        if let Some(suffix) = self.name.suffix.as_deref() {
            composed.push_str(", ");
            composed.push_str(suffix);
        }
        composed
    }
}

/// Parse a roster, rejecting documents that repeat a bioguide ID.
pub fn parse_roster(yaml_content: &str) -> Result<Vec<Legislator>, RosterError> {
    let legislators: Vec<Legislator> = serde_yml::from_str(yaml_content)?;

    let mut seen = HashSet::new();
    for legislator in &legislators {
        if !seen.insert(legislator.bioguide_id()) {
            return Err(RosterError::DuplicateBioguide(
                legislator.bioguide_id().to_string(),
            ));
        }
    }

    Ok(legislators)
}

/// Read and parse a roster file such as `legislators-current.yaml`.
pub fn load_roster(path: &Path) -> Result<Vec<Legislator>, RosterError> {
    let yaml_content = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let legislators = parse_roster(&yaml_content)?;
    tracing::debug!("Loaded {} legislators from {}", legislators.len(), path.display());
    Ok(legislators)
}

/// Serialize a roster back to YAML in the layout it was read from.
pub fn roster_to_yaml(roster: &[Legislator]) -> Result<String, RosterError> {
    Ok(serde_yml::to_string(roster)?)
}

/// Return a new roster without the first record carrying `bioguide_id`.
///
/// Matching is case-sensitive. An identifier not in the roster returns an
/// equal copy, so repeated calls are safe. The input is never modified.
pub fn remove_from_roster(roster: &[Legislator], bioguide_id: &str) -> Vec<Legislator> {
    let position = roster.iter().position(|l| l.bioguide_id() == bioguide_id);

    match position {
        Some(skip) => roster
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, l)| l.clone())
            .collect(),
        None => {
            tracing::debug!("Bioguide ID {} not in roster, nothing removed", bioguide_id);
            roster.to_vec()
        }
    }
}
