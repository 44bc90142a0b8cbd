//! Library layer for memberphotos: bioguide ID extraction and caption resolution.
//!
//! Resolves free-text photo captions (as printed by the GPO member photo
//! archive) to bioguide IDs from a congress-legislators roster, and extracts
//! identifiers from legacy biodisplay URLs.

pub mod bioguide;
pub mod normalize;
pub mod resolve;
pub mod roster;
pub mod special_cases;

pub use bioguide::{bioguide_id_from_url, bioguide_id_valid};
pub use normalize::reverse_names;
pub use resolve::{resolve, Caption, MatchRule, Resolution, Resolver};
pub use roster::{
    load_roster, parse_roster, remove_from_roster, roster_to_yaml, Legislator, LegislatorId,
    LegislatorName, RosterError,
};
pub use special_cases::{
    load_special_cases, load_special_cases_file, parse_special_cases, SpecialCaseError,
    SpecialCases,
};
