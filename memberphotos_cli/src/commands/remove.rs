//! The `remove` subcommand: drop members from a roster and print what remains.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use memberphotos_lib::{load_roster, remove_from_roster, roster_to_yaml, Legislator};

#[derive(Args)]
pub struct RemoveArgs {
    /// Roster YAML in congress-legislators format (defaults to $MEMBERPHOTOS_ROSTER)
    #[arg(long)]
    pub roster: Option<PathBuf>,

    /// Bioguide ID to remove (repeatable)
    #[arg(long = "bioguide", required = true)]
    pub bioguide_ids: Vec<String>,
}

pub fn run(args: &RemoveArgs) -> Result<()> {
    let roster_path = super::roster_path(args.roster.as_deref())?;
    let roster = load_roster(&roster_path)?;

    let before = roster.len();
    let roster = remove_all(roster, &args.bioguide_ids);
    eprintln!(
        "Removed {} of {} requested IDs; {} legislators remain",
        before - roster.len(),
        args.bioguide_ids.len(),
        roster.len()
    );

    print!("{}", roster_to_yaml(&roster)?);
    Ok(())
}

fn remove_all(mut roster: Vec<Legislator>, bioguide_ids: &[String]) -> Vec<Legislator> {
    for id in bioguide_ids {
        let updated = remove_from_roster(&roster, id);
        if updated.len() == roster.len() {
            tracing::warn!("Bioguide ID {} not found in roster", id);
        }
        roster = updated;
    }
    roster
}

#[cfg(test)]
mod tests {
    use super::*;
    use memberphotos_lib::LegislatorName;

    fn member(id: &str) -> Legislator {
        Legislator::new(id, LegislatorName::default())
    }

    #[test]
    fn test_remove_all() {
        let roster = vec![member("A000360"), member("C000127"), member("K000360")];
        let ids = vec![
            "C000127".to_string(),
            "NOT_THERE".to_string(),
            "A000360".to_string(),
        ];
        let remaining = remove_all(roster, &ids);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].bioguide_id(), "K000360");
    }

    #[test]
    fn test_remove_all_repeated_id_removes_once_per_request() {
        let roster = vec![member("A000360"), member("C000127")];
        let ids = vec!["C000127".to_string(), "C000127".to_string()];
        let remaining = remove_all(roster, &ids);
        assert_eq!(remaining.len(), 1);
    }
}
