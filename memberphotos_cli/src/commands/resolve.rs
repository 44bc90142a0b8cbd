//! The `resolve` subcommand: map photo captions to bioguide IDs.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use memberphotos_lib::{load_roster, load_special_cases_file, Legislator, Resolver};

use crate::output::{print_caption_results, CaptionResult, OutputFormat};

#[derive(Args)]
pub struct ResolveArgs {
    /// Roster YAML in congress-legislators format (defaults to $MEMBERPHOTOS_ROSTER)
    #[arg(long)]
    pub roster: Option<PathBuf>,

    /// Caption to resolve, e.g. "Hagan, Kay R." (repeatable)
    #[arg(long)]
    pub caption: Vec<String>,

    /// File with one caption per line
    #[arg(long)]
    pub captions_file: Option<PathBuf>,

    /// Extra special-case YAML merged over the built-in table
    #[arg(long)]
    pub special_cases: Option<PathBuf>,
}

pub fn run(args: &ResolveArgs, format: &OutputFormat) -> Result<()> {
    let roster_path = super::roster_path(args.roster.as_deref())?;
    let roster = load_roster(&roster_path)?;
    eprintln!("Loaded {} legislators from {}", roster.len(), roster_path.display());

    let resolver = build_resolver(args.special_cases.as_deref())?;

    let mut captions = args.caption.clone();
    if let Some(ref path) = args.captions_file {
        captions.extend(read_captions(path)?);
    }
    if captions.is_empty() {
        bail!("no captions given: pass --caption or --captions-file");
    }

    let results = resolve_all(&resolver, &roster, &captions);

    let unresolved: Vec<&str> = results
        .iter()
        .filter(|r| r.bioguide_id.is_none())
        .map(|r| r.caption.as_str())
        .collect();
    for caption in &unresolved {
        tracing::warn!("Could not resolve caption '{}'", caption);
    }
    eprintln!(
        "Resolved {}/{} captions",
        results.len() - unresolved.len(),
        results.len()
    );

    print_caption_results(&results, format)
}

/// Built-in special cases, with the entries of `extra` (if any) merged over them.
fn build_resolver(extra: Option<&Path>) -> Result<Resolver> {
    let resolver = Resolver::with_default_special_cases();
    let Some(path) = extra else {
        return Ok(resolver);
    };
    let mut table = resolver.special_cases().clone();
    table.extend(load_special_cases_file(path)?);
    tracing::debug!("Merged special cases from {}", path.display());
    Ok(Resolver::new(table))
}

fn resolve_all(
    resolver: &Resolver,
    roster: &[Legislator],
    captions: &[String],
) -> Vec<CaptionResult> {
    captions
        .iter()
        .map(|caption| match resolver.resolve_detailed(roster, Some(caption)) {
            Some(resolution) => CaptionResult {
                caption: caption.clone(),
                bioguide_id: Some(resolution.bioguide_id().to_string()),
                name: Some(resolution.legislator.official_full_name()),
                rule: Some(resolution.rule.to_string()),
            },
            None => CaptionResult {
                caption: caption.clone(),
                bioguide_id: None,
                name: None,
                rule: None,
            },
        })
        .collect()
}

/// One caption per line; blank lines are skipped.
fn read_captions(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading captions from {}", path.display()))?;
    Ok(parse_caption_lines(&text))
}

fn parse_caption_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
