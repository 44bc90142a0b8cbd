//! The `extract-id` subcommand: pull bioguide IDs out of legacy biodisplay URLs.

use anyhow::{bail, Result};
use clap::Args;
use memberphotos_lib::{bioguide_id_from_url, bioguide_id_valid};

use crate::output::{print_extracted_ids, ExtractedId, OutputFormat};

#[derive(Args)]
pub struct ExtractIdArgs {
    /// Detail-page URL, e.g. http://bioguide.congress.gov/scripts/biodisplay.pl?index=K000362 (repeatable)
    #[arg(long)]
    pub url: Vec<String>,
}

pub fn run(args: &ExtractIdArgs, format: &OutputFormat) -> Result<()> {
    if args.url.is_empty() {
        bail!("no URLs given: pass --url");
    }

    let ids = extract_all(&args.url);
    for id in ids.iter().filter(|id| !id.valid) {
        tracing::warn!("'{}' from {} is not a valid bioguide ID", id.bioguide_id, id.url);
    }

    print_extracted_ids(&ids, format)
}

fn extract_all(urls: &[String]) -> Vec<ExtractedId> {
    urls.iter()
        .map(|url| {
            let bioguide_id = bioguide_id_from_url(url);
            let valid = bioguide_id_valid(Some(&bioguide_id));
            ExtractedId {
                url: url.clone(),
                bioguide_id,
                valid,
            }
        })
        .collect()
}
