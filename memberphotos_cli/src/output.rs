use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

/// One caption and what it resolved to. Unresolved captions keep empty columns.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionResult {
    pub caption: String,
    pub bioguide_id: Option<String>,
    pub name: Option<String>,
    pub rule: Option<String>,
}

/// One URL and the identifier extracted from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedId {
    pub url: String,
    pub bioguide_id: String,
    pub valid: bool,
}

#[derive(Tabled, Serialize)]
struct CaptionRow {
    #[tabled(rename = "Caption")]
    #[serde(rename = "Caption")]
    caption: String,
    #[tabled(rename = "Bioguide")]
    #[serde(rename = "Bioguide")]
    bioguide_id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Rule")]
    #[serde(rename = "Rule")]
    rule: String,
}

#[derive(Tabled, Serialize)]
struct ExtractedIdRow {
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
    #[tabled(rename = "Bioguide")]
    #[serde(rename = "Bioguide")]
    bioguide_id: String,
    #[tabled(rename = "Valid")]
    #[serde(rename = "Valid")]
    valid: bool,
}

// -- Row builders --

fn build_caption_rows(results: &[CaptionResult]) -> Vec<CaptionRow> {
    results
        .iter()
        .map(|r| CaptionRow {
            caption: r.caption.clone(),
            bioguide_id: r.bioguide_id.clone().unwrap_or_default(),
            name: r.name.clone().unwrap_or_default(),
            rule: r.rule.clone().unwrap_or_else(|| "unresolved".to_string()),
        })
        .collect()
}

fn build_extracted_id_rows(ids: &[ExtractedId]) -> Vec<ExtractedIdRow> {
    ids.iter()
        .map(|e| ExtractedIdRow {
            url: e.url.clone(),
            bioguide_id: e.bioguide_id.clone(),
            valid: e.valid,
        })
        .collect()
}

// -- Printing --

pub fn print_caption_results(results: &[CaptionResult], format: &OutputFormat) -> Result<()> {
    print_rows(build_caption_rows(results), format)
}

pub fn print_extracted_ids(ids: &[ExtractedId], format: &OutputFormat) -> Result<()> {
    print_rows(build_extracted_id_rows(ids), format)
}

fn print_rows<T: Tabled + Serialize>(rows: Vec<T>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(&rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(&rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in &rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
