//! Caption-to-bioguide resolution.
//!
//! Photo captions arrive as loosely formatted `Last, First [M.] ["Nick"]`
//! strings. Resolution runs a fixed chain of rules against the roster and stops
//! at the first hit:
//!
//! 1. Exact display-name match
//! 2. Quoted nickname substituted for the given name
//! 3. Last + first name with middle names/initials treated loosely
//! 4. Last name + given-name prefix, only when a single record qualifies
//! 5. Special-case table
//!
//! All comparisons use folded comparison keys. The identifier returned always
//! comes straight from a roster record.

use std::sync::LazyLock;

use serde::Serialize;

use crate::normalize::{comparison_key, extract_nickname, name_tokens, reverse_names};
use crate::roster::Legislator;
use crate::special_cases::{load_special_cases, SpecialCases};

/// Shortest shared leading stem for a caption given name to count as a longer
/// form of a roster given name. Two letters is enough for `Michael`/`Mike`.
const MIN_SHARED_STEM: usize = 2;

static DEFAULT_RESOLVER: LazyLock<Resolver> = LazyLock::new(|| {
    let special_cases = load_special_cases().unwrap_or_else(|e| {
        tracing::error!("Embedded special-case table failed to load: {}", e);
        SpecialCases::default()
    });
    Resolver::new(special_cases)
});

/// The rule that produced a resolution.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    Exact,
    Nickname,
    MiddleInitial,
    PartialGivenName,
    SpecialCase,
}

impl MatchRule {
    /// Rules in the order they are tried.
    pub const CHAIN: [MatchRule; 5] = [
        MatchRule::Exact,
        MatchRule::Nickname,
        MatchRule::MiddleInitial,
        MatchRule::PartialGivenName,
        MatchRule::SpecialCase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchRule::Exact => "exact",
            MatchRule::Nickname => "nickname",
            MatchRule::MiddleInitial => "middle_initial",
            MatchRule::PartialGivenName => "partial_given_name",
            MatchRule::SpecialCase => "special_case",
        }
    }

    fn apply<'a>(
        self,
        caption: &Caption,
        candidates: &[Candidate<'a>],
        special_cases: &SpecialCases,
    ) -> Option<&'a Legislator> {
        match self {
            MatchRule::Exact => match_exact(caption, candidates),
            MatchRule::Nickname => match_nickname(caption, candidates),
            MatchRule::MiddleInitial => match_middle_initial(caption, candidates),
            MatchRule::PartialGivenName => match_partial_given_name(caption, candidates),
            MatchRule::SpecialCase => match_special_case(caption, candidates, special_cases),
        }
    }
}

impl std::fmt::Display for MatchRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successful resolution: the roster record and the rule that found it.
#[derive(Debug, Clone, Copy)]
pub struct Resolution<'a> {
    pub legislator: &'a Legislator,
    pub rule: MatchRule,
}

impl<'a> Resolution<'a> {
    pub fn bioguide_id(&self) -> &'a str {
        self.legislator.bioguide_id()
    }
}

/// A caption broken into comparison keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    /// Trimmed original text, used for the special-case lookup.
    pub raw: String,
    /// Reversed display form with quote marks removed but nickname text kept.
    pub display: String,
    pub surname: String,
    /// Given-name tokens outside the quoted nickname; first name then middles.
    pub given: Vec<String>,
    pub nickname: Option<String>,
}

impl Caption {
    /// Break a caption apart. Returns `None` for empty or whitespace-only text.
    pub fn parse(text: &str) -> Option<Self> {
        let raw = text.trim();
        if raw.is_empty() {
            return None;
        }

        let display = comparison_key(&reverse_names(raw));
        let (outside, nickname) = extract_nickname(raw);

        let (surname, given) = match outside.split_once(',') {
            Some((surname, given)) => (name_tokens(surname).join(" "), name_tokens(given)),
            None => {
                // No comma: assume display order, surname last.
                let mut tokens = name_tokens(&outside);
                let surname = tokens.pop().unwrap_or_default();
                (surname, tokens)
            }
        };

        Some(Self {
            raw: raw.to_string(),
            display,
            surname,
            given,
            nickname: nickname.map(|n| comparison_key(&n)),
        })
    }

    fn first(&self) -> Option<&str> {
        self.given.first().map(String::as_str)
    }

    fn middles(&self) -> &[String] {
        self.given.get(1..).unwrap_or_default()
    }
}

/// Comparison keys for one roster record, computed once per resolution.
#[derive(Debug)]
struct Candidate<'a> {
    legislator: &'a Legislator,
    display: String,
    first: Option<String>,
    middles: Vec<String>,
    last: Option<String>,
    nickname: Option<String>,
}

impl<'a> Candidate<'a> {
    fn new(legislator: &'a Legislator) -> Self {
        Self {
            legislator,
            display: comparison_key(&legislator.official_full_name()),
            first: legislator.first_name().map(comparison_key),
            middles: legislator.middle_name().map(name_tokens).unwrap_or_default(),
            last: legislator.last_name().map(|l| name_tokens(l).join(" ")),
            nickname: legislator.nickname().map(comparison_key),
        }
    }

    fn nickname_display(&self) -> Option<String> {
        match (&self.nickname, &self.last) {
            (Some(nick), Some(last)) => Some(format!("{} {}", nick, last)),
            _ => None,
        }
    }

    fn surname_matches(&self, caption: &Caption) -> bool {
        !caption.surname.is_empty() && self.last.as_deref() == Some(caption.surname.as_str())
    }

    /// Names this record answers to as a given name.
    fn given_names(&self) -> impl Iterator<Item = &str> {
        self.first
            .as_deref()
            .into_iter()
            .chain(self.nickname.as_deref())
    }
}

fn match_exact<'a>(caption: &Caption, candidates: &[Candidate<'a>]) -> Option<&'a Legislator> {
    if caption.display.is_empty() {
        return None;
    }
    candidates
        .iter()
        .find(|c| c.display == caption.display)
        .map(|c| c.legislator)
}

fn match_nickname<'a>(caption: &Caption, candidates: &[Candidate<'a>]) -> Option<&'a Legislator> {
    let nickname = caption.nickname.as_deref()?;
    let substituted = format!("{} {}", nickname, caption.surname);

    candidates
        .iter()
        .find(|c| c.display == substituted)
        .or_else(|| {
            candidates
                .iter()
                .find(|c| c.nickname_display().as_deref() == Some(substituted.as_str()))
        })
        .map(|c| c.legislator)
}

fn match_middle_initial<'a>(
    caption: &Caption,
    candidates: &[Candidate<'a>],
) -> Option<&'a Legislator> {
    let first = caption.first()?;
    let nickname = caption.nickname.as_deref();

    candidates
        .iter()
        .find(|c| {
            c.surname_matches(caption)
                && c.given_names().any(|g| g == first || nickname == Some(g))
                && middles_compatible(caption.middles(), &c.middles)
        })
        .map(|c| c.legislator)
}

fn match_partial_given_name<'a>(
    caption: &Caption,
    candidates: &[Candidate<'a>],
) -> Option<&'a Legislator> {
    let first = caption.first()?;

    let matches: Vec<&Candidate<'a>> = candidates
        .iter()
        .filter(|c| c.surname_matches(caption))
        .filter(|c| c.given_names().any(|g| prefix_compatible(first, g)))
        .collect();

    match matches.as_slice() {
        [only] => Some(only.legislator),
        [] => None,
        several => {
            let ids: Vec<&str> = several.iter().map(|c| c.legislator.bioguide_id()).collect();
            tracing::warn!(
                "Caption '{}' matches several legislators by partial given name: {:?} -- skipping to avoid a guess",
                caption.raw, ids
            );
            None
        }
    }
}

fn match_special_case<'a>(
    caption: &Caption,
    candidates: &[Candidate<'a>],
    special_cases: &SpecialCases,
) -> Option<&'a Legislator> {
    let bioguide = special_cases.get(&caption.raw)?;
    let found = candidates
        .iter()
        .find(|c| c.legislator.bioguide_id() == bioguide)
        .map(|c| c.legislator);
    if found.is_none() {
        tracing::warn!(
            "Special case for '{}' points at {}, which is not in the roster",
            caption.raw, bioguide
        );
    }
    found
}

/// Middle names agree when either side has none, or when each pair of tokens
/// is equal or one is the initial of the other.
fn middles_compatible(caption: &[String], record: &[String]) -> bool {
    if caption.is_empty() || record.is_empty() {
        return true;
    }
    caption
        .iter()
        .zip(record)
        .all(|(a, b)| a == b || is_initial_of(a, b) || is_initial_of(b, a))
}

fn is_initial_of(initial: &str, name: &str) -> bool {
    let mut chars = initial.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => name.starts_with(c),
        _ => false,
    }
}

/// Caption given name `caption` is compatible with roster name `record` when one
/// starts with the other, or when `record` is a shortened form: `caption` is
/// longer and both share a stem of `MIN_SHARED_STEM` letters.
fn prefix_compatible(caption: &str, record: &str) -> bool {
    if caption.is_empty() || record.is_empty() {
        return false;
    }
    if caption.starts_with(record) || record.starts_with(caption) {
        return true;
    }
    if caption.chars().count() <= record.chars().count() {
        return false;
    }
    let shared = caption
        .chars()
        .zip(record.chars())
        .take_while(|(x, y)| x == y)
        .count();
    shared >= MIN_SHARED_STEM
}

/// Resolves captions against a roster with a given special-case table.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    special_cases: SpecialCases,
}

impl Resolver {
    pub fn new(special_cases: SpecialCases) -> Self {
        Self { special_cases }
    }

    /// Resolver backed by the embedded special-case table.
    pub fn with_default_special_cases() -> Self {
        DEFAULT_RESOLVER.clone()
    }

    pub fn special_cases(&self) -> &SpecialCases {
        &self.special_cases
    }

    /// Bioguide ID for a caption, or `None` when nothing matches.
    pub fn resolve<'a>(&self, roster: &'a [Legislator], caption: Option<&str>) -> Option<&'a str> {
        self.resolve_detailed(roster, caption)
            .map(|resolution| resolution.bioguide_id())
    }

    /// Like [`Resolver::resolve`], but also reports which rule matched.
    pub fn resolve_detailed<'a>(
        &self,
        roster: &'a [Legislator],
        caption: Option<&str>,
    ) -> Option<Resolution<'a>> {
        let caption = Caption::parse(caption?)?;
        let candidates: Vec<Candidate<'a>> = roster.iter().map(Candidate::new).collect();

        for rule in MatchRule::CHAIN {
            if let Some(legislator) = rule.apply(&caption, &candidates, &self.special_cases) {
                tracing::debug!(
                    "Resolved '{}' to {} via {} rule",
                    caption.raw,
                    legislator.bioguide_id(),
                    rule
                );
                return Some(Resolution { legislator, rule });
            }
        }

        tracing::debug!("No roster match for caption '{}'", caption.raw);
        None
    }
}

/// Resolve a caption using the embedded special-case table.
pub fn resolve<'a>(roster: &'a [Legislator], caption: Option<&str>) -> Option<&'a str> {
    DEFAULT_RESOLVER.resolve(roster, caption)
}
