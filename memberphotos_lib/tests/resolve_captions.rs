//! Caption resolution against the YAML roster fixture.

use std::path::{Path, PathBuf};

use memberphotos_lib::{
    load_roster, remove_from_roster, resolve, reverse_names, Legislator, MatchRule, Resolver,
};

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join("legislators-test.yaml")
}

fn load_fixture() -> Vec<Legislator> {
    let roster = load_roster(&fixture_path()).expect("fixture roster loads");
    assert!(!roster.is_empty());
    roster
}

fn rule_for(roster: &[Legislator], caption: &str) -> Option<MatchRule> {
    Resolver::with_default_special_cases()
        .resolve_detailed(roster, Some(caption))
        .map(|r| r.rule)
}

// ---------------------------------------------------------------------------
// reverse_names
// ---------------------------------------------------------------------------

#[test]
fn test_reverse_names() {
    assert_eq!(reverse_names("Hagan, Kay R."), "Kay R. Hagan");
}

// ---------------------------------------------------------------------------
// resolve
// ---------------------------------------------------------------------------

#[test]
fn test_resolve_exact_match_last_first() {
    let roster = load_fixture();
    assert_eq!(resolve(&roster, Some("Alexander, Lamar")), Some("A000360"));
    assert_eq!(rule_for(&roster, "Alexander, Lamar"), Some(MatchRule::Exact));
}

#[test]
fn test_resolve_exact_match_last_first_middle() {
    let roster = load_fixture();
    assert_eq!(resolve(&roster, Some("Amodei, Mark E.")), Some("A000369"));
}

#[test]
fn test_resolve_exact_match_last_nickname() {
    let roster = load_fixture();
    assert_eq!(resolve(&roster, Some("Isakson, Johnny")), Some("I000055"));
}

#[test]
fn test_resolve_with_accented_chars() {
    let roster = load_fixture();
    assert_eq!(resolve(&roster, Some("Velázquez, Nydia M.")), Some("V000081"));
    assert_eq!(resolve(&roster, Some("Velazquez, Nydia M.")), Some("V000081"));
}

#[test]
fn test_resolve_missing_accents() {
    let roster = load_fixture();
    assert_eq!(resolve(&roster, Some("Cardenas, Tony")), Some("C001097"));
}

#[test]
fn test_resolve_initial_dot_from_middle() {
    let roster = load_fixture();
    assert_eq!(resolve(&roster, Some("Kirk, Mark S.")), Some("K000360"));
    assert_eq!(rule_for(&roster, "Kirk, Mark S."), Some(MatchRule::MiddleInitial));
}

#[test]
fn test_resolve_initial_not_in_display_name() {
    let roster = load_fixture();
    assert_eq!(resolve(&roster, Some("Ayotte, Kelly A.")), Some("A000368"));
}

#[test]
fn test_resolve_remove_nickname_quotes() {
    let roster = load_fixture();
    assert_eq!(resolve(&roster, Some("Barr, Garland “Andy\"")), Some("B001282"));
    assert_eq!(rule_for(&roster, "Barr, Garland “Andy\""), Some(MatchRule::Nickname));
}

#[test]
fn test_resolve_quoted_nickname() {
    let roster = load_fixture();
    assert_eq!(
        resolve(&roster, Some("Fleischmann, Charles J. “Chuck\"")),
        Some("F000459")
    );
}

#[test]
fn test_resolve_nickname_with_suffix() {
    let roster = load_fixture();
    assert_eq!(
        resolve(&roster, Some("Johnson, Henry C. “Hank”, Jr.")),
        Some("J000288")
    );
}

#[test]
fn test_resolve_partial_firstname() {
    let roster = load_fixture();
    assert_eq!(resolve(&roster, Some("Lee, Michael S.")), Some("L000577"));
    assert_eq!(rule_for(&roster, "Lee, Michael S."), Some(MatchRule::PartialGivenName));
}

#[test]
fn test_resolve_partial_firstname_ambiguous() {
    let mut roster = load_fixture();
    let mut mickey = roster
        .iter()
        .find(|l| l.bioguide_id() == "L000551")
        .cloned()
        .expect("Barbara Lee in fixture");
    mickey.id.bioguide = "L000999".to_string();
    mickey.name.first = Some("Mickey".to_string());
    mickey.name.official_full = Some("Mickey Lee".to_string());
    roster.push(mickey);

    assert_eq!(resolve(&roster, Some("Lee, Michael S.")), None);
}

#[test]
fn test_resolve_special_case_b001289() {
    let roster = load_fixture();
    assert_eq!(resolve(&roster, Some("Bradley, Byrne")), Some("B001289"));
    assert_eq!(rule_for(&roster, "Bradley, Byrne"), Some(MatchRule::SpecialCase));
}

#[test]
fn test_resolve_special_case_c001089() {
    let roster = load_fixture();
    assert_eq!(resolve(&roster, Some("Curson, David Alan")), Some("C001089"));
}

#[test]
fn test_resolve_special_case_g000535() {
    let roster = load_fixture();
    assert_eq!(resolve(&roster, Some("Gutierrez, Luis")), Some("G000535"));
}

#[test]
fn test_resolve_empty_text() {
    let roster = load_fixture();
    assert_eq!(resolve(&roster, Some("")), None);
}

#[test]
fn test_resolve_none() {
    let roster = load_fixture();
    assert_eq!(resolve(&roster, None), None);
}

#[test]
fn test_resolve_unknown_caption() {
    let roster = load_fixture();
    assert_eq!(resolve(&roster, Some("Nobody, Anybody Q.")), None);
}

// ---------------------------------------------------------------------------
// remove_from_roster
// ---------------------------------------------------------------------------

#[test]
fn test_remove_from_roster_success() {
    let roster = load_fixture();
    let length_before = roster.len();
    let roster = remove_from_roster(&roster, "C000127");
    assert_eq!(roster.len() + 1, length_before);
    assert!(roster.iter().all(|l| l.bioguide_id() != "C000127"));
}

#[test]
fn test_remove_from_roster_not_found() {
    let roster = load_fixture();
    let length_before = roster.len();
    let roster = remove_from_roster(&roster, "NOT_THERE");
    assert_eq!(roster.len(), length_before);
}

#[test]
fn test_removed_member_no_longer_resolves() {
    let roster = load_fixture();
    let roster = remove_from_roster(&roster, "A000360");
    assert_eq!(resolve(&roster, Some("Alexander, Lamar")), None);
}
