//! Behavioural tests for the email-generator crate.
//!
//! These tests validate batch generation, history persistence, prefix
//! search, and input validation against Gherkin scenarios.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]


use camino::Utf8PathBuf;
use email_generator::{
    Culture, EmailRecord, Gender, HistoryStore, InputError, validate_count,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use test_support::{FIXTURE_TIMESTAMP, seeded_generator, unique_history_path, write_file};

// ============================================================================
// Test fixtures and constants
// ============================================================================

/// Seed shared by every generating step.
const GENERATOR_SEED: u64 = 42;

/// Builds the history JSON used by the search scenarios.
fn known_history_json() -> String {
    let entries = [
        ("john.smith@gmail.com", "male", "generic"),
        ("jordan_brown@aol.com", "neutral", "generic"),
        ("joseph@yahoo.com", "male", "irish"),
        ("msmith@outlook.com", "male", "generic"),
        ("John42@icloud.com", "male", "generic"),
    ];
    let objects: Vec<String> = entries
        .iter()
        .map(|(email, gender, culture)| {
            format!(
                r#"{{"email": "{email}", "gender": "{gender}", "culture": "{culture}", "timestamp": "{FIXTURE_TIMESTAMP}"}}"#
            )
        })
        .collect();
    format!("[{}]", objects.join(", "))
}

/// Test world holding the history location and step outcomes.
#[derive(Default, ScenarioState)]
struct World {
    history_path: Slot<Utf8PathBuf>,
    generated: Slot<Vec<EmailRecord>>,
    reloaded: Slot<Vec<EmailRecord>>,
    search_results: Slot<Vec<String>>,
    count_result: Slot<Result<usize, InputError>>,
    gender_result: Slot<Result<Gender, InputError>>,
}

impl World {
    /// Extracts the history path from the world state.
    fn history_path(&self) -> Utf8PathBuf {
        self.history_path.get().expect("history path should be set")
    }

    /// Opens the history store at the configured path.
    fn open_store(&self) -> HistoryStore {
        HistoryStore::open(&self.history_path()).expect("history should open")
    }

    /// Extracts the generated records from the world state.
    fn generated(&self) -> Vec<EmailRecord> {
        self.generated.get().expect("records should be generated")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn parse_gender(raw: &str) -> Gender {
    raw.parse().expect("scenario gender should be valid")
}

fn parse_culture(raw: &str) -> Culture {
    raw.parse().expect("scenario culture should be valid")
}

// ============================================================================
// Given steps
// ============================================================================

#[given("an empty history file")]
fn an_empty_history_file(world: &World) {
    let path = unique_history_path("bdd-empty").expect("temp path");
    world.history_path.set(path);
}

#[given("a history file with known emails")]
fn a_history_file_with_known_emails(world: &World) {
    let path = unique_history_path("bdd-known").expect("temp path");
    write_file(&path, &known_history_json()).expect("write history");
    world.history_path.set(path);
}

// ============================================================================
// When steps
// ============================================================================

#[when("{count:usize} {gender} emails are generated for the {culture} culture")]
fn emails_are_generated(world: &World, count: usize, gender: String, culture: String) {
    let mut store = world.open_store();
    let mut generator = seeded_generator(GENERATOR_SEED);
    let records = generator
        .generate_multiple(
            &mut store,
            count,
            parse_gender(&gender),
            parse_culture(&culture),
        )
        .expect("generation succeeds");
    world.generated.set(records);
}

#[when("the history is reloaded")]
fn the_history_is_reloaded(world: &World) {
    let store = world.open_store();
    world.reloaded.set(store.records().to_vec());
}

#[when("searching for prefix {prefix} among {gender} {culture} emails")]
fn searching_for_prefix(world: &World, prefix: String, gender: String, culture: String) {
    let store = world.open_store();
    let results = store
        .search(&prefix, parse_gender(&gender), parse_culture(&culture))
        .into_iter()
        .map(str::to_owned)
        .collect();
    world.search_results.set(results);
}

#[when("the count {raw} is validated")]
fn the_count_is_validated(world: &World, raw: String) {
    world.count_result.set(validate_count(&raw));
}

#[when("the gender {raw} is chosen")]
fn the_gender_is_chosen(world: &World, raw: String) {
    world.gender_result.set(raw.parse::<Gender>());
}

// ============================================================================
// Then steps
// ============================================================================

#[then("{count:usize} records are returned")]
fn records_are_returned(world: &World, count: usize) {
    assert_eq!(world.generated().len(), count);
}

#[then("every record has gender {gender} and culture {culture}")]
fn every_record_has_gender_and_culture(world: &World, gender: String, culture: String) {
    let expected_gender = parse_gender(&gender);
    let expected_culture = parse_culture(&culture);
    for record in world.generated() {
        assert_eq!(record.gender(), expected_gender, "record: {record:?}");
        assert_eq!(record.culture(), expected_culture, "record: {record:?}");
    }
}

#[then("the history file holds {count:usize} records")]
fn the_history_file_holds_records(world: &World, count: usize) {
    assert_eq!(world.open_store().records().len(), count);
}

#[then("the reloaded history matches the generated records")]
fn the_reloaded_history_matches(world: &World) {
    let reloaded = world.reloaded.get().expect("history should be reloaded");
    assert_eq!(reloaded, world.generated());
}

#[then("the search returns {emails}")]
fn the_search_returns(world: &World, emails: String) {
    let results = world.search_results.get().expect("search should have run");
    let expected: Vec<String> = emails.split(',').map(str::to_owned).collect();
    assert_eq!(results, expected);
}

#[then("no emails are found")]
fn no_emails_are_found(world: &World) {
    let results = world.search_results.get().expect("search should have run");
    assert!(results.is_empty(), "unexpected matches: {results:?}");
}

#[then("validation fails with an invalid count error")]
fn validation_fails_with_invalid_count(world: &World) {
    match world.count_result.get().expect("count should be validated") {
        Err(InputError::InvalidCount { .. }) => {}
        other => panic!("Expected InvalidCount, got: {other:?}"),
    }
}

#[then("the chosen gender is {expected}")]
fn the_chosen_gender_is(world: &World, expected: String) {
    let chosen = world
        .gender_result
        .get()
        .expect("gender should be chosen")
        .expect("gender should be accepted");
    assert_eq!(chosen.key(), expected);
}

#[then("the choice is rejected")]
fn the_choice_is_rejected(world: &World) {
    match world.gender_result.get().expect("gender should be chosen") {
        Err(InputError::InvalidChoice { .. }) => {}
        other => panic!("Expected InvalidChoice, got: {other:?}"),
    }
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/email_generator.feature",
    name = "Batch generation records every email"
)]
fn batch_generation_records_every_email(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/email_generator.feature",
    name = "History survives a reload"
)]
fn history_survives_a_reload(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/email_generator.feature",
    name = "Prefix search ignores case"
)]
fn prefix_search_ignores_case(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/email_generator.feature",
    name = "Prefix search requires an exact gender and culture"
)]
fn prefix_search_requires_exact_gender_and_culture(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/email_generator.feature",
    name = "Prefix search with no matches"
)]
fn prefix_search_with_no_matches(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/email_generator.feature",
    name = "Out-of-range count is rejected"
)]
fn out_of_range_count_is_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/email_generator.feature",
    name = "Non-numeric count is rejected"
)]
fn non_numeric_count_is_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/email_generator.feature",
    name = "Gender choice ignores case"
)]
fn gender_choice_ignores_case(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/email_generator.feature",
    name = "Unknown gender is rejected"
)]
fn unknown_gender_is_rejected(world: World) {
    let _ = world;
}
