// tests/search_tests.rs
mod common;

use common::*;

#[test]
fn empty_query_yields_empty_not_everything() {
  setup_tracing();
  let repo = seeded_repo(&[("rake", "Berlin", 1), ("hoe", "Munich", 2)]);

  assert!(repo.search("", &["name", "city"]).unwrap().is_empty());
  assert!(repo.search("   ", &["name", "city"]).unwrap().is_empty());
}

#[test]
fn query_matching_nothing_yields_empty() {
  setup_tracing();
  let repo = seeded_repo(&[("rake", "Berlin", 1), ("hoe", "Munich", 2)]);

  assert!(repo.search("zanzibar", &["name", "city"]).unwrap().is_empty());
}

#[test]
fn matching_is_case_insensitive() {
  setup_tracing();
  let repo = seeded_repo(&[("Rake", "Berlin", 1), ("hoe", "Munich", 2)]);

  let by_city = repo.search("berlin", &["city"]).unwrap();
  assert_eq!(by_city.len(), 1);
  assert_eq!(by_city[0].city, "Berlin");

  let by_name = repo.search("RAKE", &["name"]).unwrap();
  assert_eq!(by_name.len(), 1);
}

#[test]
fn substring_matches_anywhere_in_the_field() {
  setup_tracing();
  let repo = seeded_repo(&[("garden rake", "Berlin", 1), ("hoe", "Munich", 2)]);

  let hits = repo.search("rak", &["name"]).unwrap();
  assert_eq!(hits.len(), 1);
}

#[test]
fn only_the_named_fields_participate() {
  setup_tracing();
  let repo = seeded_repo(&[("berlin-special", "Munich", 1)]);

  // "berlin" occurs in the name, but we only search the city field
  assert!(repo.search("berlin", &["city"]).unwrap().is_empty());
  assert_eq!(repo.search("berlin", &["name", "city"]).unwrap().len(), 1);
}

#[test]
fn unknown_field_names_are_ignored() {
  setup_tracing();
  let repo = seeded_repo(&[("rake", "Berlin", 1)]);

  assert!(repo.search("rake", &["color"]).unwrap().is_empty());
  assert_eq!(repo.search("rake", &["color", "name"]).unwrap().len(), 1);
}
