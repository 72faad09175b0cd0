// tests/schema_tests.rs
mod common;

use common::*;
use tabula::{Repository, SchemaGuard};

#[test]
fn first_run_records_the_version_without_wiping() {
  setup_tracing();
  let backend = memory_backend();

  let wiped = SchemaGuard::ensure(&backend, "1.0").unwrap();
  assert!(!wiped);
  assert_eq!(backend.load("__schema_version").unwrap().as_deref(), Some("1.0"));
}

#[test]
fn matching_version_leaves_data_alone() {
  setup_tracing();
  let backend = memory_backend();
  SchemaGuard::ensure(&backend, "1.0").unwrap();

  let repo: Repository<Widget> = Repository::new(backend.clone());
  repo.insert(Widget::new("rake", "Berlin", 1)).unwrap();

  let wiped = SchemaGuard::ensure(&backend, "1.0").unwrap();
  assert!(!wiped);
  assert_eq!(repo.count().unwrap(), 1);
}

#[test]
fn version_mismatch_wipes_every_collection() {
  setup_tracing();
  let backend = memory_backend();
  SchemaGuard::ensure(&backend, "1.0").unwrap();

  let repo: Repository<Widget> = Repository::new(backend.clone());
  repo.insert(Widget::new("rake", "Berlin", 1)).unwrap();
  backend.store("users", "[]").unwrap();

  let wiped = SchemaGuard::ensure(&backend, "2.0").unwrap();
  assert!(wiped);
  assert!(repo.all().unwrap().is_empty());
  assert_eq!(backend.load("users").unwrap(), None);
  assert_eq!(backend.load("__schema_version").unwrap().as_deref(), Some("2.0"));
}

#[test]
fn unversioned_data_is_treated_as_a_mismatch() {
  setup_tracing();
  let backend = memory_backend();
  backend.store("widgets", "[]").unwrap();

  let wiped = SchemaGuard::ensure(&backend, "1.0").unwrap();
  assert!(wiped);
  assert_eq!(backend.load("widgets").unwrap(), None);
}
