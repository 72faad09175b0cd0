// tests/repository_tests.rs
mod common;

use common::*;
use std::sync::Arc;
use tabula::{Repository, StorageBackend, StoreError};
use uuid::Uuid;

#[test]
fn insert_then_find_returns_the_identical_record() {
  setup_tracing();
  let repo = widget_repo();
  let widget = Widget::new("rake", "Berlin", 4);
  let id = widget.id;

  repo.insert(widget.clone()).unwrap();
  let found = repo.find(id).unwrap();
  assert_eq!(found, Some(widget));
}

#[test]
fn insert_with_existing_id_fails() {
  setup_tracing();
  let repo = widget_repo();
  let widget = Widget::new("rake", "Berlin", 4);
  repo.insert(widget.clone()).unwrap();

  let mut twin = Widget::new("hoe", "Munich", 1);
  twin.id = widget.id;
  let result = repo.insert(twin);

  match result {
    Err(StoreError::DuplicateId { collection, id }) => {
      assert_eq!(collection, "widgets");
      assert_eq!(id, widget.id);
    }
    other => panic!("expected DuplicateId, got {:?}", other),
  }
  // the original record is untouched
  assert_eq!(repo.count().unwrap(), 1);
  assert_eq!(repo.find(widget.id).unwrap().unwrap().name, "rake");
}

#[test]
fn update_mutates_one_field_and_advances_updated_at() {
  setup_tracing();
  let repo = widget_repo();
  let widget = Widget::new("rake", "Berlin", 4);
  let id = widget.id;
  let created_at = widget.created_at;
  let original_updated_at = widget.updated_at;
  repo.insert(widget).unwrap();

  let updated = repo.update(id, |w| w.quantity = 9).unwrap();

  assert_eq!(updated.quantity, 9);
  // untouched fields survive the merge
  assert_eq!(updated.name, "rake");
  assert_eq!(updated.city, "Berlin");
  assert_eq!(updated.created_at, created_at);
  assert!(updated.updated_at > original_updated_at);

  // and the persisted copy matches what update returned
  assert_eq!(repo.find(id).unwrap(), Some(updated));
}

#[test]
fn update_unknown_id_is_not_found() {
  setup_tracing();
  let repo = widget_repo();
  let missing = Uuid::new_v4();

  let result = repo.update(missing, |w| w.quantity = 1);
  match result {
    Err(StoreError::NotFound { collection, id }) => {
      assert_eq!(collection, "widgets");
      assert_eq!(id, missing);
    }
    other => panic!("expected NotFound, got {:?}", other),
  }
}

#[test]
fn delete_twice_returns_true_then_false() {
  setup_tracing();
  let repo = seeded_repo(&[("rake", "Berlin", 4), ("hoe", "Munich", 1)]);
  let id = repo.all().unwrap()[0].id;

  assert!(repo.delete(id).unwrap());
  assert_eq!(repo.count().unwrap(), 1);
  assert!(!repo.delete(id).unwrap());
  assert_eq!(repo.count().unwrap(), 1);
}

#[test]
fn filtered_applies_the_caller_predicate() {
  setup_tracing();
  let repo = seeded_repo(&[("rake", "Berlin", 4), ("hoe", "Munich", 1), ("spade", "Berlin", 7)]);

  let heavy = repo.filtered(&|w: &Widget| w.quantity > 3).unwrap();
  assert_eq!(heavy.len(), 2);
  assert!(heavy.iter().all(|w| w.quantity > 3));
}

#[test]
fn get_many_preserves_order_and_skips_dangling_ids() {
  setup_tracing();
  let repo = seeded_repo(&[("rake", "Berlin", 4), ("hoe", "Munich", 1)]);
  let all = repo.all().unwrap();
  let (first, second) = (all[0].id, all[1].id);

  let fetched = repo.get_many(&[second, Uuid::new_v4(), first]).unwrap();
  assert_eq!(fetched.len(), 2);
  assert_eq!(fetched[0].id, second);
  assert_eq!(fetched[1].id, first);
}

#[test]
fn absent_slot_reads_as_empty_collection() {
  setup_tracing();
  let repo = widget_repo();
  assert!(repo.all().unwrap().is_empty());
  assert_eq!(repo.find(Uuid::new_v4()).unwrap(), None);
}

#[test]
fn corrupt_slot_surfaces_as_an_error_not_empty() {
  setup_tracing();
  let backend: Arc<dyn StorageBackend> = memory_backend();
  backend.store("widgets", "{ not json [").unwrap();
  let repo: Repository<Widget> = Repository::new(backend);

  match repo.all() {
    Err(StoreError::Corrupt { collection, .. }) => assert_eq!(collection, "widgets"),
    other => panic!("expected Corrupt, got {:?}", other),
  }
}
