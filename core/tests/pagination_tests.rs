// tests/pagination_tests.rs
mod common;

use common::*;
use tabula::{PageRequest, SortDirection};

fn quantity_ascending(a: &Widget, b: &Widget) -> std::cmp::Ordering {
  a.quantity.cmp(&b.quantity)
}

#[test]
fn envelope_reports_ceiling_of_total_over_limit() {
  setup_tracing();
  let repo = seeded_repo(&[
    ("a", "Berlin", 1),
    ("b", "Berlin", 2),
    ("c", "Berlin", 3),
    ("d", "Berlin", 4),
    ("e", "Berlin", 5),
  ]);

  let page = repo.page(&PageRequest::new(1, 2), None, None).unwrap();
  assert_eq!(page.total, 5);
  assert_eq!(page.limit, 2);
  assert_eq!(page.total_pages, 3);
  assert_eq!(page.items.len(), 2);
}

#[test]
fn concatenated_pages_reproduce_the_sorted_set_exactly_once() {
  setup_tracing();
  let repo = seeded_repo(&[
    ("a", "Berlin", 31),
    ("b", "Berlin", 4),
    ("c", "Berlin", 18),
    ("d", "Berlin", 7),
    ("e", "Berlin", 25),
    ("f", "Berlin", 2),
    ("g", "Berlin", 12),
  ]);
  let request_limit = 3;

  let first = repo
    .page(
      &PageRequest::new(1, request_limit),
      None,
      Some((&quantity_ascending, SortDirection::Ascending)),
    )
    .unwrap();

  let mut collected = Vec::new();
  for page_number in 1..=first.total_pages {
    let page = repo
      .page(
        &PageRequest::new(page_number, request_limit),
        None,
        Some((&quantity_ascending, SortDirection::Ascending)),
      )
      .unwrap();
    collected.extend(page.items);
  }

  assert_eq!(collected.len(), 7);
  let quantities: Vec<i64> = collected.iter().map(|w| w.quantity).collect();
  assert_eq!(quantities, vec![2, 4, 7, 12, 18, 25, 31]);
}

#[test]
fn descending_sort_reverses_the_comparator() {
  setup_tracing();
  let repo = seeded_repo(&[("a", "Berlin", 1), ("b", "Berlin", 3), ("c", "Berlin", 2)]);

  let page = repo
    .page(
      &PageRequest::new(1, 10),
      None,
      Some((&quantity_ascending, SortDirection::Descending)),
    )
    .unwrap();
  let quantities: Vec<i64> = page.items.iter().map(|w| w.quantity).collect();
  assert_eq!(quantities, vec![3, 2, 1]);
}

#[test]
fn filter_applies_before_the_slice_and_the_envelope() {
  setup_tracing();
  let repo = seeded_repo(&[
    ("a", "Berlin", 1),
    ("b", "Munich", 2),
    ("c", "Berlin", 3),
    ("d", "Berlin", 4),
  ]);

  let page = repo
    .page(
      &PageRequest::new(1, 2),
      Some(&|w: &Widget| w.city == "Berlin"),
      None,
    )
    .unwrap();
  assert_eq!(page.total, 3);
  assert_eq!(page.total_pages, 2);
  assert!(page.items.iter().all(|w| w.city == "Berlin"));
}

#[test]
fn page_map_keeps_the_envelope() {
  setup_tracing();
  let repo = seeded_repo(&[("a", "Berlin", 1), ("b", "Berlin", 2), ("c", "Berlin", 3)]);

  let page = repo.page(&PageRequest::new(1, 2), None, None).unwrap();
  let names = page.map(|w| w.name);
  assert_eq!(names.total, 3);
  assert_eq!(names.total_pages, 2);
  assert_eq!(names.items.len(), 2);
}
