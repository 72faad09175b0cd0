// tabula/src/query/page.rs

//! Pagination over an already filtered and sorted collection.

use serde::Serialize;

use crate::error::{StoreError, StoreResult};

/// Direction applied to a caller-supplied ascending comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
  Ascending,
  Descending,
}

/// A 1-indexed page request. `page` values below 1 are clamped to 1;
/// `limit` must be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
  pub page: usize,
  pub limit: usize,
}

impl PageRequest {
  pub fn new(page: usize, limit: usize) -> Self {
    Self { page, limit }
  }
}

/// One page of results plus the envelope the UI paginator needs.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
  pub items: Vec<T>,
  pub total: usize,
  pub page: usize,
  pub limit: usize,
  pub total_pages: usize,
}

impl<T> Page<T> {
  /// Maps the page's items while keeping the envelope intact. Used to attach
  /// joined records to a paged result.
  pub fn map<U, F>(self, f: F) -> Page<U>
  where
    F: FnMut(T) -> U,
  {
    Page {
      items: self.items.into_iter().map(f).collect(),
      total: self.total,
      page: self.page,
      limit: self.limit,
      total_pages: self.total_pages,
    }
  }
}

/// Slices `[(page - 1) * limit, page * limit)` out of `records`.
///
/// `total_pages` is `ceil(total / limit)`; a page past the end yields an
/// empty `items` with the envelope still describing the full set.
pub fn paginate<T>(records: Vec<T>, request: &PageRequest) -> StoreResult<Page<T>> {
  if request.limit == 0 {
    return Err(StoreError::InvalidPage("limit must be at least 1".to_string()));
  }
  let page = request.page.max(1);
  let total = records.len();
  let total_pages = total.div_ceil(request.limit);
  let start = (page - 1).saturating_mul(request.limit);

  let items: Vec<T> = records.into_iter().skip(start).take(request.limit).collect();

  Ok(Page {
    items,
    total,
    page,
    limit: request.limit,
    total_pages,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn total_pages_is_ceiling() {
    let page = paginate((0..10).collect(), &PageRequest::new(1, 3)).unwrap();
    assert_eq!(page.total, 10);
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.items, vec![0, 1, 2]);
  }

  #[test]
  fn page_past_the_end_is_empty() {
    let page = paginate(vec![1, 2, 3], &PageRequest::new(9, 2)).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
  }

  #[test]
  fn zero_limit_is_rejected() {
    assert!(paginate(vec![1], &PageRequest::new(1, 0)).is_err());
  }

  #[test]
  fn page_zero_is_clamped_to_one() {
    let page = paginate(vec![1, 2, 3], &PageRequest::new(0, 2)).unwrap();
    assert_eq!(page.items, vec![1, 2]);
    assert_eq!(page.page, 1);
  }
}
