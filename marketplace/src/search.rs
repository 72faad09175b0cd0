// marketplace/src/search.rs

//! Listing search: the pure filter/sort/slice pipeline behind the browse
//! page. Operates on a fully materialized listing collection.

use chrono::NaiveDate;

use tabula::{paginate, Page, PageRequest, StoreResult};

use crate::models::Listing;

/// Fixed page size of the search surface. 1-indexed pages.
pub const SEARCH_PAGE_SIZE: usize = 6;

/// A browse query. Every criterion is optional; an empty query matches all
/// active listings.
#[derive(Debug, Clone, Default)]
pub struct ListingSearch {
  /// Case-insensitive substring against city, country, or address.
  pub location: Option<String>,
  pub start_date: Option<NaiveDate>,
  pub end_date: Option<NaiveDate>,
  /// One category slug the listing must include.
  pub category: Option<String>,
  /// Languages the searcher speaks. A listing matches only when the
  /// searcher covers every language spoken at the property; empty means no
  /// language constraint.
  pub languages: Vec<String>,
  pub min_hours: Option<u8>,
  pub max_hours: Option<u8>,
  /// 1-indexed; 0 is treated as the first page.
  pub page: usize,
}

/// Closed-interval intersection on dates. Containment counts as an overlap:
/// a query window fully inside the listing window (or vice versa) matches.
fn windows_intersect(
  listing_from: NaiveDate,
  listing_until: NaiveDate,
  query_start: Option<NaiveDate>,
  query_end: Option<NaiveDate>,
) -> bool {
  let starts_in_time = query_end.map_or(true, |end| listing_from <= end);
  let ends_in_time = query_start.map_or(true, |start| start <= listing_until);
  starts_in_time && ends_in_time
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
  a.eq_ignore_ascii_case(b)
}

/// Whether a single listing satisfies the query. Status is checked first:
/// inactive listings are never eligible, whatever else matches.
pub fn matches(listing: &Listing, query: &ListingSearch) -> bool {
  if !listing.is_active() {
    return false;
  }

  if let Some(location) = &query.location {
    let needle = location.trim().to_lowercase();
    if !needle.is_empty() {
      let haystacks = [
        &listing.location.city,
        &listing.location.country,
        &listing.location.address,
      ];
      if !haystacks.iter().any(|hay| hay.to_lowercase().contains(&needle)) {
        return false;
      }
    }
  }

  if (query.start_date.is_some() || query.end_date.is_some())
    && !windows_intersect(
      listing.available_from,
      listing.available_until,
      query.start_date,
      query.end_date,
    )
  {
    return false;
  }

  if let Some(category) = &query.category {
    if !listing.help_categories.iter().any(|slug| eq_ignore_case(slug, category)) {
      return false;
    }
  }

  // AND semantics: the searcher must cover every language the listing
  // speaks. A listing with ["English", "German"] is out of reach for a
  // query offering only ["English"].
  if !query.languages.is_empty()
    && !listing.languages.iter().all(|required| {
      query.languages.iter().any(|spoken| eq_ignore_case(spoken, required))
    })
  {
    return false;
  }

  if let Some(min_hours) = query.min_hours {
    if listing.hours_per_week < min_hours {
      return false;
    }
  }
  if let Some(max_hours) = query.max_hours {
    if listing.hours_per_week > max_hours {
      return false;
    }
  }

  true
}

/// Filters, sorts newest-created-first (the fixed browse order), and slices
/// the requested page.
pub fn search_listings(listings: Vec<Listing>, query: &ListingSearch) -> StoreResult<Page<Listing>> {
  let mut hits: Vec<Listing> = listings.into_iter().filter(|listing| matches(listing, query)).collect();
  hits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
  paginate(hits, &PageRequest::new(query.page.max(1), SEARCH_PAGE_SIZE))
}
