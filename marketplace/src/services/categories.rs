// marketplace/src/services/categories.rs

use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::Category;
use crate::state::Marketplace;

/// The whole taxonomy, alphabetical by name.
pub fn all_categories(marketplace: &Marketplace) -> Result<Vec<Category>> {
  let mut categories = marketplace.categories.all()?;
  categories.sort_by(|a, b| a.name.cmp(&b.name));
  Ok(categories)
}

pub fn category_by_slug(marketplace: &Marketplace, slug: &str) -> Result<Category> {
  marketplace
    .categories
    .filtered(&|category: &Category| category.slug == slug)?
    .into_iter()
    .next()
    .ok_or_else(|| AppError::NotFound(format!("Category '{}'", slug)))
}

pub fn category_by_id(marketplace: &Marketplace, id: Uuid) -> Result<Category> {
  marketplace
    .categories
    .find(id)?
    .ok_or_else(|| AppError::NotFound(format!("Category {}", id)))
}

/// Substring search across slug, name, and description.
pub fn search_categories(marketplace: &Marketplace, query: &str) -> Result<Vec<Category>> {
  Ok(
    marketplace
      .categories
      .search(query, &["slug", "name", "description"])?,
  )
}
