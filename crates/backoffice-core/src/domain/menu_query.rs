//! Menu list filtering (search box + category tabs)

use serde::{Deserialize, Serialize};

use backoffice_shared::utils::contains_ignore_case;

use super::menu_item::{Category, MenuItem};
use crate::error::DomainError;

/// Category tab selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" | "semua" => Ok(CategoryFilter::All),
            other => Category::from_str(other)
                .map(CategoryFilter::Only)
                .ok_or_else(|| DomainError::InvalidCategory(s.to_string())),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuQuery {
    pub search: String,
    pub category: CategoryFilter,
    /// Only items that can currently be ordered
    pub available_only: bool,
}

impl MenuQuery {
    pub fn new(search: &str, category: CategoryFilter) -> Self {
        Self {
            search: search.to_string(),
            category,
            available_only: false,
        }
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        contains_ignore_case(&item.name, self.search.trim())
            && self.category.matches(item.category)
            && (!self.available_only || item.available)
    }
}

/// Pure filter. Keeps input order.
pub fn filter_items(items: &[MenuItem], query: &MenuQuery) -> Vec<MenuItem> {
    items.iter().filter(|item| query.matches(item)).cloned().collect()
}

/// Badge counts shown on the category tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub all: usize,
    pub food: usize,
    pub beverage: usize,
}

pub fn category_counts(items: &[MenuItem]) -> CategoryCounts {
    items.iter().fold(
        CategoryCounts {
            all: items.len(),
            ..Default::default()
        },
        |mut counts, item| {
            match item.category {
                Category::Food => counts.food += 1,
                Category::Beverage => counts.beverage += 1,
            }
            counts
        },
    )
}
