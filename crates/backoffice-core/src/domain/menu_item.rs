// ============================================================================
// Back-office Core - Menu Item Entity
// File: crates/backoffice-core/src/domain/menu_item.rs
// Description: Sellable catalog entry and its form payload
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use backoffice_shared::constants::{
    DEFAULT_BEVERAGE_IMAGE, DEFAULT_FOOD_IMAGE, MAX_IMAGE_URL_LENGTH, MAX_MENU_DESCRIPTION_LENGTH,
    MAX_MENU_NAME_LENGTH,
};
use backoffice_shared::utils::{non_blank, trim_owned};
use backoffice_shared::AuditFields;

use crate::error::DomainError;

/// Sequential identifier rendered as a decimal string ("1", "2", ...)
pub type MenuItemId = String;

/// Menu category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[serde(alias = "makanan")]
    Food,
    #[serde(alias = "minuman")]
    Beverage,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Food, Category::Beverage];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Beverage => "beverage",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" | "makanan" => Some(Category::Food),
            "beverage" | "minuman" => Some(Category::Beverage),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placeholder images used when a draft leaves the image blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultImages {
    pub food: String,
    pub beverage: String,
}

impl DefaultImages {
    pub fn new(food: impl Into<String>, beverage: impl Into<String>) -> Self {
        Self {
            food: food.into(),
            beverage: beverage.into(),
        }
    }

    pub fn for_category(&self, category: Category) -> &str {
        match category {
            Category::Food => &self.food,
            Category::Beverage => &self.beverage,
        }
    }
}

impl Default for DefaultImages {
    fn default() -> Self {
        Self::new(DEFAULT_FOOD_IMAGE, DEFAULT_BEVERAGE_IMAGE)
    }
}

/// Add/edit form payload. Everything except the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MenuItemDraft {
    #[validate(length(min = 1, max = MAX_MENU_NAME_LENGTH, message = "Menu name is required (max 100 characters)"))]
    pub name: String,

    #[validate(range(min = 1, message = "Price must be greater than 0"))]
    pub price: u64,

    pub category: Category,

    #[validate(length(min = 1, max = MAX_MENU_DESCRIPTION_LENGTH, message = "Description is required (max 1000 characters)"))]
    pub description: String,

    /// Blank or missing falls back to the category placeholder
    #[serde(default)]
    #[validate(url(message = "Invalid image URL"), length(max = MAX_IMAGE_URL_LENGTH, message = "Image URL too long"))]
    pub image: Option<String>,

    #[serde(default)]
    pub available: Option<bool>,
}

impl MenuItemDraft {
    pub fn new(name: &str, category: Category, price: u64, description: &str) -> Self {
        Self {
            name: name.to_string(),
            price,
            category,
            description: description.to_string(),
            image: None,
            available: None,
        }
    }

    pub fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }

    pub fn with_available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    /// Trim text fields and drop a blank image.
    pub fn normalized(self) -> Self {
        Self {
            name: trim_owned(&self.name),
            description: trim_owned(&self.description),
            image: non_blank(self.image),
            ..self
        }
    }

    /// Normalize then validate; the returned draft is safe to commit.
    pub fn validated(self) -> Result<Self, DomainError> {
        let draft = self.normalized();
        draft
            .validate()
            .map_err(|e| DomainError::ValidationError(describe_validation_errors(&e)))?;
        Ok(draft)
    }
}

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: u64,
    pub category: Category,
    pub image: String,
    pub available: bool,
    pub description: String,

    #[serde(flatten)]
    pub audit: AuditFields,
}

impl MenuItem {
    /// Build a new item from an already validated draft.
    pub fn from_draft(id: MenuItemId, draft: MenuItemDraft, images: &DefaultImages) -> Self {
        let image = draft
            .image
            .unwrap_or_else(|| images.for_category(draft.category).to_string());

        Self {
            id,
            name: draft.name,
            price: draft.price,
            category: draft.category,
            image,
            available: draft.available.unwrap_or(true),
            description: draft.description,
            audit: AuditFields::default(),
        }
    }

    /// Replace every editable field. Id and `created_at` stay.
    pub fn apply_draft(&mut self, draft: MenuItemDraft, images: &DefaultImages) {
        self.image = draft
            .image
            .unwrap_or_else(|| images.for_category(draft.category).to_string());
        self.name = draft.name;
        self.price = draft.price;
        self.category = draft.category;
        self.description = draft.description;
        if let Some(available) = draft.available {
            self.available = available;
        }
        self.audit.touch();
    }
}

fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(msg) => format!("{}: {}", field, msg),
                None => format!("{}: {}", field, err.code),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!(Category::from_str("FOOD"), Some(Category::Food));
        assert_eq!(Category::from_str("minuman"), Some(Category::Beverage));
        assert_eq!(Category::from_str("dessert"), None);

        let parsed: Category = serde_json::from_str("\"makanan\"").unwrap();
        assert_eq!(parsed, Category::Food);
        assert_eq!(serde_json::to_string(&Category::Beverage).unwrap(), "\"beverage\"");
    }

    #[test]
    fn test_draft_validation_rejects_missing_fields() {
        let err = MenuItemDraft::new("   ", Category::Food, 15000, "Pedas").validated();
        assert!(matches!(err, Err(DomainError::ValidationError(msg)) if msg.contains("name")));

        let err = MenuItemDraft::new("Mie Ayam", Category::Food, 0, "Gurih").validated();
        assert!(matches!(err, Err(DomainError::ValidationError(msg)) if msg.contains("price")));

        let err = MenuItemDraft::new("Mie Ayam", Category::Food, 12000, "").validated();
        assert!(matches!(err, Err(DomainError::ValidationError(msg)) if msg.contains("description")));
    }

    #[test]
    fn test_draft_requires_category() {
        let missing = serde_json::from_str::<MenuItemDraft>(
            r#"{"name":"Es Teh","price":5000,"description":"Teh dingin"}"#,
        );
        assert!(missing.is_err());

        let draft: MenuItemDraft = serde_json::from_str(
            r#"{"name":"Es Teh","price":5000,"category":"minuman","description":"Teh dingin"}"#,
        )
        .unwrap();
        assert_eq!(draft.category, Category::Beverage);
    }

    #[test]
    fn test_draft_validation_rejects_long_name() {
        let name = "a".repeat(MAX_MENU_NAME_LENGTH as usize + 1);
        let err = MenuItemDraft::new(&name, Category::Food, 12000, "Gurih").validated();
        assert!(matches!(err, Err(DomainError::ValidationError(msg)) if msg.contains("name")));
    }

    #[test]
    fn test_draft_validation_rejects_bad_image_url() {
        let err = MenuItemDraft::new("Mie Ayam", Category::Food, 12000, "Gurih")
            .with_image("bukan url")
            .validated();
        assert!(matches!(err, Err(DomainError::ValidationError(msg)) if msg.contains("image")));
    }

    #[test]
    fn test_from_draft_applies_defaults() {
        let draft = MenuItemDraft::new(" Es Teh ", Category::Beverage, 5000, "Teh dingin")
            .with_image("")
            .validated()
            .unwrap();
        let item = MenuItem::from_draft("7".into(), draft, &DefaultImages::default());

        assert_eq!(item.id, "7");
        assert_eq!(item.name, "Es Teh");
        assert_eq!(item.image, DEFAULT_BEVERAGE_IMAGE);
        assert!(item.available);
        assert!(item.audit.modified_at.is_none());
    }

    #[test]
    fn test_apply_draft_preserves_identity() {
        let draft = MenuItemDraft::new("Kopi Susu", Category::Beverage, 18000, "Kopi gula aren")
            .with_available(false);
        let mut item = MenuItem::from_draft("3".into(), draft, &DefaultImages::default());
        let created_at = item.audit.created_at;

        let edit = MenuItemDraft::new("Roti Bakar", Category::Food, 20000, "Cokelat keju")
            .validated()
            .unwrap();
        item.apply_draft(edit, &DefaultImages::default());

        assert_eq!(item.id, "3");
        assert_eq!(item.name, "Roti Bakar");
        assert_eq!(item.category, Category::Food);
        assert_eq!(item.image, DEFAULT_FOOD_IMAGE);
        // availability was not part of the edit
        assert!(!item.available);
        assert_eq!(item.audit.created_at, created_at);
        assert!(item.audit.modified_at.is_some());
    }
}
