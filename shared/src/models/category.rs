//! Category Model

use super::slugify;
use serde::{Deserialize, Serialize};

/// Category entity
///
/// Only used as a filter key: menu items reference it by `slug`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub restaurant_id: Option<i64>,
}

impl Category {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        slug: impl Into<String>,
        restaurant_id: Option<i64>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            restaurant_id,
        }
    }
}

/// Category as returned by `GET /api/categories`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub restaurant_id: Option<i64>,
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        let slug = slugify(&dto.name);
        Self {
            id: dto.id,
            name: dto.name,
            slug,
            restaurant_id: dto.restaurant_id,
        }
    }
}

/// `{ "categories": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesEnvelope {
    #[serde(default)]
    pub categories: Option<Vec<CategoryDto>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_derived_from_name() {
        let dto: CategoryDto =
            serde_json::from_str(r#"{"id":7,"name":"Горячие Напитки","restaurant_id":2}"#)
                .unwrap();
        let category = Category::from(dto);
        assert_eq!(category.slug, "горячие_напитки");
        assert_eq!(category.restaurant_id, Some(2));
    }

    #[test]
    fn test_envelope_without_list() {
        let env: CategoriesEnvelope = serde_json::from_str(r#"{"detail":"nope"}"#).unwrap();
        assert!(env.categories.is_none());
    }
}
