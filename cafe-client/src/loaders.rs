//! Remote data loaders
//!
//! None of these return errors: a failed load is logged and replaced by
//! fallback data, so the storefront can always render.

use crate::config::{CATEGORIES_PATH, RESTAURANTS_PATH};
use crate::{CafeClient, ClientError, ClientResult, HttpClient, HttpReply, fallback};
use serde_json::Value;
use shared::models::{CategoriesEnvelope, RestaurantsEnvelope};
use shared::{Category, MenuItem, ProductsPayload, Restaurant};
use tracing::{debug, info, warn};

/// Everything the storefront needs for its first render
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// `None` when restaurants could not be loaded: keep the built-in addresses
    pub restaurants: Option<Vec<Restaurant>>,
    pub categories: Vec<Category>,
    pub menu: Vec<MenuItem>,
}

impl<C: HttpClient> CafeClient<C> {
    /// Load restaurants, categories and menu concurrently
    pub async fn load_catalog(&self) -> Catalog {
        let (restaurants, categories, menu) = tokio::join!(
            self.load_restaurants(),
            self.load_categories(),
            self.load_menu()
        );
        info!(
            restaurants = restaurants.as_ref().map_or(0, Vec::len),
            categories = categories.len(),
            menu = menu.len(),
            "Catalog loaded"
        );
        Catalog {
            restaurants,
            categories,
            menu,
        }
    }

    pub async fn load_restaurants(&self) -> Option<Vec<Restaurant>> {
        let url = self.config.api_url(RESTAURANTS_PATH);
        match self.http.get::<RestaurantsEnvelope>(&url).await {
            Ok(RestaurantsEnvelope {
                restaurants: Some(restaurants),
            }) => Some(restaurants),
            Ok(_) => {
                warn!("Restaurants payload has no `restaurants` list, keeping defaults");
                None
            }
            Err(e) => {
                warn!(error = %e, "Failed to load restaurants, keeping defaults");
                None
            }
        }
    }

    pub async fn load_categories(&self) -> Vec<Category> {
        let url = self.config.api_url(CATEGORIES_PATH);
        match self.http.get::<CategoriesEnvelope>(&url).await {
            Ok(CategoriesEnvelope {
                categories: Some(categories),
            }) => categories.into_iter().map(Category::from).collect(),
            Ok(_) => {
                warn!("Categories payload has no `categories` list");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to load categories, using fallback");
                fallback::sample_categories()
            }
        }
    }

    pub async fn load_menu(&self) -> Vec<MenuItem> {
        match self.fetch_menu().await {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "Failed to load menu, using fallback");
                fallback::sample_menu()
            }
        }
    }

    async fn fetch_menu(&self) -> ClientResult<Vec<MenuItem>> {
        let sources = self.config.menu_sources()?;
        let reply = self.first_successful(&sources).await?;
        let value: Value = reply.json()?;
        Ok(ProductsPayload::classify(value)?.into_menu_items())
    }

    /// First reply with a 2xx status, trying `urls` in order
    pub async fn first_successful(&self, urls: &[String]) -> ClientResult<HttpReply> {
        for url in urls {
            match self.http.get_raw(url).await {
                Ok(reply) if reply.is_success() => {
                    debug!(url = %url, "Menu source succeeded");
                    return Ok(reply);
                }
                Ok(reply) => debug!(url = %url, status = reply.status.as_u16(), "Menu source rejected"),
                Err(e) => debug!(url = %url, error = %e, "Menu source unreachable"),
            }
        }
        Err(ClientError::NoSourceSucceeded { tried: urls.len() })
    }
}
