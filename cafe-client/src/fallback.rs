//! Hardcoded sample data
//!
//! Substituted when every remote source fails so the storefront always has
//! something to render.

use shared::{Category, MenuItem};

pub fn sample_categories() -> Vec<Category> {
    vec![
        Category::new(1, "Напитки", "drinks", Some(1)),
        Category::new(2, "Выпечка", "desserts", Some(1)),
        Category::new(3, "Десерты", "desserts", Some(1)),
    ]
}

pub fn sample_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(1, "Американо", 150, "drinks")
            .with_description("Кофе 250 мл")
            .with_address("a1"),
        MenuItem::new(2, "Капучино", 210, "drinks")
            .with_description("Кофе с молоком 300 мл")
            .with_address("a1"),
        MenuItem::new(3, "Латте", 230, "drinks")
            .with_description("Нежный латте 300 мл")
            .with_address("a1"),
        MenuItem::new(4, "Круассан", 180, "desserts")
            .with_description("Сливочный, свежая выпечка")
            .with_address("a2"),
        MenuItem::new(5, "Чизкейк", 260, "desserts")
            .with_description("Классический Нью-Йорк")
            .with_address("a2"),
    ]
}
