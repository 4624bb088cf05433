//! Shopping cart
//!
//! Entries are keyed by item id. An entry never holds a quantity below 1:
//! the change that would take it to zero removes it instead.

use shared::{MenuItem, OrderLine};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    /// Item snapshot taken when it was added
    pub item: MenuItem,
    pub qty: i64,
}

impl CartEntry {
    pub fn line_total(&self) -> i64 {
        self.qty * self.item.price
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartSummary {
    pub total_qty: i64,
    pub total_price: i64,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.total_qty == 0
    }

    /// Label of the host main button
    pub fn main_button_text(&self) -> String {
        format!("Оформить ({}) — {}₽", self.total_qty, self.total_price)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: BTreeMap<i64, CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `item`
    pub fn add(&mut self, item: &MenuItem) {
        self.entries
            .entry(item.id)
            .and_modify(|entry| entry.qty += 1)
            .or_insert_with(|| CartEntry {
                item: item.clone(),
                qty: 1,
            });
    }

    /// Apply `delta` to an existing entry. Returns `false` when there is none.
    pub fn change_qty(&mut self, id: i64, delta: i64) -> bool {
        let Some(entry) = self.entries.get_mut(&id) else {
            return false;
        };
        entry.qty += delta;
        if entry.qty <= 0 {
            self.entries.remove(&id);
        }
        true
    }

    pub fn qty(&self, id: i64) -> Option<i64> {
        self.entries.get(&id).map(|entry| entry.qty)
    }

    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn summary(&self) -> CartSummary {
        self.entries().fold(CartSummary::default(), |acc, entry| CartSummary {
            total_qty: acc.total_qty + entry.qty,
            total_price: acc.total_price + entry.line_total(),
        })
    }

    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.entries()
            .map(|entry| OrderLine {
                id: entry.item.id,
                name: entry.item.name.clone(),
                qty: entry.qty,
                price: entry.item.price,
            })
            .collect()
    }

    /// Re-snapshot entries from a freshly loaded menu.
    ///
    /// Entries whose item is gone are dropped. Returns how many were dropped.
    pub fn refresh(&mut self, menu: &[MenuItem]) -> usize {
        let before = self.entries.len();
        self.entries.retain(|id, entry| {
            match menu.iter().find(|item| item.id == *id) {
                Some(item) => {
                    entry.item = item.clone();
                    true
                }
                None => false,
            }
        });
        before - self.entries.len()
    }
}
