//! Client state
//!
//! One owned value per page load. Only [`crate::Storefront`] mutates it, and
//! every mutation is followed by a re-render of the regions it touches.

use crate::cart::Cart;
use chrono::{DateTime, Utc};
use shared::{Address, Category, MenuItem, OrderRequest, OrderUser, Restaurant};

/// Address label sent when nothing is selected
const UNKNOWN_ADDRESS: &str = "Не указан";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeInfo {
    pub name: String,
    pub hours_today: String,
    pub addresses: Vec<Address>,
    pub selected_address: usize,
}

impl Default for CafeInfo {
    fn default() -> Self {
        Self {
            name: "You Coffee (Nalchik)".to_string(),
            hours_today: "Пн–Пт: 8:00–20:00 · Сб–Вс: 9:00–18:00".to_string(),
            addresses: vec![
                Address::new(
                    "a1",
                    "г. Примерск, ул. Кофейная, 5",
                    "https://yandex.ru/maps/?text=Примерск%2C%20Кофейная%2C%205",
                ),
                Address::new(
                    "a2",
                    "г. Примерск, пр-т Центральный, 10",
                    "https://yandex.ru/maps/?text=Примерск%2C%20Центральный%2C%2010",
                ),
                Address::new(
                    "a3",
                    "г. Примерск, ул. Парковая, 3",
                    "https://yandex.ru/maps/?text=Примерск%2C%20Парковая%2C%203",
                ),
            ],
            selected_address: 0,
        }
    }
}

impl CafeInfo {
    /// Make sure there is always something to select
    pub fn ensure_address(&mut self) {
        if self.addresses.is_empty() {
            self.addresses.push(Address::placeholder());
            self.selected_address = 0;
        }
    }

    /// Index actually in effect: out of range falls back to the first entry
    pub fn selected_index(&self) -> usize {
        if self.selected_address < self.addresses.len() {
            self.selected_address
        } else {
            0
        }
    }

    pub fn selected_address(&self) -> Option<&Address> {
        self.addresses.get(self.selected_index())
    }

    /// Replace the built-in addresses with backend restaurants.
    ///
    /// The cafe takes the name of the first restaurant.
    pub fn apply_restaurants(&mut self, restaurants: &[Restaurant]) {
        self.addresses = restaurants.iter().map(Address::from_restaurant).collect();
        if let Some(first) = restaurants.first() {
            self.name = first.name.clone();
        }
        self.ensure_address();
    }
}

/// Snapshot of the state generation when a load was started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct ClientState {
    pub cafe: CafeInfo,
    pub menu: Vec<MenuItem>,
    pub categories: Vec<Category>,
    pub cart: Cart,
    /// `None` shows every category
    pub active_category: Option<String>,
    pub address_list_expanded: bool,
    generation: u64,
}

impl ClientState {
    pub fn new(cafe: CafeInfo) -> Self {
        Self {
            cafe,
            ..Default::default()
        }
    }

    pub fn selected_address(&self) -> Option<&Address> {
        self.cafe.selected_address()
    }

    /// Restaurant the page is scoped to
    pub fn restaurant_scope(&self) -> Option<i64> {
        self.selected_address().and_then(Address::restaurant_id)
    }

    /// Switch pickup address. Carts never span locations, so this empties
    /// the cart and clears the category filter.
    ///
    /// Returns `false` for an out-of-range index.
    pub fn select_address(&mut self, index: usize) -> bool {
        if index >= self.cafe.addresses.len() {
            return false;
        }
        self.cafe.selected_address = index;
        self.cart.clear();
        self.active_category = None;
        self.address_list_expanded = false;
        self.generation += 1;
        true
    }

    pub fn ticket(&self) -> LoadTicket {
        LoadTicket(self.generation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Order payload for the current cart
    pub fn build_order(&self, user: Option<OrderUser>, at: DateTime<Utc>) -> OrderRequest {
        let address = self
            .selected_address()
            .map_or(UNKNOWN_ADDRESS, |address| address.label.as_str());
        OrderRequest::new(
            self.cart.order_lines(),
            address,
            self.restaurant_scope(),
            user,
            at,
        )
    }
}
