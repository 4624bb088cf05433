//! Storefront controller
//!
//! Owns the client state, the backend client, the host and the rendered
//! page. Every user action is a method here: it mutates state, then
//! re-renders the regions the change touched.

use crate::filter::ALL_CATEGORIES;
use crate::host::{Host, ImpactStyle, NoHost};
use crate::notify::Notification;
use crate::render::{Page, regions};
use crate::state::{ClientState, LoadTicket};
use crate::theme::{ColorScheme, ThemeParams};
use cafe_client::{CafeClient, Catalog, HttpClient, NetworkHttpClient, OrderFailure};
use chrono::Utc;
use tracing::{debug, info, warn};

/// Result of [`Storefront::send_order`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    /// Nothing to send, no request was made
    EmptyCart,
    Failed(OrderFailure),
}

pub struct Storefront<C: HttpClient = NetworkHttpClient, H: Host = NoHost> {
    client: CafeClient<C>,
    host: H,
    state: ClientState,
    page: Page,
    notification: Option<Notification>,
}

impl<C: HttpClient, H: Host> Storefront<C, H> {
    pub fn new(client: CafeClient<C>, host: H) -> Self {
        let mut state = ClientState::default();
        state.cafe.ensure_address();
        Self {
            client,
            host,
            state,
            page: Page::default(),
            notification: None,
        }
    }

    // === Accessors ===

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn client(&self) -> &CafeClient<C> {
        &self.client
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    // === Lifecycle ===

    /// First load: host setup, concurrent catalog load, full render
    pub async fn bootstrap(&mut self) {
        if self.host.is_present() {
            info!("Telegram WebApp initialized");
            self.page
                .render_theme(self.host.theme(), Some(self.host.color_scheme()));
            self.host.ready();
            self.host.expand();
        } else {
            info!("Telegram WebApp not available, running in demo mode");
            self.page.render_theme(None, None);
        }
        self.page.demo_notice = regions::demo_notice(!self.host.is_present());
        self.page.render_cafe(&self.state);

        self.reload().await;

        if self.host.is_present() {
            self.host.ready();
        }
    }

    /// Ticket for a catalog load started now
    pub fn begin_reload(&self) -> LoadTicket {
        self.state.ticket()
    }

    /// Load and apply a fresh catalog. Returns whether it was applied.
    pub async fn reload(&mut self) -> bool {
        let ticket = self.begin_reload();
        let catalog = self.client.load_catalog().await;
        self.apply_catalog(ticket, catalog)
    }

    /// Replace catalog data, unless the state moved on since `ticket`
    pub fn apply_catalog(&mut self, ticket: LoadTicket, catalog: Catalog) -> bool {
        if !self.state.is_current(ticket) {
            warn!("Discarding catalog loaded before the address changed");
            return false;
        }

        if let Some(restaurants) = &catalog.restaurants {
            self.state.cafe.apply_restaurants(restaurants);
        }
        self.state.categories = catalog.categories;
        self.state.menu = catalog.menu;
        let dropped = self.state.cart.refresh(&self.state.menu);
        if dropped > 0 {
            debug!(dropped, "Removed cart entries missing from the new menu");
        }

        self.page.render_all(&self.state);
        self.sync_main_button();
        true
    }

    // === Addresses ===

    pub fn select_address(&mut self, index: usize) -> bool {
        if !self.state.select_address(index) {
            warn!(index, "Address index out of range");
            return false;
        }
        info!(index, restaurant_id = ?self.state.restaurant_scope(), "Address selected");
        self.page.render_all(&self.state);
        self.sync_main_button();
        true
    }

    pub fn toggle_addresses(&mut self) {
        self.state.address_list_expanded = !self.state.address_list_expanded;
        self.page.render_cafe(&self.state);
    }

    // === Categories ===

    /// Chip click: `all` or the already active chip clears the filter
    pub fn click_category(&mut self, slug: &str) {
        if slug == ALL_CATEGORIES || self.state.active_category.as_deref() == Some(slug) {
            self.set_active_category(None);
        } else {
            self.set_active_category(Some(slug.to_string()));
        }
    }

    pub fn set_active_category(&mut self, slug: Option<String>) {
        self.state.active_category = slug;
        self.page.render_catalog(&self.state);
    }

    // === Cart ===

    /// Returns `false` when the item is not on the menu
    pub fn add_to_cart(&mut self, id: i64) -> bool {
        let Some(item) = self.state.menu.iter().find(|item| item.id == id) else {
            debug!(id, "Ignoring add for unknown item");
            return false;
        };
        self.state.cart.add(item);
        if self.host.is_present() {
            self.host.haptic_impact(ImpactStyle::Light);
        }
        self.render_cart();
        true
    }

    pub fn change_qty(&mut self, id: i64, delta: i64) -> bool {
        if !self.state.cart.change_qty(id, delta) {
            return false;
        }
        self.render_cart();
        true
    }

    fn render_cart(&mut self) {
        self.page.render_cart(&self.state);
        self.sync_main_button();
    }

    fn sync_main_button(&mut self) {
        let summary = self.state.cart.summary();
        if summary.is_empty() {
            self.host.hide_main_button();
        } else {
            self.host.show_main_button(&summary.main_button_text());
        }
    }

    // === Orders ===

    /// Submit the cart. No retry: the customer resubmits after a failure.
    pub async fn send_order(&mut self) -> SubmitOutcome {
        if self.state.cart.is_empty() {
            debug!("Cart is empty, nothing to send");
            return SubmitOutcome::EmptyCart;
        }

        let user = self.host.user().map(|user| user.to_order_user());
        let request = self.state.build_order(user, Utc::now());
        let hosted = self.host.is_present();

        match self.client.submit_order(&request).await {
            Ok(_) => {
                self.notify(Notification::order_sent(hosted));
                SubmitOutcome::Sent
            }
            Err(failure) => {
                self.notify(Notification::order_failed(&failure, hosted));
                SubmitOutcome::Failed(failure)
            }
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.page.render_notification(Some(&notification));
        self.notification = Some(notification);
    }

    /// OK button or backdrop click on the notification
    pub fn dismiss_notification(&mut self) {
        let Some(notification) = self.notification.take() else {
            return;
        };
        self.page.render_notification(None);
        if notification.close_host_on_dismiss && self.host.is_present() {
            self.host.close();
        }
    }

    // === Theme ===

    pub fn on_theme_changed(&mut self, theme: ThemeParams, scheme: ColorScheme) {
        if !self.host.is_present() {
            return;
        }
        self.host.set_theme(theme, scheme);
        self.page
            .render_theme(self.host.theme(), Some(self.host.color_scheme()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostCommand, WebAppHost};
    use cafe_client::{ClientConfig, fallback};
    use shared::{Category, MenuItem};

    fn storefront() -> Storefront<NetworkHttpClient, WebAppHost> {
        let client = CafeClient::from_config(ClientConfig::new("http://127.0.0.1:9")).unwrap();
        Storefront::new(client, WebAppHost::default())
    }

    fn catalog() -> Catalog {
        Catalog {
            restaurants: None,
            categories: vec![Category::new(1, "Напитки", "drinks", None)],
            menu: vec![
                MenuItem::new(1, "Американо", 150, "drinks"),
                MenuItem::new(2, "Капучино", 210, "drinks"),
            ],
        }
    }

    #[test]
    fn test_add_and_change_qty_drive_main_button() {
        let mut sf = storefront();
        let ticket = sf.begin_reload();
        assert!(sf.apply_catalog(ticket, catalog()));
        sf.host_mut().take_commands();

        assert!(sf.add_to_cart(1));
        assert!(sf.add_to_cart(1));
        assert!(sf.add_to_cart(2));
        assert!(!sf.add_to_cart(99));
        assert_eq!(sf.state().cart.summary().total_price, 510);
        assert_eq!(sf.host().main_button(), Some("Оформить (3) — 510₽"));
        assert!(
            sf.host()
                .commands()
                .contains(&HostCommand::HapticImpact(ImpactStyle::Light))
        );

        assert!(sf.change_qty(1, -2));
        assert!(sf.change_qty(2, -1));
        assert!(sf.state().cart.is_empty());
        assert_eq!(sf.host().main_button(), None);
        assert!(sf.page().order_panel.contains("hidden"));
    }

    #[test]
    fn test_click_category_toggles() {
        let mut sf = storefront();
        sf.click_category("drinks");
        assert_eq!(sf.state().active_category.as_deref(), Some("drinks"));
        sf.click_category("drinks");
        assert_eq!(sf.state().active_category, None);
        sf.click_category("desserts");
        sf.click_category("all");
        assert_eq!(sf.state().active_category, None);
    }

    #[test]
    fn test_stale_catalog_is_discarded() {
        let mut sf = storefront();
        let ticket = sf.begin_reload();
        assert!(sf.select_address(1));
        assert!(!sf.apply_catalog(ticket, catalog()));
        assert!(sf.state().menu.is_empty());

        let fresh = sf.begin_reload();
        assert!(sf.apply_catalog(fresh, catalog()));
        assert_eq!(sf.state().menu.len(), 2);
    }

    #[test]
    fn test_catalog_refresh_drops_missing_cart_items() {
        let mut sf = storefront();
        let ticket = sf.begin_reload();
        sf.apply_catalog(ticket, catalog());
        sf.add_to_cart(1);

        let ticket = sf.begin_reload();
        let menu = Catalog {
            menu: fallback::sample_menu().into_iter().skip(1).collect(),
            ..catalog()
        };
        sf.apply_catalog(ticket, menu);
        assert!(sf.state().cart.is_empty());
    }

    #[test]
    fn test_dismiss_success_closes_host() {
        let mut sf = storefront();
        sf.notify(Notification::order_sent(true));
        assert!(sf.page().notification.is_some());

        sf.dismiss_notification();
        assert!(sf.notification().is_none());
        assert!(sf.page().notification.is_none());
        assert_eq!(sf.host().commands().last(), Some(&HostCommand::Close));
    }

    #[test]
    fn test_theme_change() {
        let mut sf = storefront();
        let theme = ThemeParams {
            bg_color: Some("#17212b".into()),
            ..Default::default()
        };
        sf.on_theme_changed(theme, ColorScheme::Dark);
        assert!(sf.page().theme_style.contains("--bg:#17212b"));
        assert!(sf.page().theme_indicator.contains("#6ea8fe"));
    }
}
