//! Page regions
//!
//! Each function renders one region of the storefront from state. They are
//! pure: same state in, same markup out.

use crate::cart::CartSummary;
use crate::filter::{ALL_CATEGORIES, filter_categories, visible_items};
use crate::notify::{Notification, NotificationKind};
use crate::state::{CafeInfo, ClientState};
use crate::theme::{ColorScheme, ThemeParams};
use shared::html::{HtmlBuilder, hidden_if};
use shared::{MenuItem, format_price};

const DEMO_NOTICE: &str =
    "Telegram WebApp недоступен: приложение работает в демо-режиме, заказы не оформляются в Telegram.";

pub fn cafe_info(cafe: &CafeInfo) -> String {
    HtmlBuilder::new()
        .open("header", &[("class", "cafe")])
        .element("h1", &[("id", "cafe-name")], &cafe.name)
        .element("p", &[("id", "today-hours")], &cafe.hours_today)
        .close("header")
        .build()
}

pub fn addresses(state: &ClientState) -> String {
    let cafe = &state.cafe;
    let selected = cafe.selected_index();
    let (label, map) = cafe
        .selected_address()
        .map_or(("", "#"), |address| (address.label.as_str(), address.map.as_str()));
    let expanded = if state.address_list_expanded { "true" } else { "false" };

    let mut toggle = vec![
        ("id", "toggle-addresses"),
        ("type", "button"),
        ("aria-expanded", expanded),
    ];
    if state.address_list_expanded {
        toggle.push(("class", "rotated"));
    }
    let mut list = vec![("id", "address-list")];
    list.extend(hidden_if(!state.address_list_expanded));

    let mut html = HtmlBuilder::new();
    html.open("section", &[("class", "address")])
        .element("span", &[("id", "selected-address")], label)
        .element(
            "a",
            &[("id", "map-link"), ("href", map), ("target", "_blank"), ("rel", "noopener")],
            "На карте",
        )
        .element("button", &toggle, "▾")
        .open("ul", &list);
    for (i, address) in cafe.addresses.iter().enumerate() {
        let index = i.to_string();
        let mut attrs = vec![
            ("type", "button"),
            ("class", "address__item"),
            ("data-index", index.as_str()),
        ];
        if i == selected {
            attrs.push(("aria-current", "true"));
        }
        html.open("li", &[])
            .element("button", &attrs, &address.label)
            .close("li");
    }
    html.close("ul").close("section").build()
}

pub fn categories(state: &ClientState) -> String {
    let active = state.active_category.as_deref();

    let mut html = HtmlBuilder::new();
    html.open("ul", &[("id", "category-list"), ("class", "brand-menu")]);
    chip(&mut html, ALL_CATEGORIES, "Все", active.is_none());
    for category in filter_categories(&state.categories, state.restaurant_scope()) {
        chip(
            &mut html,
            &category.slug,
            &category.name,
            active == Some(category.slug.as_str()),
        );
    }
    html.close("ul").build()
}

fn chip(html: &mut HtmlBuilder, slug: &str, name: &str, active: bool) {
    let class = if active { "chip chip--active" } else { "chip" };
    html.open("li", &[("class", "brand-menu__item")])
        .element(
            "button",
            &[("type", "button"), ("class", class), ("data-category", slug)],
            name,
        )
        .close("li");
}

pub fn menu_grid(state: &ClientState) -> String {
    let items = visible_items(
        &state.menu,
        state.active_category.as_deref(),
        state.restaurant_scope(),
        state.selected_address().map(|address| address.id.as_str()),
    );

    let mut html = HtmlBuilder::new();
    html.open("div", &[("id", "menu-grid"), ("class", "grid")]);
    if items.is_empty() {
        html.element("div", &[("class", "menu-empty")], "Нет позиций в этой категории");
    }
    for item in items {
        card(&mut html, item);
    }
    html.close("div").build()
}

fn card(html: &mut HtmlBuilder, item: &MenuItem) {
    let id = item.id.to_string();
    html.open("div", &[("class", "card"), ("data-id", id.as_str())]);
    if let Some(photo) = item.photo.as_deref().filter(|p| !p.is_empty()) {
        html.void(
            "img",
            &[
                ("class", "card__image"),
                ("src", photo),
                ("alt", item.name.as_str()),
                ("loading", "lazy"),
            ],
        );
    }
    html.element("h3", &[("class", "card__title")], &item.name)
        .element(
            "p",
            &[("class", "card__desc")],
            item.description.as_deref().unwrap_or_default(),
        );
    if let Some(size) = item.size.as_deref().filter(|s| !s.is_empty()) {
        html.element("span", &[("class", "card__size")], size);
    }

    let mut button = vec![
        ("type", "button"),
        ("class", "btn btn-primary"),
        ("data-id", id.as_str()),
    ];
    let label = if item.is_orderable() {
        "Добавить"
    } else {
        button.push(("disabled", ""));
        "Недоступен"
    };
    html.open("div", &[("class", "card__meta")])
        .element("span", &[("class", "price")], &format_price(item.price))
        .element("button", &button, label)
        .close("div")
        .close("div");
}

pub fn order_panel(state: &ClientState) -> String {
    let mut panel = vec![("id", "order-panel"), ("class", "order")];
    panel.extend(hidden_if(state.cart.is_empty()));
    let address = state
        .selected_address()
        .map_or("", |address| address.label.as_str());

    let mut html = HtmlBuilder::new();
    html.open("section", &panel)
        .element("p", &[("id", "order-address")], address)
        .open("div", &[("id", "order-list")]);
    for entry in state.cart.entries() {
        let id = entry.item.id.to_string();
        let row = format!("{} · {}", entry.item.name, format_price(entry.item.price));
        html.open("div", &[("class", "order-item")])
            .element("div", &[], &row)
            .open("div", &[("class", "qty")])
            .element(
                "button",
                &[("type", "button"), ("class", "btn"), ("data-id", id.as_str()), ("data-delta", "-1")],
                "−",
            )
            .element("span", &[], &entry.qty.to_string())
            .element(
                "button",
                &[("type", "button"), ("class", "btn"), ("data-id", id.as_str()), ("data-delta", "1")],
                "+",
            )
            .close("div")
            .close("div");
    }
    html.close("div")
        .element(
            "span",
            &[("id", "order-total")],
            &format_price(state.cart.summary().total_price),
        )
        .element(
            "button",
            &[("id", "confirm-order"), ("type", "button"), ("class", "btn btn-primary")],
            "Подтвердить заказ",
        )
        .close("section")
        .build()
}

pub fn cart_summary(summary: CartSummary) -> String {
    let text = if summary.is_empty() {
        "Корзина пуста".to_string()
    } else {
        format!(
            "В корзине: {} · {}",
            summary.total_qty,
            format_price(summary.total_price)
        )
    };
    HtmlBuilder::new()
        .element("div", &[("id", "cart-summary")], &text)
        .build()
}

pub fn notification(notification: &Notification) -> String {
    let mut html = HtmlBuilder::new();
    match notification.kind {
        NotificationKind::Dialog => {
            html.open("div", &[("class", "modal"), ("role", "dialog"), ("aria-modal", "true")])
                .open("div", &[("class", "modal__content")]);
            if let Some(title) = &notification.title {
                html.element("h3", &[], title);
            }
            html.element("p", &[], &notification.message)
                .element(
                    "button",
                    &[("id", "notification-ok"), ("type", "button"), ("class", "btn btn-primary")],
                    "OK",
                )
                .close("div")
                .close("div");
        }
        NotificationKind::Alert => {
            html.element("div", &[("class", "alert"), ("role", "alert")], &notification.message);
        }
    }
    html.build()
}

pub fn demo_notice(visible: bool) -> String {
    let mut attrs = vec![("id", "tg-notice"), ("class", "notice")];
    attrs.extend(hidden_if(!visible));
    HtmlBuilder::new().element("div", &attrs, DEMO_NOTICE).build()
}

/// `:root` overrides from the host theme, empty without one
pub fn theme_style(theme: Option<&ThemeParams>) -> String {
    let Some(theme) = theme else {
        return String::new();
    };
    let vars = theme.css_variables();
    if vars.is_empty() {
        return String::new();
    }
    let declarations: String = vars
        .iter()
        .map(|(name, value)| format!("{name}:{value};"))
        .collect();
    // values are already restricted to a safe charset
    HtmlBuilder::new()
        .open("style", &[("id", "theme")])
        .raw(&format!(":root{{{declarations}}}"))
        .close("style")
        .build()
}

pub fn theme_indicator(scheme: Option<ColorScheme>) -> String {
    let style = match scheme {
        Some(scheme) => format!("opacity:1;background:{}", scheme.indicator_color()),
        None => "opacity:0".to_string(),
    };
    HtmlBuilder::new()
        .element(
            "span",
            &[("id", "theme-indicator"), ("style", style.as_str())],
            "",
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Category, Restaurant};

    fn state() -> ClientState {
        let mut state = ClientState::default();
        state.menu = vec![
            MenuItem::new(1, "Американо", 150, "drinks").with_address("a1"),
            MenuItem::new(2, "Чизкейк", 1260, "desserts").with_address("a2"),
        ];
        state.categories = vec![
            Category::new(1, "Напитки", "drinks", Some(1)),
            Category::new(2, "Десерты", "desserts", Some(1)),
        ];
        state
    }

    #[test]
    fn test_cafe_info_escapes() {
        let mut cafe = CafeInfo::default();
        cafe.name = "<Cafe>".into();
        let html = cafe_info(&cafe);
        assert!(html.contains("&lt;Cafe&gt;"));
        assert!(html.contains("<p id=\"today-hours\">Пн–Пт: 8:00–20:00"));
    }

    #[test]
    fn test_addresses_mark_selected() {
        let mut state = state();
        state.select_address(1);
        let html = addresses(&state);
        assert!(html.contains("г. Примерск, пр-т Центральный, 10"));
        assert_eq!(html.matches("aria-current=\"true\"").count(), 1);
        assert!(html.contains("data-index=\"1\" aria-current=\"true\""));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("<ul id=\"address-list\" hidden>"));

        state.address_list_expanded = true;
        let html = addresses(&state);
        assert!(html.contains("class=\"rotated\""));
        assert!(html.contains("<ul id=\"address-list\">"));
    }

    #[test]
    fn test_category_chips() {
        let mut state = state();
        let html = categories(&state);
        assert!(html.contains("class=\"chip chip--active\" data-category=\"all\""));
        assert_eq!(html.matches("brand-menu__item").count(), 3);

        state.active_category = Some("drinks".into());
        let html = categories(&state);
        assert!(html.contains("class=\"chip\" data-category=\"all\""));
        assert!(html.contains("class=\"chip chip--active\" data-category=\"drinks\""));
    }

    #[test]
    fn test_category_chips_follow_restaurant_scope() {
        let mut state = state();
        state.cafe.apply_restaurants(&[Restaurant {
            id: 2,
            name: "You Coffee".into(),
            address: "ул. Кабардинская, 25".into(),
        }]);
        let html = categories(&state);
        assert_eq!(html.matches("brand-menu__item").count(), 1);
    }

    #[test]
    fn test_menu_grid() {
        let mut state = state();
        let mut sold_out = MenuItem::new(3, "Латте", 230, "drinks");
        sold_out.is_available = false;
        sold_out.size = Some("300 мл".into());
        sold_out.photo = Some("https://cdn.test/latte.jpg".into());
        state.menu.push(sold_out);

        let html = menu_grid(&state);
        assert_eq!(html.matches("class=\"card\"").count(), 3);
        assert!(html.contains("1\u{a0}260 ₽"));
        assert!(html.contains("disabled>Недоступен"));
        assert!(html.contains("class=\"card__size\">300 мл"));
        assert!(html.contains("class=\"card__image\""));

        state.active_category = Some("soups".into());
        assert!(menu_grid(&state).contains("Нет позиций в этой категории"));
    }

    #[test]
    fn test_order_panel_and_summary() {
        let mut state = state();
        assert!(order_panel(&state).contains("<section id=\"order-panel\" class=\"order\" hidden>"));
        assert!(cart_summary(state.cart.summary()).contains("Корзина пуста"));

        let item = state.menu[0].clone();
        state.cart.add(&item);
        state.cart.add(&item);
        let html = order_panel(&state);
        assert!(!html.contains("hidden"));
        assert!(html.contains("Американо · 150 ₽"));
        assert!(html.contains("<span>2</span>"));
        assert!(html.contains("<span id=\"order-total\">300 ₽</span>"));
        assert!(html.contains("г. Примерск, ул. Кофейная, 5"));
        assert!(cart_summary(state.cart.summary()).contains("В корзине: 2 · 300 ₽"));
    }

    #[test]
    fn test_notifications() {
        let dialog = notification(&Notification::order_sent(true));
        assert!(dialog.contains("role=\"dialog\""));
        assert!(dialog.contains("<h3>Успех</h3>"));

        let alert = notification(&Notification::order_sent(false));
        assert!(alert.contains("role=\"alert\""));
        assert!(alert.contains("(демо режим)"));
    }

    #[test]
    fn test_theme_regions() {
        assert_eq!(theme_style(None), "");
        let theme = ThemeParams {
            bg_color: Some("#17212b".into()),
            ..Default::default()
        };
        assert!(theme_style(Some(&theme)).contains(":root{--bg:#17212b;}"));
        assert!(theme_indicator(Some(ColorScheme::Dark)).contains("#6ea8fe"));
        assert!(theme_indicator(None).contains("opacity:0"));
        assert!(demo_notice(false).contains("hidden"));
        assert!(!demo_notice(true).contains("hidden"));
    }
}
