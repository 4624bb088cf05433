//! Dashboard markup

use crate::dashboard::{Dashboard, Section};
use shared::HtmlBuilder;
use shared::admin::{AdminOrder, display_value};

/// Shown in a count badge whose list failed to load
const COUNT_ERROR: &str = "—";

/// Alert banner style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    #[default]
    Success,
    Info,
    Warning,
    Danger,
}

impl AlertKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// Rendered dashboard regions
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub products_count: String,
    pub orders_count: String,
    pub discounts_count: String,
    pub recent_orders: String,
}

impl DashboardView {
    pub fn render(dashboard: &Dashboard) -> Self {
        Self {
            products_count: count("products-count", dashboard.products.as_ref().ok().copied()),
            orders_count: count("orders-count", dashboard.order_count()),
            discounts_count: count("discounts-count", dashboard.discounts.as_ref().ok().copied()),
            recent_orders: recent_orders(dashboard.recent_orders()),
        }
    }

    pub fn document(&self) -> String {
        let mut html = HtmlBuilder::new();
        html.raw("<!DOCTYPE html>")
            .newline()
            .open("html", &[("lang", "ru")])
            .open("head", &[])
            .void("meta", &[("charset", "utf-8")])
            .element("title", &[], "Админ-панель")
            .close("head")
            .open("body", &[])
            .open("div", &[("class", "container")])
            .open("div", &[("class", "row stats")]);
        for (label, badge) in [
            ("Товары", &self.products_count),
            ("Заказы", &self.orders_count),
            ("Скидки", &self.discounts_count),
        ] {
            html.open("div", &[("class", "col stat")])
                .element("h5", &[], label)
                .raw(badge)
                .close("div");
        }
        html.close("div")
            .element("h5", &[], "Последние заказы")
            .raw(&self.recent_orders)
            .close("div")
            .close("body")
            .close("html")
            .newline()
            .build()
    }
}

fn count(id: &str, value: Option<usize>) -> String {
    match value {
        Some(n) => HtmlBuilder::new()
            .element("span", &[("id", id)], &n.to_string())
            .build(),
        None => HtmlBuilder::new()
            .element(
                "span",
                &[("id", id), ("class", "text-danger"), ("title", "Ошибка загрузки данных")],
                COUNT_ERROR,
            )
            .build(),
    }
}

fn recent_orders(orders: Section<&[AdminOrder]>) -> String {
    let mut html = HtmlBuilder::new();
    html.open("div", &[("id", "recent-orders")]);
    match orders {
        Err(_) => {
            html.element("p", &[("class", "text-danger")], "Ошибка загрузки данных");
        }
        Ok([]) => {
            html.element("p", &[("class", "text-muted")], "Нет заказов");
        }
        Ok(orders) => {
            html.open("div", &[("class", "list-group list-group-flush")]);
            for order in orders {
                order_row(&mut html, order);
            }
            html.close("div");
        }
    }
    html.close("div").build()
}

fn order_row(html: &mut HtmlBuilder, order: &AdminOrder) {
    html.open(
        "div",
        &[("class", "list-group-item d-flex justify-content-between align-items-center")],
    )
    .open("div", &[])
    .element("strong", &[], &format!("Заказ #{}", display_value(&order.id)))
    .void("br", &[])
    .element("small", &[("class", "text-muted")], &display_value(&order.user))
    .close("div")
    .open("div", &[("class", "text-end")])
    .element(
        "span",
        &[("class", "badge bg-primary")],
        &format!("{}₽", display_value(&order.total)),
    )
    .void("br", &[])
    .element("small", &[("class", "text-muted")], &display_value(&order.status))
    .close("div")
    .close("div");
}

/// Dismissible alert banner for admin pages
pub fn notification_html(message: &str, kind: AlertKind) -> String {
    let class = format!("alert alert-{} alert-dismissible fade show", kind.as_str());
    HtmlBuilder::new()
        .open("div", &[("class", class.as_str()), ("role", "alert")])
        .text(message)
        .element(
            "button",
            &[("type", "button"), ("class", "btn-close"), ("data-bs-dismiss", "alert")],
            "",
        )
        .close("div")
        .build()
}
