//! Rendered storefront page

use super::regions;
use crate::notify::Notification;
use crate::state::ClientState;
use crate::theme::{ColorScheme, ThemeParams};
use shared::HtmlBuilder;

/// Last rendered markup of every region
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub theme_style: String,
    pub theme_indicator: String,
    pub demo_notice: String,
    pub cafe_info: String,
    pub addresses: String,
    pub categories: String,
    pub menu: String,
    pub order_panel: String,
    pub cart_summary: String,
    pub notification: Option<String>,
}

impl Page {
    pub fn render_theme(&mut self, theme: Option<&ThemeParams>, scheme: Option<ColorScheme>) {
        self.theme_style = regions::theme_style(theme);
        self.theme_indicator = regions::theme_indicator(scheme);
    }

    pub fn render_cafe(&mut self, state: &ClientState) {
        self.cafe_info = regions::cafe_info(&state.cafe);
        self.addresses = regions::addresses(state);
    }

    /// Category chips and the menu grid
    pub fn render_catalog(&mut self, state: &ClientState) {
        self.categories = regions::categories(state);
        self.menu = regions::menu_grid(state);
    }

    pub fn render_cart(&mut self, state: &ClientState) {
        self.order_panel = regions::order_panel(state);
        self.cart_summary = regions::cart_summary(state.cart.summary());
    }

    pub fn render_notification(&mut self, notification: Option<&Notification>) {
        self.notification = notification.map(regions::notification);
    }

    pub fn render_all(&mut self, state: &ClientState) {
        self.render_cafe(state);
        self.render_catalog(state);
        self.render_cart(state);
    }

    /// Full HTML document
    pub fn document(&self) -> String {
        let mut html = HtmlBuilder::new();
        html.raw("<!DOCTYPE html>")
            .newline()
            .open("html", &[("lang", "ru")])
            .open("head", &[])
            .void("meta", &[("charset", "utf-8")])
            .void(
                "meta",
                &[
                    ("name", "viewport"),
                    ("content", "width=device-width, initial-scale=1"),
                ],
            )
            .element("title", &[], "Меню")
            .raw(&self.theme_style)
            .close("head")
            .open("body", &[])
            .raw(&self.demo_notice)
            .raw(&self.theme_indicator)
            .raw(&self.cafe_info)
            .raw(&self.addresses)
            .open("nav", &[("class", "categories")])
            .raw(&self.categories)
            .close("nav")
            .open("main", &[("class", "menu")])
            .raw(&self.menu)
            .close("main")
            .raw(&self.order_panel)
            .raw(&self.cart_summary);
        if let Some(notification) = &self.notification {
            html.raw(notification);
        }
        html.close("body").close("html").newline().build()
    }
}
