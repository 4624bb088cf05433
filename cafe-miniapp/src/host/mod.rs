//! Host capability interface
//!
//! The storefront never checks for the Telegram WebApp object itself: it
//! talks to a [`Host`]. Outside Telegram that is [`NoHost`], whose actions
//! are no-ops and which switches the page to demo mode.

mod init_data;

pub use init_data::{InitData, InitDataError, MAX_AGE_SECS, WebAppUser};

use crate::theme::{ColorScheme, ThemeParams};

/// Haptic impact strength
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
}

/// What the embedding runtime offers the storefront
pub trait Host {
    /// `false` means demo mode
    fn is_present(&self) -> bool;
    fn theme(&self) -> Option<&ThemeParams>;
    fn color_scheme(&self) -> ColorScheme;
    fn set_theme(&mut self, theme: ThemeParams, scheme: ColorScheme);
    fn user(&self) -> Option<&WebAppUser>;

    fn ready(&mut self);
    fn expand(&mut self);
    fn close(&mut self);
    fn haptic_impact(&mut self, style: ImpactStyle);

    /// Show the persistent main action button with `text`
    fn show_main_button(&mut self, text: &str);
    fn hide_main_button(&mut self);
}

/// Running outside the host app
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHost;

impl Host for NoHost {
    fn is_present(&self) -> bool {
        false
    }

    fn theme(&self) -> Option<&ThemeParams> {
        None
    }

    fn color_scheme(&self) -> ColorScheme {
        ColorScheme::Light
    }

    fn set_theme(&mut self, _theme: ThemeParams, _scheme: ColorScheme) {}

    fn user(&self) -> Option<&WebAppUser> {
        None
    }

    fn ready(&mut self) {}
    fn expand(&mut self) {}
    fn close(&mut self) {}
    fn haptic_impact(&mut self, _style: ImpactStyle) {}
    fn show_main_button(&mut self, _text: &str) {}
    fn hide_main_button(&mut self) {}
}

/// Call issued to the Telegram WebApp
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Ready,
    Expand,
    Close,
    HapticImpact(ImpactStyle),
    ShowMainButton { text: String },
    HideMainButton,
}

/// Telegram WebApp host
///
/// Calls are queued as [`HostCommand`]s; the bridge to the webview drains
/// them with [`WebAppHost::take_commands`].
#[derive(Debug, Clone, Default)]
pub struct WebAppHost {
    init_data: InitData,
    theme: ThemeParams,
    color_scheme: ColorScheme,
    commands: Vec<HostCommand>,
    main_button: Option<String>,
}

impl WebAppHost {
    pub fn new(init_data: InitData, theme: ThemeParams, color_scheme: ColorScheme) -> Self {
        Self {
            init_data,
            theme,
            color_scheme,
            commands: Vec::new(),
            main_button: None,
        }
    }

    pub fn init_data(&self) -> &InitData {
        &self.init_data
    }

    /// Current main button label, `None` when hidden
    pub fn main_button(&self) -> Option<&str> {
        self.main_button.as_deref()
    }

    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Host for WebAppHost {
    fn is_present(&self) -> bool {
        true
    }

    fn theme(&self) -> Option<&ThemeParams> {
        Some(&self.theme)
    }

    fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    fn set_theme(&mut self, theme: ThemeParams, scheme: ColorScheme) {
        self.theme = theme;
        self.color_scheme = scheme;
    }

    fn user(&self) -> Option<&WebAppUser> {
        self.init_data.user.as_ref()
    }

    fn ready(&mut self) {
        self.commands.push(HostCommand::Ready);
    }

    fn expand(&mut self) {
        self.commands.push(HostCommand::Expand);
    }

    fn close(&mut self) {
        self.commands.push(HostCommand::Close);
    }

    fn haptic_impact(&mut self, style: ImpactStyle) {
        self.commands.push(HostCommand::HapticImpact(style));
    }

    fn show_main_button(&mut self, text: &str) {
        self.main_button = Some(text.to_string());
        self.commands.push(HostCommand::ShowMainButton {
            text: text.to_string(),
        });
    }

    fn hide_main_button(&mut self) {
        self.main_button = None;
        self.commands.push(HostCommand::HideMainButton);
    }
}
