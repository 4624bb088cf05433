//! Customer notifications

use cafe_client::OrderFailure;

/// Suffix appended to messages shown outside the host
const DEMO_SUFFIX: &str = " (демо режим)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Modal dialog with a title and an OK button
    Dialog,
    /// Plain alert used in demo mode
    Alert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: Option<String>,
    pub message: String,
    /// Close the host app once the customer dismisses it
    pub close_host_on_dismiss: bool,
}

impl Notification {
    pub fn dialog(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Dialog,
            title: Some(title.into()),
            message: message.into(),
            close_host_on_dismiss: false,
        }
    }

    pub fn alert(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Alert,
            title: None,
            message: message.into(),
            close_host_on_dismiss: false,
        }
    }

    pub fn closing_host(mut self) -> Self {
        self.close_host_on_dismiss = true;
        self
    }

    pub fn order_sent(hosted: bool) -> Self {
        if hosted {
            Self::dialog("Успех", "Заказ успешно отправлен!").closing_host()
        } else {
            Self::alert(format!("Заказ успешно отправлен!{DEMO_SUFFIX}"))
        }
    }

    pub fn order_failed(failure: &OrderFailure, hosted: bool) -> Self {
        let message = failure.user_message();
        if hosted {
            Self::dialog("Ошибка", message)
        } else {
            Self::alert(format!("{message}{DEMO_SUFFIX}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_sent() {
        let hosted = Notification::order_sent(true);
        assert_eq!(hosted.kind, NotificationKind::Dialog);
        assert_eq!(hosted.title.as_deref(), Some("Успех"));
        assert!(hosted.close_host_on_dismiss);

        let demo = Notification::order_sent(false);
        assert_eq!(demo.kind, NotificationKind::Alert);
        assert_eq!(demo.message, "Заказ успешно отправлен! (демо режим)");
        assert!(!demo.close_host_on_dismiss);
    }

    #[test]
    fn test_order_failed() {
        let failure = OrderFailure::Api {
            message: "X".into(),
        };
        let hosted = Notification::order_failed(&failure, true);
        assert_eq!(hosted.title.as_deref(), Some("Ошибка"));
        assert_eq!(hosted.message, "Ошибка API: X");
        assert!(!hosted.close_host_on_dismiss);

        let demo = Notification::order_failed(&failure, false);
        assert_eq!(demo.message, "Ошибка API: X (демо режим)");
    }
}
