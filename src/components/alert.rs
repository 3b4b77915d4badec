//! Alert component for the confirmation and error messages of the screen.

use maud::{html, Markup, Render};

use crate::screen::{AlertKind, ScreenAlert};

/// Alert variant types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Success,
    Error,
}

impl AlertVariant {
    /// Get the CSS class for the alert article element.
    #[must_use]
    pub const fn article_class(&self) -> &'static str {
        match self {
            Self::Success => "alert success",
            Self::Error => "alert error",
        }
    }
}

impl From<AlertKind> for AlertVariant {
    fn from(kind: AlertKind) -> Self {
        match kind {
            AlertKind::Success => Self::Success,
            AlertKind::Error => Self::Error,
        }
    }
}

/// An alert message component.
///
/// Renders as a styled article element with a bold title.
///
/// # Example
///
/// ```ignore
/// use crate::components::alert::Alert;
///
/// let alert = Alert::success("Modelo criado com sucesso!").with_title("Sucesso");
/// ```
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub variant: AlertVariant,
    pub title: Option<&'a str>,
    pub message: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new alert with the given variant and message.
    #[must_use]
    pub const fn new(variant: AlertVariant, message: &'a str) -> Self {
        Self {
            variant,
            title: None,
            message,
        }
    }

    /// Create a success alert.
    #[must_use]
    pub const fn success(message: &'a str) -> Self {
        Self::new(AlertVariant::Success, message)
    }

    /// Create an error alert.
    #[must_use]
    pub const fn error(message: &'a str) -> Self {
        Self::new(AlertVariant::Error, message)
    }

    /// Add a title to the alert.
    #[must_use]
    pub const fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }
}

impl From<&ScreenAlert> for Alert<'static> {
    fn from(alert: &ScreenAlert) -> Self {
        Alert::new(alert.kind.into(), alert.message).with_title(alert.title)
    }
}

impl Render for Alert<'_> {
    fn render(&self) -> Markup {
        let class = self.variant.article_class();

        html! {
            article class=(class) role="alert" {
                @if let Some(title) = self.title {
                    strong { (title) }
                    " "
                }
                (self.message)
            }
        }
    }
}
