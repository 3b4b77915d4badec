//! Button component for the web UI.

use maud::{html, Markup, Render};

/// Button style variants matching CSS classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Orange call-to-action button - `.btn.btn-primary`
    #[default]
    Primary,
    /// Compact action button used on cards - `.btn.btn-action`
    Action,
}

impl ButtonVariant {
    /// Returns the CSS class(es) for this variant.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Action => "btn btn-action",
        }
    }
}

/// A configurable `<button>` element.
///
/// # Example
///
/// ```ignore
/// use crate::components::button::Button;
///
/// let submit = Button::primary("CRIAR NOVO").r#type("submit");
/// let edit = Button::action("EDITAR").onclick("void 0");
/// ```
#[derive(Debug, Clone)]
pub struct Button<'a> {
    /// Button label text
    pub label: &'a str,
    /// Button style variant
    pub variant: ButtonVariant,
    /// Button type attribute, `button` when unset
    pub r#type: Option<&'a str>,
    /// JavaScript onclick handler
    pub onclick: Option<&'a str>,
}

impl<'a> Button<'a> {
    /// Creates a new button with the given label and variant.
    #[must_use]
    pub fn new(label: &'a str, variant: ButtonVariant) -> Self {
        Self {
            label,
            variant,
            r#type: None,
            onclick: None,
        }
    }

    /// Creates a primary button.
    #[must_use]
    pub fn primary(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Primary)
    }

    /// Creates a card action button.
    #[must_use]
    pub fn action(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Action)
    }

    /// Sets the button type attribute.
    #[must_use]
    pub fn r#type(mut self, r#type: &'a str) -> Self {
        self.r#type = Some(r#type);
        self
    }

    /// Sets the onclick handler.
    #[must_use]
    pub fn onclick(mut self, onclick: &'a str) -> Self {
        self.onclick = Some(onclick);
        self
    }
}

impl Render for Button<'_> {
    fn render(&self) -> Markup {
        html! {
            button
                class=(self.variant.class())
                type=(self.r#type.unwrap_or("button"))
                onclick=[self.onclick]
            {
                (self.label)
            }
        }
    }
}
