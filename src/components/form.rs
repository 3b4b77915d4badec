//! Form components for maud templates.
//!
//! These match the styles defined in `static/css/style.css`.

use maud::{html, Markup, Render};

/// A form container element.
#[derive(Debug)]
pub struct Form<'a> {
    /// Form action URL
    pub action: &'a str,
    /// HTTP method ("get" or "post")
    pub method: &'a str,
    /// Form content (inputs, buttons, etc.)
    pub content: Markup,
    /// Optional CSS class
    pub class: Option<&'a str>,
}

impl<'a> Form<'a> {
    /// Create a POST form.
    #[must_use]
    pub fn post(action: &'a str, content: Markup) -> Self {
        Self {
            action,
            method: "post",
            content,
            class: None,
        }
    }

    /// Set the CSS class.
    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }
}

impl Render for Form<'_> {
    fn render(&self) -> Markup {
        html! {
            form action=(self.action) method=(self.method) class=[self.class] {
                (self.content)
            }
        }
    }
}

/// A text input element.
#[derive(Debug, Clone)]
pub struct Input<'a> {
    /// Input name attribute
    pub name: &'a str,
    /// Input type
    pub r#type: &'a str,
    /// Current value
    pub value: Option<&'a str>,
    /// Placeholder text
    pub placeholder: Option<&'a str>,
    /// Optional CSS class
    pub class: Option<&'a str>,
}

impl<'a> Input<'a> {
    /// Create a text input.
    #[must_use]
    pub fn text(name: &'a str) -> Self {
        Self {
            name,
            r#type: "text",
            value: None,
            placeholder: None,
            class: None,
        }
    }

    /// Set the value.
    #[must_use]
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Set the CSS class.
    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }
}

impl Render for Input<'_> {
    fn render(&self) -> Markup {
        html! {
            input
                type=(self.r#type)
                name=(self.name)
                value=[self.value]
                placeholder=[self.placeholder]
                class=[self.class];
        }
    }
}

/// A textarea element.
#[derive(Debug)]
pub struct TextArea<'a> {
    /// Textarea name attribute
    pub name: &'a str,
    /// Current value/content
    pub value: Option<&'a str>,
    /// Placeholder text
    pub placeholder: Option<&'a str>,
    /// Number of visible rows
    pub rows: Option<u32>,
    /// Optional CSS class
    pub class: Option<&'a str>,
}

impl<'a> TextArea<'a> {
    /// Create a new textarea with the given name.
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            value: None,
            placeholder: None,
            rows: None,
            class: None,
        }
    }

    /// Set the value/content.
    #[must_use]
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Set the number of rows.
    #[must_use]
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Set the CSS class.
    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }
}

impl Render for TextArea<'_> {
    fn render(&self) -> Markup {
        html! {
            textarea
                name=(self.name)
                placeholder=[self.placeholder]
                rows=[self.rows]
                class=[self.class]
            {
                @if let Some(value) = self.value {
                    (value)
                }
            }
        }
    }
}
