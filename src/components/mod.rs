//! Maud HTML template components for the web UI.
//!
//! - `layout`: Base page layout
//! - `button`: Form and card buttons
//! - `alert`: Confirmation and error messages
//! - `card`: Model cards and the model list
//! - `form`: Form elements
//!
//! # Example
//!
//! ```ignore
//! use maud::{html, Markup};
//! use crate::components::{Alert, BaseLayout, Button, Input};
//!
//! fn my_page() -> Markup {
//!     let content = html! {
//!         (Alert::success("Modelo criado com sucesso!"))
//!         (Input::text("titulo").placeholder("Título"))
//!         (Button::primary("CRIAR NOVO").r#type("submit"))
//!     };
//!     BaseLayout::new("Modelos").render(content)
//! }
//! ```

pub mod alert;
pub mod button;
pub mod card;
pub mod form;
pub mod layout;

pub use alert::{Alert, AlertVariant};
pub use button::{Button, ButtonVariant};
pub use card::{CardDisplay, EmptyState, ModelCard, ModelList};
pub use form::{Form, Input, TextArea};
pub use layout::BaseLayout;
