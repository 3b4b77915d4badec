//! Card components for displaying models.

use maud::{html, Markup, Render};

use crate::api::ModelRecord;
use crate::components::button::Button;
use crate::text::truncate_text;

/// How model cards present their content.
#[derive(Debug, Clone, Copy)]
pub struct CardDisplay<'a> {
    /// Body characters shown before the ellipsis.
    pub preview_chars: usize,
    /// Image used when a model has none.
    pub placeholder_image: &'a str,
}

/// A card showing one model: image, title, truncated body and actions.
///
/// The "EDITAR" button is wired to a no-op and "EXCLUIR" has no handler.
/// Neither action is implemented on the remote API.
#[derive(Debug, Clone)]
pub struct ModelCard<'a> {
    pub model: &'a ModelRecord,
    pub display: CardDisplay<'a>,
}

impl<'a> ModelCard<'a> {
    /// Create a new model card.
    #[must_use]
    pub const fn new(model: &'a ModelRecord, display: CardDisplay<'a>) -> Self {
        Self { model, display }
    }
}

impl Render for ModelCard<'_> {
    fn render(&self) -> Markup {
        let model = self.model;
        let image = model.display_image(self.display.placeholder_image);
        let preview = truncate_text(&model.body, self.display.preview_chars);

        html! {
            article class="model-card" data-model-id=(model.id) {
                div class="model-image" {
                    img src=(image) alt=(model.title) loading="lazy";
                }
                div class="model-text" {
                    h3 class="model-title" { (model.title) }
                    p class="model-body" { (preview) }
                    div class="model-actions" {
                        (Button::action("EDITAR").onclick("void 0"))
                        (Button::action("EXCLUIR"))
                    }
                }
            }
        }
    }
}

/// A column of model cards, in the order given.
#[derive(Debug, Clone)]
pub struct ModelList<'a> {
    pub models: &'a [ModelRecord],
    pub display: CardDisplay<'a>,
}

impl<'a> ModelList<'a> {
    /// Create a new model list.
    #[must_use]
    pub const fn new(models: &'a [ModelRecord], display: CardDisplay<'a>) -> Self {
        Self { models, display }
    }
}

impl Render for ModelList<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="model-list" {
                @if self.models.is_empty() {
                    (EmptyState::no_models())
                }
                @for model in self.models {
                    (ModelCard::new(model, self.display))
                }
            }
        }
    }
}

/// An empty state component for when there are no models.
#[derive(Debug, Clone)]
pub struct EmptyState<'a> {
    pub message: &'a str,
}

impl EmptyState<'static> {
    #[must_use]
    pub const fn no_models() -> Self {
        Self {
            message: "Nenhum modelo cadastrado.",
        }
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            p class="empty-state" { (self.message) }
        }
    }
}
