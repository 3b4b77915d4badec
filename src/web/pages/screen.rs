//! The models screen: creation form on the left, model cards on the right.

use maud::{html, Markup};

use crate::components::{Alert, BaseLayout, Button, CardDisplay, Form, Input, ModelList, TextArea};
use crate::screen::{ScreenSnapshot, ScreenState};

/// Form field carrying the draft title.
const TITLE_FIELD: &str = "titulo";
/// Form field carrying the draft image URL.
const IMAGE_FIELD: &str = "imagem";
/// Form field carrying the draft body.
const BODY_FIELD: &str = "corpo_redacao";

/// Render the full screen for a controller snapshot.
///
/// The form is pre-filled with the draft, so a failed submission keeps what
/// the user typed.
#[must_use]
pub fn render_screen_page(snapshot: &ScreenSnapshot, display: CardDisplay<'_>) -> Markup {
    let draft = &snapshot.draft;
    let state = match snapshot.state {
        ScreenState::Idle => "idle",
        ScreenState::Submitting => "submitting",
    };

    let fields = html! {
        (Input::text(TITLE_FIELD).placeholder("Título").value(&draft.title).class("input"))
        (Input::text(IMAGE_FIELD).placeholder("Link da Imagem").value(&draft.image).class("input"))
        (TextArea::new(BODY_FIELD)
            .placeholder("Corpo da Redação")
            .rows(6)
            .value(&draft.body)
            .class("input textarea"))
        (Button::primary("CRIAR NOVO").r#type("submit"))
    };

    let content = html! {
        div class="screen-columns" data-state=(state) {
            section class="form-column" {
                @if let Some(alert) = &snapshot.alert {
                    (Alert::from(alert))
                }
                (Form::post("/novo", fields).class("model-form"))
            }
            section class="list-column" {
                (ModelList::new(&snapshot.models, display))
            }
        }
    };

    BaseLayout::new("Modelos").render(content)
}
