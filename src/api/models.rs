use serde::{Deserialize, Serialize};

/// A model as returned by `GET /modelos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub id: i64,
    #[serde(rename = "imagem", default)]
    pub image: Option<String>,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "corpo_redacao")]
    pub body: String,
}

impl ModelRecord {
    /// Image URL to display, falling back to `placeholder` when missing or empty.
    #[must_use]
    pub fn display_image<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.image
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(placeholder)
    }
}

/// The unsaved model being typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftRecord {
    pub title: String,
    pub image: String,
    pub body: String,
}

impl DraftRecord {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.image.is_empty() && self.body.is_empty()
    }

    /// Reset all fields to empty.
    pub fn clear(&mut self) {
        self.title.clear();
        self.image.clear();
        self.body.clear();
    }

    #[must_use]
    pub fn to_payload(&self) -> NewModelPayload<'_> {
        NewModelPayload {
            image: &self.image,
            title: &self.title,
            body: &self.body,
        }
    }
}

/// Request body for `POST /novomodelo`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NewModelPayload<'a> {
    #[serde(rename = "imagem")]
    pub image: &'a str,
    #[serde(rename = "titulo")]
    pub title: &'a str,
    #[serde(rename = "corpo_redacao")]
    pub body: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACEHOLDER: &str = "https://example.com/placeholder.png";

    #[test]
    fn test_deserialize_wire_names() {
        let json = r#"[
            {"id": 1, "imagem": "https://img.example.com/a.png", "titulo": "Primeiro", "corpo_redacao": "Texto"},
            {"id": 2, "imagem": "", "titulo": "Segundo", "corpo_redacao": ""}
        ]"#;
        let models: Vec<ModelRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(models.len(), 2);
        assert_eq!(models[0].id, 1);
        assert_eq!(models[0].image.as_deref(), Some("https://img.example.com/a.png"));
        assert_eq!(models[0].title, "Primeiro");
        assert_eq!(models[0].body, "Texto");
        assert_eq!(models[1].image.as_deref(), Some(""));
    }

    #[test]
    fn test_deserialize_missing_or_null_image() {
        let missing: ModelRecord =
            serde_json::from_str(r#"{"id": 3, "titulo": "T", "corpo_redacao": "B"}"#).unwrap();
        assert!(missing.image.is_none());

        let null: ModelRecord =
            serde_json::from_str(r#"{"id": 4, "imagem": null, "titulo": "T", "corpo_redacao": "B"}"#)
                .unwrap();
        assert!(null.image.is_none());
    }

    #[test]
    fn test_display_image_fallback() {
        let mut model = ModelRecord {
            id: 1,
            image: None,
            title: "T".to_string(),
            body: "B".to_string(),
        };
        assert_eq!(model.display_image(PLACEHOLDER), PLACEHOLDER);

        model.image = Some(String::new());
        assert_eq!(model.display_image(PLACEHOLDER), PLACEHOLDER);

        model.image = Some("https://img.example.com/x.png".to_string());
        assert_eq!(model.display_image(PLACEHOLDER), "https://img.example.com/x.png");
    }

    #[test]
    fn test_payload_serializes_wire_names() {
        let draft = DraftRecord {
            title: "Título".to_string(),
            image: "https://img.example.com/x.png".to_string(),
            body: "Corpo".to_string(),
        };
        let value = serde_json::to_value(draft.to_payload()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "imagem": "https://img.example.com/x.png",
                "titulo": "Título",
                "corpo_redacao": "Corpo",
            })
        );
    }

    #[test]
    fn test_draft_clear() {
        let mut draft = DraftRecord {
            title: "a".to_string(),
            image: "b".to_string(),
            body: "c".to_string(),
        };
        assert!(!draft.is_empty());
        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft, DraftRecord::default());
    }
}
