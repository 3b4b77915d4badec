//! Shared constants used across the application.

/// Image shown for models that have no image URL.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/350x150?text=Image+Placeholder";

/// Number of body characters shown on a model card before truncation.
pub const DEFAULT_BODY_PREVIEW_CHARS: usize = 200;

/// User agent sent with every request to the models API.
pub const CLIENT_USER_AGENT: &str = concat!("modelos-redacao/", env!("CARGO_PKG_VERSION"));

/// Path of the list endpoint, relative to the API base URL.
pub const LIST_MODELS_PATH: &str = "modelos";

/// Path of the create endpoint, relative to the API base URL.
pub const CREATE_MODEL_PATH: &str = "novomodelo";

pub const CREATED_ALERT_TITLE: &str = "Sucesso";
pub const CREATED_ALERT_MESSAGE: &str = "Modelo criado com sucesso!";
pub const CREATE_FAILED_ALERT_TITLE: &str = "Erro";
pub const CREATE_FAILED_ALERT_MESSAGE: &str =
    "Erro ao criar o modelo, tente novamente mais tarde";
