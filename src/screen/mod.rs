//! The models screen: list of models plus the "new model" form.
//!
//! [`ScreenController`] holds the state and decides what to fetch;
//! [`spawn_screen`] runs it on its own task and performs the requests.

pub mod controller;
pub mod handle;

pub use controller::{
    AlertKind, DraftField, ScreenAlert, ScreenController, ScreenSnapshot, ScreenState,
    SubmitOutcome,
};
pub use handle::{spawn_screen, ScreenError, ScreenHandle};
