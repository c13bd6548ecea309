//! Invocation surfaces for the unique code service: an HTTP API and a
//! one-shot JSON-in/JSON-out entry point.

pub mod app;
pub mod error;
pub mod handlers;
pub mod invoke;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
