//! WasteSort Web
//!
//! Tabbed web UI for the recyclability classifier: a static dashboard, the
//! training dataset statistics, and an upload/camera classification page
//! backed by the cached model.

pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod dataset;
pub mod server;
pub mod state;
pub mod telemetry;
pub mod view;

pub use cli::{Cli, Commands, ModelArgs};
pub use config::{AppConfig, ModelConfig};
pub use server::{build_app, run_server, ApiError};
pub use state::AppState;
pub use view::ClassificationView;
