pub mod app;
pub mod error;
pub mod routes;
pub mod static_files;

pub use app::{build_app, run_server};
pub use error::{ApiError, ErrorBody};
pub use static_files::serve_static;
