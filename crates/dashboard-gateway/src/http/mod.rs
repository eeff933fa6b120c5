//! HTTP surface: handlers and page rendering.

pub mod handlers;
pub mod page;

pub use handlers::AppState;
pub use page::{esc, render_error_page, render_page};
