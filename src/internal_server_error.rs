//! The 500 internal server error page.

use axum::{http::StatusCode, response::Response};

use crate::{html::error_view, render};

/// Route handler for the internal server error page.
pub async fn get_internal_server_error_page() -> Response {
    render_internal_server_error(
        "Sorry, something went wrong.",
        "Try again later or check the server logs",
    )
}

/// Build a 500 response showing `description` and a suggested `fix`.
pub fn render_internal_server_error(description: &str, fix: &str) -> Response {
    render(
        StatusCode::INTERNAL_SERVER_ERROR,
        error_view("Internal Server Error", "500", description, fix),
    )
}
