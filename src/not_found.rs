//! The 404 page.

use axum::{
    http::StatusCode,
    response::Response,
};

use crate::{html::error_view, render};

/// Route handler for unknown paths.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// Build the 404 response directly, for use outside a route handler.
pub fn get_404_not_found_response() -> Response {
    render(
        StatusCode::NOT_FOUND,
        error_view(
            "Page Not Found",
            "404",
            "Sorry, we can't find that page.",
            "Check the address, or head back to the tracker.",
        ),
    )
}
