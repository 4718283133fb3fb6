//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{delete, get, post, put},
};

use crate::{
    AppState, endpoints,
    entry::{
        create_entry_endpoint, delete_entry_endpoint, get_edit_description_view, get_entry_details,
        get_tracker_page, update_entry_endpoint,
    },
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::TRACKER_VIEW, get(get_tracker_page))
        .route(endpoints::ENTRY_DETAILS, get(get_entry_details))
        .route(endpoints::EDIT_ENTRY_VIEW, get(get_edit_description_view))
        .route(endpoints::ENTRIES_API, post(create_entry_endpoint))
        .route(
            endpoints::ENTRY_API,
            put(update_entry_endpoint).delete(delete_entry_endpoint),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .route(endpoints::COFFEE, get(get_coffee))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    (StatusCode::IM_A_TEAPOT, Html("I'm a teapot")).into_response()
}

/// The root path '/' redirects to the tracker page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::TRACKER_VIEW)
}


#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_tracker() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::TRACKER_VIEW);
    }
}
