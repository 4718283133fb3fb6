//! Defines the endpoint for soft-deleting an entry.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use rusqlite::Connection;

use crate::{AppState, Error, database_id::EntryId, endpoints};

use super::core::soft_delete_entry;

/// The state needed to delete an entry.
#[derive(Debug, Clone)]
pub struct DeleteEntryState {
    /// The database connection for managing entries.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteEntryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler that soft-deletes the entry with `entry_id`, redirects to
/// the tracker page on success.
///
/// The entry row stays in the database with its active flag cleared, so it
/// disappears from the tracker page and no longer counts towards the balance.
pub async fn delete_entry_endpoint(
    State(state): State<DeleteEntryState>,
    Path(entry_id): Path<EntryId>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match soft_delete_entry(entry_id, &connection) {
        Ok(0) => Error::DeleteMissingEntry.into_alert_response(),
        Ok(_) => (
            HxRedirect(endpoints::TRACKER_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("could not delete entry {entry_id}: {error}");
            error.into_alert_response()
        }
    }
}
