//! Defines the endpoint that renders the detail modal for a single entry.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{AppState, Error, database_id::EntryId};

use super::{core::get_entry, view::entry_details_view};

/// The state needed to look up a single entry.
#[derive(Debug, Clone)]
pub struct EntryDetailState {
    /// The database connection for reading entries.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EntryDetailState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler that renders the detail modal for the entry with `entry_id`.
///
/// The markup is swapped into the page's modal container by htmx.
pub async fn get_entry_details(
    State(state): State<EntryDetailState>,
    Path(entry_id): Path<EntryId>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let entry = get_entry(entry_id, &connection)?;

    if !entry.is_active {
        // Deleted entries stay in the database but are gone as far as
        // the client is concerned.
        return Err(Error::NotFound);
    }

    Ok(entry_details_view(&entry).into_response())
}
