//! Defines the endpoints for editing an entry's description: one that renders
//! the edit form inside the detail modal and one that applies the update.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use rusqlite::Connection;
use serde::Deserialize;

use crate::{AppState, Error, database_id::EntryId, endpoints};

use super::{
    core::{get_entry, update_entry_description},
    view::edit_description_view,
};

/// The state needed to edit an entry's description.
#[derive(Debug, Clone)]
pub struct EditEntryState {
    /// The database connection for managing entries.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EditEntryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler that renders the edit-description form for the entry with
/// `entry_id`, swapped into the detail modal by htmx.
pub async fn get_edit_description_view(
    State(state): State<EditEntryState>,
    Path(entry_id): Path<EntryId>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let entry = get_entry(entry_id, &connection)?;

    if !entry.is_active {
        return Err(Error::NotFound);
    }

    Ok(edit_description_view(&entry).into_response())
}

/// The form data for updating an entry's description.
#[derive(Debug, Deserialize)]
pub struct EditDescriptionForm {
    /// The new text describing the entry.
    pub description: String,
}

/// A route handler that updates the description of the entry with `entry_id`,
/// redirects to the tracker page on success.
///
/// Only the description can change, the amount, category and date of an entry
/// are fixed once recorded.
pub async fn update_entry_endpoint(
    State(state): State<EditEntryState>,
    Path(entry_id): Path<EntryId>,
    Form(form): Form<EditDescriptionForm>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match update_entry_description(entry_id, &form.description, &connection) {
        Ok(0) => {
            tracing::error!(
                "could not update entry {entry_id}: update returned zero rows affected"
            );
            Error::UpdateMissingEntry.into_alert_response()
        }
        Ok(_) => (
            HxRedirect(endpoints::TRACKER_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("could not update entry {entry_id}: {error}");
            error.into_alert_response()
        }
    }
}
