//! Defines the endpoint for recording a new entry.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use rusqlite::Connection;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error, endpoints,
    entry::core::{Category, NewEntry, create_entry},
    timezone::current_local_date,
};

/// The state needed to record an entry.
#[derive(Debug, Clone)]
pub struct CreateEntryState {
    /// The database connection for managing entries.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Manila".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateEntryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The form data for recording an entry.
#[derive(Debug, Deserialize)]
pub struct EntryForm {
    /// Text describing the entry, e.g. "Salary".
    pub description: String,
    /// The unsigned amount in pesos.
    pub amount: f64,
    /// Which of the four categories the amount belongs to.
    pub category: Category,
    /// The date the income was received or the expense was made.
    pub date: Date,
}

/// A route handler for recording a new entry, redirects to the tracker page
/// on success.
pub async fn create_entry_endpoint(
    State(state): State<CreateEntryState>,
    Form(form): Form<EntryForm>,
) -> Response {
    let today = match current_local_date(&state.local_timezone) {
        Ok(date) => date,
        Err(error) => return error.into_alert_response(),
    };

    if form.date > today {
        tracing::error!("tried to record an entry dated in the future");

        return Error::FutureDate(form.date).into_alert_response();
    }

    let new_entry = NewEntry {
        description: form.description,
        category: form.category,
        amount: form.amount,
        date: form.date,
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    if let Err(error) = create_entry(new_entry, &connection) {
        tracing::error!("could not record entry: {error}");

        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::TRACKER_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{body::Body, extract::State, http::Response, response::IntoResponse};
    use axum_extra::extract::Form;
    use axum_htmx::HX_REDIRECT;
    use rusqlite::Connection;
    use time::{Duration, OffsetDateTime};

    use crate::{
        db::initialize,
        entry::{
            Category,
            create_endpoint::{CreateEntryState, EntryForm, create_entry_endpoint},
            get_entry,
        },
    };

    fn get_test_state() -> CreateEntryState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        CreateEntryState {
            db_connection: Arc::new(Mutex::new(conn)),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    #[tokio::test]
    async fn can_record_entry() {
        let state = get_test_state();
        let form = EntryForm {
            description: "Salary".to_string(),
            amount: 5000.0,
            category: Category::Income,
            date: OffsetDateTime::now_utc().date(),
        };

        let response = create_entry_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_redirects_to_tracker_view(response);

        // We know the first entry will have ID 1.
        let connection = state.db_connection.lock().unwrap();
        let entry = get_entry(1, &connection).unwrap();
        assert_eq!(entry.description, "Salary");
        assert_eq!(entry.category, Category::Income);
        assert_eq!(entry.amount, 5000.0);
        assert!(entry.is_active);
    }

    #[tokio::test]
    async fn rejects_future_date() {
        let state = get_test_state();
        let form = EntryForm {
            description: "Time travel".to_string(),
            amount: 1.0,
            category: Category::Expense,
            date: OffsetDateTime::now_utc().date() + Duration::days(1),
        };

        let response = create_entry_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert!(response.status().is_client_error());
        let connection = state.db_connection.lock().unwrap();
        assert!(get_entry(1, &connection).is_err(), "no entry should exist");
    }

    #[track_caller]
    fn assert_redirects_to_tracker_view(response: Response<Body>) {
        let location = response
            .headers()
            .get(HX_REDIRECT)
            .expect("expected response to have the header hx-redirect");
        assert_eq!(
            location, "/tracker",
            "got redirect to {location:?}, want redirect to /tracker"
        );
    }
}
