//! Defines the route handler for the tracker page: the entry form, the
//! running balance, the filter bar and the entry list.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    html::{PAGE_CONTAINER_STYLE, base, format_currency, peso_input_styles},
    timezone::current_local_date,
};

use super::{
    core::{CategoryFilter, Entry, compute_balance, get_active_entries},
    view::{entry_form, entry_list, filter_bar},
};

/// The state needed for the tracker page.
#[derive(Debug, Clone)]
pub struct TrackerPageState {
    /// The database connection for reading entries.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Manila".
    pub local_timezone: String,
}

impl FromRef<AppState> for TrackerPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The query parameters accepted by the tracker page.
#[derive(Debug, Default, Deserialize)]
pub struct TrackerQuery {
    /// The category filter to apply to the entry list.
    pub filter: Option<CategoryFilter>,
}

/// Everything the tracker page needs to render one consistent state.
struct TrackerView {
    /// The balance over all active entries, ignoring the filter.
    balance: f64,
    /// The filter selected in the filter bar.
    filter: CategoryFilter,
    /// Today's date in the server's timezone, for the form defaults.
    today: Date,
    /// The active entries that pass the filter, most recent date first.
    entries: Vec<Entry>,
}

/// Render the tracker page.
pub async fn get_tracker_page(
    State(state): State<TrackerPageState>,
    Query(query): Query<TrackerQuery>,
) -> Result<Response, Error> {
    let today = current_local_date(&state.local_timezone)?;
    let filter = query.filter.unwrap_or_default();

    let entries = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        get_active_entries(&connection)
            .inspect_err(|error| tracing::error!("could not get entries: {error}"))?
    };

    Ok(tracker_view(build_tracker_view(entries, filter, today)).into_response())
}

/// Derive the balance over the full active set, then apply the filter
/// in memory. The filter never reaches the database query.
fn build_tracker_view(entries: Vec<Entry>, filter: CategoryFilter, today: Date) -> TrackerView {
    let balance = compute_balance(&entries);
    let entries = entries
        .into_iter()
        .filter(|entry| filter.matches(entry.category))
        .collect();

    TrackerView {
        balance,
        filter,
        today,
        entries,
    }
}

fn tracker_view(view: TrackerView) -> Markup {
    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1
                class="text-4xl font-extrabold mb-10 text-teal-700 dark:text-teal-300 \
                    tracking-tight drop-shadow"
            {
                "Finance Tracker"
            }

            div
                class="bg-white dark:bg-gray-800 rounded-2xl shadow-2xl w-full max-w-6xl flex \
                    flex-col md:flex-row overflow-hidden border border-teal-100 dark:border-gray-700"
            {
                // Entry form
                div
                    class="md:w-1/2 w-full p-10 border-b md:border-b-0 md:border-r \
                        border-teal-100 dark:border-gray-700 bg-teal-50 dark:bg-gray-800"
                {
                    (entry_form(view.today))
                }

                // Balance, filter bar and entry list
                div class="md:w-1/2 w-full p-10 bg-white dark:bg-gray-800"
                {
                    h2 class="text-2xl font-semibold mb-6 text-teal-800 dark:text-teal-300"
                    {
                        "Balance: "

                        span id="balance" class="text-teal-600 dark:text-teal-400"
                        {
                            (format_currency(view.balance))
                        }
                    }

                    (filter_bar(view.filter))

                    (entry_list(&view.entries))
                }
            }
        }
    };

    base("Tracker", &[peso_input_styles()], &content)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use rusqlite::Connection;
    use scraper::{ElementRef, Html, Selector};
    use time::macros::date;

    use crate::{
        db::initialize,
        entry::core::{Category, CategoryFilter, NewEntry, create_entry},
        test_utils::{assert_valid_html, parse_html_document},
    };

    use super::{TrackerPageState, TrackerQuery, get_tracker_page};

    fn get_test_state() -> TrackerPageState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        TrackerPageState {
            db_connection: Arc::new(Mutex::new(conn)),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn add_entry(state: &TrackerPageState, description: &str, category: Category, amount: f64) {
        create_entry(
            NewEntry {
                description: description.to_owned(),
                category,
                amount,
                date: date!(2024 - 01 - 01),
            },
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();
    }

    #[track_caller]
    fn get_entry_rows<'a>(html: &'a Html) -> Vec<ElementRef<'a>> {
        html.select(&Selector::parse("li[data-entry-row='true']").unwrap())
            .collect()
    }

    #[track_caller]
    fn get_balance_text(html: &Html) -> String {
        html.select(&Selector::parse("#balance").unwrap())
            .next()
            .expect("No balance element found")
            .text()
            .collect::<String>()
            .trim()
            .to_owned()
    }

    #[tokio::test]
    async fn tracker_page_shows_form_balance_and_entries() {
        let state = get_test_state();
        add_entry(&state, "Salary", Category::Income, 5000.0);
        add_entry(&state, "Groceries", Category::Expense, 120.50);

        let response = get_tracker_page(State(state), Query(TrackerQuery::default()))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = html
            .select(&Selector::parse("form[hx-post='/api/entries']").unwrap())
            .next();
        assert!(form.is_some(), "No entry form found");

        assert_eq!(get_balance_text(&html), "₱4,879.50");
        assert_eq!(get_entry_rows(&html).len(), 2);
    }

    #[tokio::test]
    async fn tracker_page_shows_empty_state() {
        let state = get_test_state();

        let response = get_tracker_page(State(state), Query(TrackerQuery::default()))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        assert_eq!(get_entry_rows(&html).len(), 0);
        let body_text = html.root_element().text().collect::<String>();
        assert!(
            body_text.contains("No entries yet."),
            "Empty state message missing"
        );
        assert_eq!(get_balance_text(&html), "₱0.00");
    }

    #[tokio::test]
    async fn filter_narrows_list_but_not_balance() {
        let state = get_test_state();
        add_entry(&state, "Salary", Category::Income, 5000.0);
        add_entry(&state, "Groceries", Category::Expense, 120.50);
        add_entry(&state, "Rainy day", Category::Savings, 300.0);

        let response = get_tracker_page(
            State(state),
            Query(TrackerQuery {
                filter: Some(CategoryFilter::Expense),
            }),
        )
        .await
        .unwrap();

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let rows = get_entry_rows(&html);
        assert_eq!(rows.len(), 1, "expected only the expense entry");
        let row_text = rows[0].text().collect::<String>();
        assert!(row_text.contains("Groceries"));

        // The balance covers all active entries regardless of the filter.
        assert_eq!(get_balance_text(&html), "₱5,179.50");
    }

    #[tokio::test]
    async fn all_filter_passes_everything_through() {
        let state = get_test_state();
        add_entry(&state, "Salary", Category::Income, 5000.0);
        add_entry(&state, "Groceries", Category::Expense, 120.50);

        let response = get_tracker_page(
            State(state),
            Query(TrackerQuery {
                filter: Some(CategoryFilter::All),
            }),
        )
        .await
        .unwrap();

        let html = parse_html_document(response).await;
        assert_eq!(get_entry_rows(&html).len(), 2);
    }

    #[tokio::test]
    async fn filter_bar_highlights_active_filter() {
        let state = get_test_state();

        let response = get_tracker_page(
            State(state),
            Query(TrackerQuery {
                filter: Some(CategoryFilter::Income),
            }),
        )
        .await
        .unwrap();

        let html = parse_html_document(response).await;
        let links = html
            .select(&Selector::parse("a[href^='/tracker?filter=']").unwrap())
            .collect::<Vec<_>>();
        assert_eq!(links.len(), 5, "expected All plus the four categories");

        let active_link = links
            .iter()
            .find(|link| {
                link.value()
                    .attr("class")
                    .unwrap_or_default()
                    .contains("bg-teal-600")
            })
            .expect("No highlighted filter link found");
        assert_eq!(active_link.text().collect::<String>().trim(), "Income");
    }

    #[tokio::test]
    async fn entry_rows_link_to_detail_modal() {
        let state = get_test_state();
        add_entry(&state, "Salary", Category::Income, 5000.0);

        let response = get_tracker_page(State(state), Query(TrackerQuery::default()))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        let rows = get_entry_rows(&html);
        let hx_get = rows[0]
            .value()
            .attr("hx-get")
            .expect("Entry row missing hx-get attribute");
        assert_eq!(hx_get, "/entries/1");
        assert_eq!(
            rows[0].value().attr("hx-target"),
            Some("#modal-container")
        );
    }

    #[tokio::test]
    async fn invalid_timezone_returns_error() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        let state = TrackerPageState {
            db_connection: Arc::new(Mutex::new(conn)),
            local_timezone: "Not/AZone".to_owned(),
        };

        let result = get_tracker_page(State(state), Query(TrackerQuery::default())).await;

        assert!(result.is_err(), "expected an invalid timezone error");
    }
}
