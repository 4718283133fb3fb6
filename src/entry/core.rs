//! Defines the core data models and database queries for entries.

use rusqlite::{
    Connection, Row,
    types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use time::Date;

use crate::{Error, database_id::EntryId};

// ============================================================================
// MODELS
// ============================================================================

/// The kind of financial event an entry records.
///
/// Exactly one category is stored per entry alongside a single amount
/// column, so an entry can never carry more than one kind of amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
    /// Money put aside as savings.
    Savings,
    /// Money put aside for emergencies.
    EmergencyFund,
}

impl Category {
    /// All categories, in the order the filter bar displays them.
    pub const ALL: [Category; 4] = [
        Category::Income,
        Category::Savings,
        Category::Expense,
        Category::EmergencyFund,
    ];

    /// The value used for this category in URLs, forms and the database.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Category::Income => "income",
            Category::Expense => "expense",
            Category::Savings => "savings",
            Category::EmergencyFund => "emergency_fund",
        }
    }

    /// Parse a query/database value produced by [Category::as_query_value].
    pub fn from_query_value(value: &str) -> Option<Self> {
        match value {
            "income" => Some(Category::Income),
            "expense" => Some(Category::Expense),
            "savings" => Some(Category::Savings),
            "emergency_fund" => Some(Category::EmergencyFund),
            _ => None,
        }
    }

    /// Whether amounts in this category add to the balance.
    ///
    /// Expenses subtract, everything else adds.
    pub fn is_credit(self) -> bool {
        !matches!(self, Category::Expense)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Income => "Income",
            Category::Expense => "Expense",
            Category::Savings => "Savings",
            Category::EmergencyFund => "Emergency Fund",
        };

        write!(f, "{label}")
    }
}

impl ToSql for Category {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_query_value()))
    }
}

impl FromSql for Category {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;

        Category::from_query_value(text).ok_or_else(|| {
            FromSqlError::Other(format!("invalid entry category {text:?}").into())
        })
    }
}

/// The filter selected on the tracker page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// Pass every entry through.
    #[default]
    All,
    /// Only income entries.
    Income,
    /// Only savings entries.
    Savings,
    /// Only expense entries.
    Expense,
    /// Only emergency-fund entries.
    EmergencyFund,
}

impl CategoryFilter {
    /// The filters in display order: All first, then the categories.
    pub const ALL: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Income,
        CategoryFilter::Savings,
        CategoryFilter::Expense,
        CategoryFilter::EmergencyFund,
    ];

    /// Whether an entry of `category` passes this filter.
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Income => category == Category::Income,
            CategoryFilter::Savings => category == Category::Savings,
            CategoryFilter::Expense => category == Category::Expense,
            CategoryFilter::EmergencyFund => category == Category::EmergencyFund,
        }
    }

    /// The value used for this filter in the tracker page's query string.
    pub fn as_query_value(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Income => "income",
            CategoryFilter::Savings => "savings",
            CategoryFilter::Expense => "expense",
            CategoryFilter::EmergencyFund => "emergency_fund",
        }
    }

    /// The label shown on the filter bar button.
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Income => "Income",
            CategoryFilter::Savings => "Savings",
            CategoryFilter::Expense => "Expense",
            CategoryFilter::EmergencyFund => "Emergency Fund",
        }
    }
}

/// A logged financial event.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// The ID of the entry.
    pub id: EntryId,
    /// A text description of what the entry was for.
    pub description: String,
    /// The kind of financial event.
    pub category: Category,
    /// The magnitude of the entry, always non-negative.
    pub amount: f64,
    /// The user-supplied date of the event. This is not the insertion time.
    pub date: Date,
    /// Whether the entry is visible on the tracker. Soft-deleted entries
    /// are kept in the database with this flag cleared.
    pub is_active: bool,
}

impl Entry {
    /// The amount signed by category: positive for income, savings and
    /// emergency fund, negative for expenses.
    pub fn signed_amount(&self) -> f64 {
        if self.category.is_credit() {
            self.amount
        } else {
            -self.amount
        }
    }
}

/// The data needed to create an [Entry].
///
/// Shaping a submission into this struct is the write boundary that
/// guarantees each entry has exactly one category and one amount.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    /// A text description of what the entry is for.
    pub description: String,
    /// The kind of financial event.
    pub category: Category,
    /// The magnitude of the entry.
    pub amount: f64,
    /// The user-supplied date of the event.
    pub date: Date,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new entry in the database.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn create_entry(new_entry: NewEntry, connection: &Connection) -> Result<Entry, Error> {
    let entry = connection
        .prepare(
            "INSERT INTO entry (description, category, amount, date, is_active)
             VALUES (?1, ?2, ?3, ?4, 1)
             RETURNING id, description, category, amount, date, is_active",
        )?
        .query_one(
            (
                new_entry.description,
                new_entry.category,
                new_entry.amount,
                new_entry.date,
            ),
            map_entry_row,
        )?;

    Ok(entry)
}

/// Retrieve an entry from the database by its `id`, regardless of whether
/// it has been soft-deleted.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid entry,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_entry(id: EntryId, connection: &Connection) -> Result<Entry, Error> {
    let entry = connection
        .prepare(
            "SELECT id, description, category, amount, date, is_active
             FROM entry WHERE id = :id",
        )?
        .query_one(&[(":id", &id)], map_entry_row)?;

    Ok(entry)
}

/// Retrieve all entries that have not been soft-deleted, most recent date
/// first.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_active_entries(connection: &Connection) -> Result<Vec<Entry>, Error> {
    connection
        .prepare(
            "SELECT id, description, category, amount, date, is_active
             FROM entry WHERE is_active = 1
             ORDER BY date DESC, id DESC",
        )?
        .query_map([], map_entry_row)?
        .map(|entry| entry.map_err(|error| error.into()))
        .collect()
}

/// The number of rows changed by an UPDATE.
pub type RowsAffected = usize;

/// Clear the active flag on the entry with the given `id`.
///
/// The row is retained; it simply stops appearing in
/// [get_active_entries]. Returns the number of rows affected, which is
/// zero when the entry does not exist or was already soft-deleted.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn soft_delete_entry(id: EntryId, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "UPDATE entry SET is_active = 0 WHERE id = :id AND is_active = 1",
            &[(":id", &id)],
        )
        .map_err(|error| error.into())
}

/// Overwrite the description of the entry with the given `id`.
///
/// No other column is touched. Returns the number of rows affected, which
/// is zero when the entry does not exist or was soft-deleted.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn update_entry_description(
    id: EntryId,
    description: &str,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "UPDATE entry SET description = ?1 WHERE id = ?2 AND is_active = 1",
            (description, id),
        )
        .map_err(|error| error.into())
}

/// Sum the signed amounts of the active entries in `entries`:
/// income, savings and emergency fund add, expenses subtract.
pub fn compute_balance(entries: &[Entry]) -> f64 {
    entries
        .iter()
        .filter(|entry| entry.is_active)
        .map(Entry::signed_amount)
        .sum()
}

/// Create the entry table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_entry_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS entry (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                description TEXT NOT NULL,
                category TEXT NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                is_active INTEGER NOT NULL DEFAULT 1
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('entry', 0)",
        (),
    )?;

    // Index used by the tracker page's active fetch.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_entry_active_date ON entry(is_active, date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to an Entry.
pub fn map_entry_row(row: &Row) -> Result<Entry, rusqlite::Error> {
    let id = row.get(0)?;
    let description = row.get(1)?;
    let category = row.get(2)?;
    let amount = row.get(3)?;
    let date = row.get(4)?;
    let is_active = row.get(5)?;

    Ok(Entry {
        id,
        description,
        category,
        amount,
        date,
        is_active,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod database_tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{Error, db::initialize};

    use super::{
        Category, Entry, NewEntry, create_entry, get_active_entries, get_entry, soft_delete_entry,
        update_entry_description,
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn new_entry(description: &str, category: Category, amount: f64) -> NewEntry {
        NewEntry {
            description: description.to_owned(),
            category,
            amount,
            date: date!(2024 - 01 - 01),
        }
    }

    #[test]
    fn create_persists_exactly_one_category_and_amount() {
        let conn = get_test_connection();

        let entry =
            create_entry(new_entry("Salary", Category::Income, 5000.0), &conn).unwrap();

        assert_eq!(entry.category, Category::Income);
        assert_eq!(entry.amount, 5000.0);
        assert!(entry.is_active);
        assert_eq!(entry.date, date!(2024 - 01 - 01));

        let stored = get_entry(entry.id, &conn).unwrap();
        assert_eq!(stored, entry);
    }

    #[test]
    fn ids_are_monotonic() {
        let conn = get_test_connection();

        let first = create_entry(new_entry("", Category::Income, 1.0), &conn).unwrap();
        let second = create_entry(new_entry("", Category::Expense, 2.0), &conn).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn get_missing_entry_returns_not_found() {
        let conn = get_test_connection();

        let result = get_entry(999, &conn);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn active_entries_sorted_by_date_descending() {
        let conn = get_test_connection();
        create_entry(
            NewEntry {
                description: "older".to_owned(),
                category: Category::Income,
                amount: 1.0,
                date: date!(2024 - 01 - 01),
            },
            &conn,
        )
        .unwrap();
        create_entry(
            NewEntry {
                description: "newer".to_owned(),
                category: Category::Income,
                amount: 2.0,
                date: date!(2024 - 02 - 01),
            },
            &conn,
        )
        .unwrap();

        let entries = get_active_entries(&conn).unwrap();

        let descriptions: Vec<&str> = entries
            .iter()
            .map(|entry| entry.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["newer", "older"]);
    }

    #[test]
    fn soft_delete_hides_entry_but_keeps_row() {
        let conn = get_test_connection();
        let salary = create_entry(new_entry("Salary", Category::Income, 5000.0), &conn).unwrap();
        let groceries =
            create_entry(new_entry("Groceries", Category::Expense, 120.50), &conn).unwrap();

        let rows_affected = soft_delete_entry(groceries.id, &conn).unwrap();
        assert_eq!(rows_affected, 1);

        let active = get_active_entries(&conn).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, salary.id);

        // An unfiltered read still returns the soft-deleted row.
        let stored = get_entry(groceries.id, &conn).unwrap();
        assert!(!stored.is_active);
        assert_eq!(stored.description, "Groceries");
    }

    #[test]
    fn soft_delete_twice_affects_no_rows() {
        let conn = get_test_connection();
        let entry = create_entry(new_entry("", Category::Expense, 1.0), &conn).unwrap();

        assert_eq!(soft_delete_entry(entry.id, &conn).unwrap(), 1);
        assert_eq!(soft_delete_entry(entry.id, &conn).unwrap(), 0);
    }

    #[test]
    fn soft_delete_missing_entry_affects_no_rows() {
        let conn = get_test_connection();

        assert_eq!(soft_delete_entry(999, &conn).unwrap(), 0);
    }

    #[test]
    fn edit_description_changes_only_that_column() {
        let conn = get_test_connection();
        let entry =
            create_entry(new_entry("Grocries", Category::Expense, 120.50), &conn).unwrap();

        let rows_affected = update_entry_description(entry.id, "Groceries", &conn).unwrap();
        assert_eq!(rows_affected, 1);

        let updated = get_entry(entry.id, &conn).unwrap();
        assert_eq!(updated.description, "Groceries");
        assert_eq!(updated.category, entry.category);
        assert_eq!(updated.amount, entry.amount);
        assert_eq!(updated.date, entry.date);
        assert_eq!(updated.id, entry.id);
    }

    #[test]
    fn edit_description_of_soft_deleted_entry_affects_no_rows() {
        let conn = get_test_connection();
        let entry = create_entry(new_entry("", Category::Income, 1.0), &conn).unwrap();
        soft_delete_entry(entry.id, &conn).unwrap();

        assert_eq!(
            update_entry_description(entry.id, "edited", &conn).unwrap(),
            0
        );
    }

    #[test]
    fn category_round_trips_through_database() {
        let conn = get_test_connection();

        for category in Category::ALL {
            let entry = create_entry(new_entry("", category, 1.0), &conn).unwrap();
            let stored = get_entry(entry.id, &conn).unwrap();
            assert_eq!(stored.category, category);
        }
    }
}
