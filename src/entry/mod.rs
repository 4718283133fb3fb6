//! Entry management for the finance tracker.
//!
//! This module contains everything related to entries:
//! - The `Entry` model and the `Category` it is tagged with
//! - Database functions for storing, querying and soft-deleting entries
//! - View handlers for the tracker page and the detail modal

mod core;
mod create_endpoint;
mod delete_endpoint;
mod detail_endpoint;
mod edit_endpoint;
mod tracker_page;
mod view;

pub use core::{Category, CategoryFilter, Entry, create_entry_table, map_entry_row};
pub use create_endpoint::create_entry_endpoint;
pub use delete_endpoint::delete_entry_endpoint;
pub use detail_endpoint::get_entry_details;
pub use edit_endpoint::{get_edit_description_view, update_entry_endpoint};
pub use tracker_page::get_tracker_page;

#[cfg(test)]
pub use core::{NewEntry, create_entry, get_entry};
