//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/entries/{entry_id}', use [format_endpoint].

/// The root route which redirects to the tracker page.
pub const ROOT: &str = "/";
/// The page displaying the entry form, balance and entry list.
pub const TRACKER_VIEW: &str = "/tracker";
/// The detail modal partial for a single entry.
pub const ENTRY_DETAILS: &str = "/entries/{entry_id}";
/// The edit-description form partial for a single entry.
pub const EDIT_ENTRY_VIEW: &str = "/entries/{entry_id}/edit";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route to request a cup of coffee (experimental).
pub const COFFEE: &str = "/api/coffee";
/// The route to create an entry.
pub const ENTRIES_API: &str = "/api/entries";
/// The route to update or soft-delete a single entry.
pub const ENTRY_API: &str = "/api/entries/{entry_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/entries/{entry_id}', '{entry_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
