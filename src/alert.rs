//! Alert partials for reporting failed actions to users.
//!
//! Alerts are swapped into the page's `#alert-container` by htmx, either as
//! the target of `hx-target-error` or as an out-of-band swap. Successful
//! actions refresh the tracker page instead of showing an alert.

use maud::{Markup, html};

/// Renders an error alert with a message and optional details.
#[derive(Debug, Clone)]
pub struct AlertView<'a> {
    message: &'a str,
    details: String,
}

impl<'a> AlertView<'a> {
    /// Create a new error alert
    pub fn error(message: &'a str, details: &str) -> Self {
        Self {
            message,
            details: details.to_owned(),
        }
    }

    /// Render the alert, replacing the contents of `#alert-container`.
    pub fn into_html(self) -> Markup {
        html! {
            div id="alert-container" hx-swap-oob="true" class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div
                    class="flex items-start gap-3 p-4 rounded-lg border border-red-200 \
                        bg-red-50 text-red-700 dark:bg-gray-800 dark:text-red-400 shadow-lg"
                    role="alert"
                {
                    span class="font-bold text-lg leading-none" { "!" }

                    div
                    {
                        p class="font-semibold" { (self.message) }

                        @if !self.details.is_empty() {
                            p class="text-sm" { (self.details) }
                        }
                    }

                    button
                        type="button"
                        class="ml-auto font-bold text-xl leading-none cursor-pointer"
                        aria-label="Close"
                        onclick="this.closest('[role=alert]').remove()"
                    {
                        "×"
                    }
                }
            }
        }
    }
}
