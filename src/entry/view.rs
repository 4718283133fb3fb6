//! Shared markup for the tracker page and the entry detail modal.

use maud::{Markup, html};
use time::Date;

use crate::{
    endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, ENTRY_ROW_STYLE,
        FILTER_ACTIVE_STYLE, FILTER_INACTIVE_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        format_currency, loading_spinner,
    },
};

use super::core::{Category, CategoryFilter, Entry};

/// A colored badge naming the entry's category.
pub(crate) fn category_badge(category: Category) -> Markup {
    let style = match category {
        Category::Expense => "bg-red-100 text-red-600",
        Category::Income => "bg-green-100 text-green-700",
        Category::Savings => "bg-blue-100 text-blue-700",
        Category::EmergencyFund => "bg-yellow-100 text-yellow-700",
    };

    html! {
        span class={ "inline-block px-2 py-0.5 rounded text-xs font-semibold " (style) }
        {
            (category)
        }
    }
}

/// The entry's amount with its sign and category coloring, e.g. "+₱5,000.00".
pub(crate) fn signed_amount(entry: &Entry) -> Markup {
    let style = if entry.category.is_credit() {
        "text-teal-700 dark:text-teal-400 font-semibold text-lg"
    } else {
        "text-red-500 font-semibold text-lg"
    };
    // format_currency renders the minus sign for expenses; credits get an
    // explicit plus.
    let text = if entry.category.is_credit() {
        format!("+{}", format_currency(entry.amount))
    } else {
        format_currency(-entry.amount)
    };

    html! {
        span class=(style) { (text) }
    }
}

/// The submission form for a new entry. `today` is used as both the
/// default and maximum date.
pub(crate) fn entry_form(today: Date) -> Markup {
    let spinner = loading_spinner();

    html! {
        form
            hx-post=(endpoints::ENTRIES_API)
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-5"
        {
            h2 class="text-2xl font-semibold text-teal-800 dark:text-teal-300" { "Add Entry" }

            div
            {
                label
                    for="description"
                    class=(FORM_LABEL_STYLE)
                {
                    "Description"
                }

                input
                    name="description"
                    id="description"
                    type="text"
                    placeholder="Description"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount"
                }

                // w-full needed to ensure input takes the full width
                div class="input-wrapper w-full"
                {
                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        min="0.01"
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label
                    for="category"
                    class=(FORM_LABEL_STYLE)
                {
                    "Type"
                }

                select
                    name="category"
                    id="category"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for category in Category::ALL {
                        option value=(category.as_query_value()) { (category) }
                    }
                }
            }

            div
            {
                label
                    for="date"
                    class=(FORM_LABEL_STYLE)
                {
                    "Date"
                }

                input
                    name="date"
                    id="date"
                    type="date"
                    max=(today)
                    value=(today)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                span
                    id="indicator"
                    class="inline htmx-indicator"
                {
                    (spinner)
                }
                " Add Entry"
            }
        }
    }
}

/// The row of filter buttons. The active filter is highlighted.
pub(crate) fn filter_bar(active_filter: CategoryFilter) -> Markup {
    html! {
        div class="mb-4 flex flex-wrap gap-2"
        {
            @for filter in CategoryFilter::ALL {
                @let style = if filter == active_filter {
                    FILTER_ACTIVE_STYLE
                } else {
                    FILTER_INACTIVE_STYLE
                };

                a
                    href={ (endpoints::TRACKER_VIEW) "?filter=" (filter.as_query_value()) }
                    class=(style)
                {
                    (filter.label())
                }
            }
        }
    }
}

/// The list of entries. Each row opens the detail modal when clicked.
pub(crate) fn entry_list(entries: &[Entry]) -> Markup {
    html! {
        div class="max-h-96 overflow-y-auto"
        {
            ul class="space-y-4 min-h-12 flex flex-col"
            {
                @for entry in entries {
                    li
                        data-entry-row="true"
                        hx-get=(endpoints::format_endpoint(endpoints::ENTRY_DETAILS, entry.id))
                        hx-target="#modal-container"
                        hx-target-error="#alert-container"
                        class=(ENTRY_ROW_STYLE)
                    {
                        div
                        {
                            div class="font-medium text-teal-900 dark:text-white"
                            {
                                (entry.description)
                            }

                            div class="text-xs text-teal-500" { (entry.date) }

                            div class="mt-1" { (category_badge(entry.category)) }
                        }

                        (signed_amount(entry))
                    }
                }

                @if entries.is_empty() {
                    li class="flex justify-center items-center py-8 w-full"
                    {
                        span class="text-gray-500 text-2xl text-center w-full"
                        {
                            "No entries yet."
                        }
                    }
                }
            }
        }
    }
}

/// Wrap modal `body` in the overlay shell swapped into `#modal-container`.
pub(crate) fn modal(body: Markup) -> Markup {
    html! {
        div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/20 backdrop-blur-sm"
        {
            div
                class="relative bg-white dark:bg-gray-800 rounded-xl shadow-2xl p-8 w-full \
                    max-w-md border border-teal-200 dark:border-gray-700"
            {
                button
                    type="button"
                    class="absolute top-4 right-4 text-teal-400 hover:text-teal-600 text-2xl font-bold"
                    aria-label="Close"
                    tabindex="0"
                    onclick="document.getElementById('modal-container').innerHTML = ''"
                {
                    "×"
                }

                h3
                    class="text-2xl font-bold mb-6 text-teal-700 dark:text-teal-300 text-center \
                        tracking-tight border-b border-teal-100 pb-4"
                {
                    "Entry Details"
                }

                (body)
            }
        }
    }
}

/// One labelled row inside the detail modal.
pub(crate) fn modal_field(label: &str, value: Markup) -> Markup {
    html! {
        div class="flex items-center gap-2"
        {
            span class="font-medium w-28 text-gray-600 dark:text-gray-400" { (label) ":" }
            (value)
        }
    }
}

/// The read-only body of the detail modal, with Edit and Delete actions.
pub(crate) fn entry_details_view(entry: &Entry) -> Markup {
    let edit_url = endpoints::format_endpoint(endpoints::EDIT_ENTRY_VIEW, entry.id);
    let delete_url = endpoints::format_endpoint(endpoints::ENTRY_API, entry.id);

    let body = html! {
        div class="space-y-4"
        {
            (modal_field("Description", html! {
                span class="text-teal-900 dark:text-white truncate" { (entry.description) }
            }))
            (modal_field("Type", category_badge(entry.category)))
            (modal_field("Amount", signed_amount(entry)))
            (modal_field("Date", html! {
                span class="text-gray-700 dark:text-gray-300" { (entry.date) }
            }))
            (modal_field("Record ID", html! {
                span class="text-gray-400" { (entry.id) }
            }))
        }

        div class="flex justify-end mt-8 gap-2 border-t border-teal-100 pt-4"
        {
            button
                hx-get=(edit_url)
                hx-target="#modal-container"
                hx-target-error="#alert-container"
                class="py-2 px-6 bg-blue-500 hover:bg-blue-600 text-white font-bold rounded-lg shadow"
            {
                "Edit"
            }

            button
                hx-delete=(delete_url)
                hx-confirm={ "Are you sure? '" (entry.description) "' will be deleted." }
                hx-target-error="#alert-container"
                class=(BUTTON_DELETE_STYLE)
            {
                "Delete"
            }
        }
    };

    modal(body)
}

/// The edit-mode body of the detail modal: a description form with
/// Save and Cancel actions.
pub(crate) fn edit_description_view(entry: &Entry) -> Markup {
    let update_url = endpoints::format_endpoint(endpoints::ENTRY_API, entry.id);
    let details_url = endpoints::format_endpoint(endpoints::ENTRY_DETAILS, entry.id);

    let body = html! {
        form
            hx-put=(update_url)
            hx-target-error="#alert-container"
            class="space-y-4"
        {
            div
            {
                label
                    for="description"
                    class=(FORM_LABEL_STYLE)
                {
                    "Description"
                }

                input
                    name="description"
                    id="description"
                    type="text"
                    value=(entry.description)
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="flex justify-end gap-2 border-t border-teal-100 pt-4"
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }

                button
                    type="button"
                    hx-get=(details_url)
                    hx-target="#modal-container"
                    hx-target-error="#alert-container"
                    class=(BUTTON_SECONDARY_STYLE)
                {
                    "Cancel"
                }
            }
        }
    };

    modal(body)
}
