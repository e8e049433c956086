use dioxus::prelude::*;

use crate::domain::{LineItem, LineItemField};
use crate::ui::theme;
use crate::util::format::sqft;

#[derive(Clone, Debug, PartialEq)]
pub struct LineItemEdit {
    pub id: String,
    pub field: LineItemField,
    pub value: String,
}

#[component]
pub fn LineItemTable(
    items: Vec<LineItem>,
    on_edit: EventHandler<LineItemEdit>,
    on_duplicate: EventHandler<String>,
    on_remove: EventHandler<String>,
) -> Element {
    let is_empty = items.is_empty();

    rsx! {
        div { class: "panel table-wrap",
            table { class: "table",
                thead {
                    tr {
                        th { "Area / Room" }
                        th { "Width (in)" }
                        th { "Height (in)" }
                        th { "Qty" }
                        th { "Sq Ft" }
                        th { "Notes" }
                        th {}
                    }
                }
                tbody {
                    for item in items {
                        LineItemRow {
                            key: "{item.id}",
                            item: item.clone(),
                            on_edit,
                            on_duplicate,
                            on_remove,
                        }
                    }
                    if is_empty {
                        tr {
                            td { class: "muted center", colspan: "7", "Add a row to start measuring." }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LineItemRow(
    item: LineItem,
    on_edit: EventHandler<LineItemEdit>,
    on_duplicate: EventHandler<String>,
    on_remove: EventHandler<String>,
) -> Element {
    let id = item.id.clone();
    let edit = move |field: LineItemField| {
        let id = id.clone();
        move |evt: FormEvent| {
            on_edit.call(LineItemEdit {
                id: id.clone(),
                field,
                value: evt.value(),
            })
        }
    };
    // Numeric cells stay uncontrolled so partial input such as "12." survives re-rendering.
    let duplicate_id = item.id.clone();
    let remove_id = item.id.clone();

    rsx! {
        tr {
            td {
                input {
                    class: theme::INPUT,
                    value: "{item.area}",
                    placeholder: "e.g., Lobby North",
                    oninput: edit(LineItemField::Area),
                }
            }
            td {
                input {
                    class: theme::INPUT_NUMERIC,
                    inputmode: "decimal",
                    initial_value: "{item.width_in}",
                    oninput: edit(LineItemField::Width),
                }
            }
            td {
                input {
                    class: theme::INPUT_NUMERIC,
                    inputmode: "decimal",
                    initial_value: "{item.height_in}",
                    oninput: edit(LineItemField::Height),
                }
            }
            td {
                input {
                    class: theme::INPUT_NUMERIC,
                    inputmode: "numeric",
                    initial_value: "{item.quantity}",
                    oninput: edit(LineItemField::Quantity),
                }
            }
            td { class: "numeric", {sqft(item.sqft())} }
            td {
                input {
                    class: theme::INPUT,
                    value: "{item.notes}",
                    placeholder: "optional",
                    oninput: edit(LineItemField::Notes),
                }
            }
            td { class: "row-actions",
                button {
                    class: theme::BTN_LINK,
                    onclick: move |_| on_duplicate.call(duplicate_id.clone()),
                    "Duplicate"
                }
                button {
                    class: theme::BTN_DANGER_LINK,
                    onclick: move |_| on_remove.call(remove_id.clone()),
                    "Delete"
                }
            }
        }
    }
}
