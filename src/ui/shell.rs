use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "app",
            header { class: "app-header",
                div { class: "app-header-inner",
                    div {
                        h1 { class: "app-title", "{APP_NAME}" }
                        p { class: "muted small", "Measure, price both films, send the proposal." }
                    }
                    nav { class: "app-nav",
                        NavButton { active: matches!(current_route, Route::Quote {}), onclick: move |_| { nav.push(Route::Quote {}); }, label: "Quote" }
                        NavButton { active: matches!(current_route, Route::Proposal {}), onclick: move |_| { nav.push(Route::Proposal {}); }, label: "Email" }
                        NavButton { active: matches!(current_route, Route::Settings {}), onclick: move |_| { nav.push(Route::Settings {}); }, label: "Settings" }
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
            footer { class: "app-footer muted small", "{version_label()}" }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: theme::nav_button(active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
