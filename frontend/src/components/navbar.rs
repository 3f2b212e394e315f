//! Sidebar with one entry per organism, wrapped around every dashboard page.

use common::organism::Organism;
use common::views::View;
use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

use dioxus_free_icons::icons::md_action_icons::MdHome;
use dioxus_free_icons::{Icon, IconShape};


#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",

            nav {
                id: "x-nav-sidebar",
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                    width: 180px;
                    height: 100%;
                    background-color: #1C212D;
                    padding: 16px;
                    box-sizing: border-box;
                ",
                IconLink { to: Route::HomePage {}, icon: MdHome, label: "Overview" }
                div { style: "border-top: 1px solid #4B5563;" }
                for organism in Organism::ALL {
                    OrganismLink { organism }
                }
            }

            main {
                id: "x-page-container",
                style: "flex-grow: 1; min-width: 100px; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Page".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn OrganismLink(organism: Organism) -> Element {
    let label = organism.config().label;
    rsx! {
        Link {
            class: "x-nav-link",
            to: Route::landing(organism, View::SingleVariant),
            "{label}"
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            class: "x-nav-link",
            to: to,
            title: "{label}",
            span {
                style: "display: flex; align-items: center; gap: 8px;",
                Icon { icon: icon, style: "width: 22px; height: 22px;" }
                "{label}"
            }
        }
    }
}
