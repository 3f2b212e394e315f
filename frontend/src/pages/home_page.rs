use common::{organism::Organism, route_registry::registry, views::View};
use dioxus::prelude::*;

use crate::routes::Route;


/// Overview with a card per organism and a link per view.
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Genomic surveillance dashboards" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
            ",

            div {
                style: "color: #0F172A; font-size: 40px; font-weight: 500;",
                "Genomic surveillance dashboards"
            }
            div {
                style: "color: #111827; font-size: 20px; line-height: 1.6; max-width: 720px;",
                "Explore sequencing data by organism. Every filter lives in the address bar, so a copied link reopens the same view."
            }

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                ",
                for organism in Organism::ALL {
                    OrganismCard { organism }
                }
            }
        }
    }
}

#[component]
fn OrganismCard(organism: Organism) -> Element {
    let config = organism.config();
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                width: 300px;
                border-radius: 16px;
                padding: 18px;
                background: white;
                border: 1px solid #E5E7EB;
                box-shadow: 0 6px 16px rgba(0,0,0,0.06);
            ",
            div { style: "font-size: 24px; font-weight: 500;", "{config.label}" }
            for view in View::ALL {
                Link {
                    to: Route::dashboard(&registry().default_state(organism, view)),
                    "{view.label()}"
                }
            }
        }
    }
}
