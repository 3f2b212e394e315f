use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        Title { "Page not found" }
        div {
            style: "padding: 36px 40px;",
            h1 { "No dashboard at /{path}" }
            Link { to: Route::HomePage {}, "Back to the overview" }
        }
    }
}
