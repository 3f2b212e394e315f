//! Button that copies the canonical link of the current page state.

use common::{page_state::PageState, route_registry::registry};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_editor_icons::MdInsertLink};
use dioxus_primitives::toast::{ToastOptions, consume_toast};
use wasm_bindgen_futures::JsFuture;

async fn write_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no browser window")?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map_err(|e| format!("{e:?}"))?;
    Ok(())
}

fn absolute_url(path_and_query: &str) -> String {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}{path_and_query}")
}

#[component]
pub fn CopyLinkButton(state: ReadSignal<PageState>) -> Element {
    let do_copy_link = use_callback(move |_: ()| {
        let url = absolute_url(&registry().to_url(&state.read()));
        let toast_api = consume_toast();
        spawn(async move {
            match write_to_clipboard(&url).await {
                Ok(()) => {
                    dioxus::logger::tracing::info!("Link copied to clipboard: {}", url);
                    toast_api.info(
                        "Link copied to clipboard.".to_string(),
                        ToastOptions::new()
                            .description("Opening it restores this dashboard with the same filters.")
                            .duration(std::time::Duration::from_secs(10))
                            .permanent(false),
                    );
                }
                Err(e) => {
                    dioxus::logger::tracing::warn!("Clipboard write failed: {}", e);
                    toast_api.error(
                        "Could not copy the link.".to_string(),
                        ToastOptions::new().description(url).permanent(false),
                    );
                }
            }
        });
    });

    rsx! {
        button {
            class: "x-button",
            title: "Copy a link to this view",
            onclick: move |e| {
                e.prevent_default();
                do_copy_link.call(());
            },
            Icon { icon: MdInsertLink, style: "width: 20px; height: 20px;" }
            "Share"
        }
    }
}
