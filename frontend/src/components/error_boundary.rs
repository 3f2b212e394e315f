//! Error boundaries and error displays.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("Render failure in {}: {:?}", boundary_name, err);
                rsx! {
                    div {
                        style: "margin: 24px; padding: 16px; border: 1px solid #B91C1C; border-radius: 8px; background: #FEF2F2;",
                        h1 {
                            style: "color: #B91C1C; font-size: 32px; margin: 0 0 8px 0;",
                            "Something went wrong",
                        }
                        p {
                            style: "color: #7F1D1D; font-size: 18px;",
                            "Section: {boundary_name}"
                        }
                        a {
                            href: "/",
                            style: "color: #1D4ED8; font-size: 18px;",
                            "Back to the dashboards overview"
                        }
                        pre {
                            style: "color: #111827; padding: 8px; text-wrap: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            class: "x-button",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: flex-start;
                gap: 6px;
                padding: 10px;
                border: 1px solid #B91C1C;
                border-radius: 6px;
                background: #FEF2F2;
            ",
            strong { style: "color: #B91C1C;", "Could not load this section" }
            pre {
                style: "color: #7F1D1D; margin: 0; text-wrap: auto; max-height: 200px; overflow-y: auto;",
                "{error_txt}"
            }
            {children}
        }
    }
}

/// One-line notice next to the control that produced it.
#[component]
pub fn InlineError(message: String) -> Element {
    rsx! {
        span {
            role: "alert",
            style: "color: #B91C1C; font-size: 14px;",
            "{message}"
        }
    }
}
