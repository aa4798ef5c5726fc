//! Error boundaries for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    h1 {
                        style: "color:red; font-size: 42px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Erreur",
                    }
                    p {
                        style: "color:darkred; font-size: 22px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Zone : {boundary_name}"
                    }
                    a {
                        href: "/",
                        style: "color:blue; font-size: 22px; border: 1px solid blue; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Retour à l'accueil"
                    }
                    pre {
                        style: "color:black; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto;",
                        "{err:#?}"
                    }
                }
            },
            children
        }
    }
}

/// Boundary around one section of a page; the rest of the page keeps working.
#[component]
pub fn SectionErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(error) => format!("{:#?}", error.0),
                    None => "Erreur inconnue".to_string(),
                };
                rsx! {
                    div {
                        style: "
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            gap: 8px;
                            padding: 16px;
                        ",
                        h2 {
                            style: "color:red; font-size: 24px; margin: 0;",
                            "Impossible d'afficher cette section",
                        }
                        pre {
                            style: "color:darkred; border: 1px solid red; padding: 10px; border-radius: 5px; text-wrap: auto; max-width: 500px; max-height: 300px; overflow-y: auto;",
                            "{error_txt}"
                        }
                        button {
                            style: "color:blue; font-size: 18px; border: 1px solid blue; padding: 8px 12px; border-radius: 5px; background: white; cursor: pointer;",
                            onclick: move |_| err.clear_errors(),
                            "Réessayer"
                        }
                    }
                }
            },
            {children}
        }
    }
}
