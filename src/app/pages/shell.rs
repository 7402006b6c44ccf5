use dioxus::prelude::*;
use dioxus::document;

use crate::app::layouts::{Navbar, Sidebar};
use crate::config::ShellConfig;

#[component]
pub fn App() -> Element {
    use_context_provider(ShellConfig::load);

    use_effect(|| {
        tracing::info!("Navigation shell mounted");
    });

    rsx! {
        Layout {}
    }
}

#[component]
fn Layout() -> Element {
    // Bundled by build.rs from assets/css/
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            Navbar {}
            div { class: "c-layout__body",
                Sidebar {}
                main { class: "c-layout__main" }
            }
        }
    }
}
