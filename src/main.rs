//! Navigation shell - Main Entry Point
//!
//! Launches the Dioxus app in the browser (WASM) or natively.

use nav_shell::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(
        "[WASM] Navigation shell - WASM initialized!",
    ));
    dioxus::launch(App);
}

// Native client (desktop)
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Initialize tracing BEFORE launching the renderer
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting navigation shell...");

    dioxus::launch(App);
}
