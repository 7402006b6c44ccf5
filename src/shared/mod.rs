pub mod errors;
pub mod logging;

// Dioxus hooks over the domain state
pub mod hooks;
