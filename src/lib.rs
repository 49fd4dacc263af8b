//! # parlor-client
//!
//! Leptos + WASM frontend for the Parlor single-room chat. Connects to the
//! chat server over a websocket, renders the shared message log with
//! duplicate suppression, tracks IME composition on the input, and emits
//! typing activity as the user edits.
//!
//! Everything that needs a browser (websocket, timers, DOM node access) is
//! gated behind the `csr` feature; the default build is a plain native
//! library whose state and dispatch logic runs under `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mounts the app onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(crate::app::App);
}
