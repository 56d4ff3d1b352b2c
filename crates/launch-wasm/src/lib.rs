#![cfg(target_arch = "wasm32")]
#![warn(clippy::all, rust_2018_idioms)]
//! Browser bindings for the ROM launcher.
//!
//! ```js
//! import init, { launch } from "launch-wasm";
//! import * as emu from "pixel-hero";
//!
//! await init();
//! const handle = await launch(emu.create_emulator, document.getElementById("game"), {
//!     romUrl: "game.nes",
//!     mode: "gated",
//! });
//! ```

use launch_core::error::HostError;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

pub mod control;
pub mod emulator;
pub mod host;
pub mod bootstrap;
pub mod listener;
pub mod logger;
pub mod surface;
pub mod transport;

pub(crate) fn dom_error(value: JsValue) -> HostError {
    HostError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

static INITIALIZED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        log::debug!("Already initialized, skipping");
        return;
    }
    logger::init(log::LevelFilter::Info);
}

/// Fetches `config.romUrl` and hands it to `factory(element, options)`.
///
/// Resolves once the emulator is running, or (gated mode) once the
/// "click to start" control is on screen. Rejects if the ROM cannot be
/// fetched, in which case nothing is created.
#[wasm_bindgen]
pub async fn launch(
    factory: js_sys::Function,
    element: HtmlElement,
    config: JsValue,
) -> Result<LaunchHandle, JsValue> {
    bootstrap::run(factory, element, config)
        .await
        .map(|launch| LaunchHandle { launch })
        .map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

#[wasm_bindgen]
pub struct LaunchHandle {
    launch: bootstrap::Launch,
}

#[wasm_bindgen]
impl LaunchHandle {
    /// One of `awaiting-transfer`, `awaiting-gesture`, `running`, `stalled`.
    pub fn state(&self) -> String {
        self.launch.phase().to_string()
    }

    /// Must be called from inside a user gesture handler.
    pub fn activate(&self) -> Result<(), JsValue> {
        self.launch
            .activate()
            .map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    /// Stops listening for viewport resizes and control clicks, and hides
    /// the control if it is still waiting. `activate()` keeps working.
    pub fn detach(&mut self) {
        self.launch.detach();
    }
}
