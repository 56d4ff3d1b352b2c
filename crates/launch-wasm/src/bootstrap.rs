use crate::host::DomHost;
use crate::listener::EventListener;
use crate::transport::FetchTransport;
use anyhow::{Context, anyhow};
use launch_core::prelude::*;
use log::{debug, error, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, Window};

pub type SharedGate = Rc<RefCell<PlaybackGate<DomHost>>>;

/// A launch in progress: the gate plus the DOM listeners feeding it.
pub struct Launch {
    gate: SharedGate,
    listeners: Vec<EventListener>,
}

pub async fn run(
    factory: js_sys::Function,
    element: HtmlElement,
    config: JsValue,
) -> anyhow::Result<Launch> {
    let config: LaunchConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| anyhow!("{e}"))
        .context("Invalid launch configuration")?;
    config.validate().context("Invalid launch configuration")?;

    let window = web_sys::window().context("No global `window` object")?;
    let locale = config.resolve_locale(window.navigator().language());
    debug!("launching {} ({:?}, locale {locale})", config.rom_url, config.mode);

    let host = DomHost::new(element, factory, I18n::new(locale));
    let gate = Rc::new(RefCell::new(PlaybackGate::new(
        config.mode,
        host,
        config.emulator.clone(),
    )));

    let loader = Loader::new(FetchTransport::new(window.clone()));
    let rom = loader.load(&config.rom_url).await;

    gate.borrow_mut()
        .handle(LaunchEvent::Transferred(rom))
        .with_context(|| format!("Failed to launch {}", config.rom_url))?;

    Launch::attach(gate, &window)
}

/// Feeds an event to the gate from a DOM callback.
fn dispatch(gate: &SharedGate, event: LaunchEvent) {
    let Ok(mut gate) = gate.try_borrow_mut() else {
        warn!("re-entrant {event:?} dropped");
        return;
    };
    if let Err(e) = gate.handle(event) {
        error!("{:#}", anyhow::Error::new(e));
    }
}

impl Launch {
    /// Hooks the resize and click listeners up to a gate that is waiting
    /// for a gesture. Any other gate is returned as is.
    pub fn attach(gate: SharedGate, window: &Window) -> anyhow::Result<Self> {
        let control = gate.borrow().control().map(|c| c.element().clone());
        let mut launch = Self {
            gate,
            listeners: Vec::new(),
        };
        let Some(control) = control else {
            return Ok(launch);
        };

        let gate = launch.gate.clone();
        let resize = EventListener::new(window, "resize", move |_| {
            dispatch(&gate, LaunchEvent::LayoutChanged);
        })
        .map_err(|e| anyhow!("{e:?}"))
        .context("Failed to observe viewport resize")?;
        launch.listeners.push(resize);

        let gate = launch.gate.clone();
        let click = EventListener::new(&control, "click", move |_| {
            dispatch(&gate, LaunchEvent::Activated);
        })
        .map_err(|e| anyhow!("{e:?}"))
        .context("Failed to listen for clicks on the playback control")?;
        launch.listeners.push(click);

        Ok(launch)
    }

    pub fn phase(&self) -> PhaseKind {
        self.gate.borrow().phase()
    }

    /// Same transition as a click on the control.
    pub fn activate(&self) -> anyhow::Result<()> {
        self.gate
            .try_borrow_mut()
            .map_err(|_| anyhow!("launch is busy"))?
            .handle(LaunchEvent::Activated)
            .context("Failed to start emulator")
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Unregisters the listeners. A control still waiting for its click is
    /// hidden too, since nothing would keep it in place any more.
    pub fn detach(&mut self) {
        debug!("detaching {} listener(s)", self.listeners.len());
        self.listeners.clear();
        match self.gate.try_borrow_mut() {
            Ok(mut gate) => gate.dismiss_control(),
            Err(_) => warn!("launch busy while detaching, control left as is"),
        }
    }
}

impl Drop for Launch {
    fn drop(&mut self) {
        self.detach();
    }
}
