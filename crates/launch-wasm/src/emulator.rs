use launch_core::config::EmulatorOptions;
use launch_core::error::HostError;
use launch_core::host::Emulator;
use launch_core::rom::RomBytes;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    /// Instance returned by the integrator's emulator factory.
    pub type JsEmulator;

    #[wasm_bindgen(method, catch)]
    fn insert(this: &JsEmulator, cartridge: js_sys::Uint8Array) -> Result<(), JsValue>;
}

fn emulator_error(value: JsValue) -> HostError {
    HostError::Emulator(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}

pub struct ExternalEmulator {
    handle: JsEmulator,
}

impl ExternalEmulator {
    /// Calls `factory(element, options)` and keeps the returned instance.
    pub fn construct(
        factory: &js_sys::Function,
        element: &HtmlElement,
        options: &EmulatorOptions,
    ) -> Result<Self, HostError> {
        let options = serde_wasm_bindgen::to_value(options)
            .map_err(|e| HostError::Emulator(e.to_string()))?;
        let value = factory
            .call2(&JsValue::NULL, element, &options)
            .map_err(emulator_error)?;
        if !value.is_object() {
            return Err(HostError::Emulator(
                "emulator factory did not return an object".into(),
            ));
        }
        Ok(Self {
            handle: value.unchecked_into(),
        })
    }
}

impl Emulator for ExternalEmulator {
    fn insert(&mut self, rom: RomBytes) -> Result<(), HostError> {
        let cartridge = js_sys::Uint8Array::from(rom.as_slice());
        self.handle.insert(cartridge).map_err(emulator_error)
    }
}
