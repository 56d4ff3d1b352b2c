use crate::control::DomControl;
use crate::emulator::ExternalEmulator;
use crate::surface::DomSurface;
use launch_core::config::EmulatorOptions;
use launch_core::error::HostError;
use launch_core::geometry::Bounds;
use launch_core::host::Host;
use launch_core::i18n::I18n;
use web_sys::HtmlElement;

pub struct DomHost {
    surface: DomSurface,
    factory: js_sys::Function,
    i18n: I18n,
}

impl DomHost {
    pub fn new(element: HtmlElement, factory: js_sys::Function, i18n: I18n) -> Self {
        Self {
            surface: DomSurface::new(element),
            factory,
            i18n,
        }
    }
}

impl Host for DomHost {
    type Emulator = ExternalEmulator;
    type Control = DomControl;

    fn surface_bounds(&self) -> Bounds {
        self.surface.bounds()
    }

    fn construct_emulator(
        &mut self,
        options: &EmulatorOptions,
    ) -> Result<ExternalEmulator, HostError> {
        ExternalEmulator::construct(&self.factory, self.surface.element(), options)
    }

    fn create_control(&mut self) -> Result<DomControl, HostError> {
        DomControl::create(self.surface.element(), &self.i18n)
    }
}
