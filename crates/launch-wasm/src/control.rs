use crate::dom_error;
use launch_core::error::HostError;
use launch_core::geometry::Bounds;
use launch_core::host::PlaybackControl;
use launch_core::i18n::{I18n, Message};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const PLAY_GLYPH: &str = "\u{25B6}";

/// "Click to start" overlay, inserted right after the display surface so
/// both share the same offset parent.
pub struct DomControl {
    element: HtmlElement,
}

impl DomControl {
    pub fn create(surface: &HtmlElement, i18n: &I18n) -> Result<Self, HostError> {
        if surface.parent_node().is_none() {
            return Err(HostError::Dom("display surface is not attached to the page".into()));
        }
        let document = surface
            .owner_document()
            .ok_or_else(|| HostError::Dom("display surface has no document".into()))?;

        let element: HtmlElement = document
            .create_element("div")
            .map_err(dom_error)?
            .dyn_into()
            .map_err(|_| HostError::Dom("created element is not an HtmlElement".into()))?;

        let label = i18n.to_string(Message::ClickToStart);
        element.set_inner_text(&format!("{PLAY_GLYPH} {label}"));
        element.set_title(&i18n.to_string(Message::AudioNotice));
        element.set_attribute("role", "button").map_err(dom_error)?;
        element.set_attribute("aria-label", &label).map_err(dom_error)?;

        let style = element.style();
        for (key, value) in [
            ("position", "absolute"),
            ("display", "flex"),
            ("align-items", "center"),
            ("justify-content", "center"),
            ("box-sizing", "border-box"),
            ("margin", "0px"),
            ("padding", "0px"),
            ("cursor", "pointer"),
            ("z-index", "10"),
            ("color", "#FFFFFF"),
            ("font-size", "24px"),
            ("background-color", "rgba(0, 0, 0, 0.5)"),
        ] {
            style.set_property(key, value).map_err(dom_error)?;
        }

        surface.after_with_node_1(&element).map_err(dom_error)?;
        Ok(Self { element })
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl PlaybackControl for DomControl {
    fn set_bounds(&mut self, bounds: Bounds) -> Result<(), HostError> {
        let style = self.element.style();
        for (key, value) in [
            ("left", bounds.x),
            ("top", bounds.y),
            ("width", bounds.width),
            ("height", bounds.height),
        ] {
            style
                .set_property(key, &format!("{value}px"))
                .map_err(dom_error)?;
        }
        Ok(())
    }

    fn hide(&mut self) -> Result<(), HostError> {
        let style = self.element.style();
        style.set_property("display", "none").map_err(dom_error)?;
        style.set_property("pointer-events", "none").map_err(dom_error)?;
        Ok(())
    }
}
