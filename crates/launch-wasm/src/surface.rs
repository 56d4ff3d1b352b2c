use launch_core::geometry::Bounds;
use web_sys::HtmlElement;

/// The page element hosting the emulator output. Owned by the page.
#[derive(Clone)]
pub struct DomSurface {
    element: HtmlElement,
}

impl DomSurface {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    /// Layout box relative to the offset parent, read from the live layout.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.element.offset_left() as f64,
            self.element.offset_top() as f64,
            self.element.offset_width() as f64,
            self.element.offset_height() as f64,
        )
    }
}
