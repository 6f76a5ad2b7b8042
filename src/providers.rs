use crate::constants::SWATCH_IDS;
use fretboard_core::{Color, Degree, SizeProvider, ThemeProvider};
use web_sys as web;

/// Reads degree colors from styled swatch elements in the page.
///
/// A swatch's computed `background-color` wins, then its `color`.
pub struct DomTheme {
    window: web::Window,
    document: web::Document,
}

impl DomTheme {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self { window, document }
    }

    fn swatch_id(degree: Degree) -> Option<&'static str> {
        match degree {
            Degree::Root => Some(SWATCH_IDS[0]),
            Degree::Third => Some(SWATCH_IDS[1]),
            Degree::Fifth => Some(SWATCH_IDS[2]),
            Degree::Seventh => Some(SWATCH_IDS[3]),
            Degree::Other => None,
        }
    }
}

impl ThemeProvider for DomTheme {
    fn swatch(&self, degree: Degree) -> Option<Color> {
        let el = self.document.get_element_by_id(Self::swatch_id(degree)?)?;
        let style = self.window.get_computed_style(&el).ok()??;
        ["background-color", "color"]
            .iter()
            .filter_map(|prop| style.get_property_value(prop).ok())
            .find_map(|value| Color::parse_css(&value))
    }
}

/// Client size of the element the canvas fills.
pub struct ContainerSize {
    element: web::HtmlElement,
}

impl ContainerSize {
    pub fn new(element: web::HtmlElement) -> Self {
        Self { element }
    }
}

impl SizeProvider for ContainerSize {
    fn size(&self) -> (f32, f32) {
        (
            self.element.client_width() as f32,
            self.element.client_height() as f32,
        )
    }
}
