// Page wiring constants.
//
// Element ids, attribute names and timings shared by the DOM glue. Keeping
// them here lets host-side tests check them without a browser.

// Drawing surface
pub const CONTAINER_ID: &str = "canvas-container";
pub const CANVAS_ID: &str = "fretboard";

// Controls
pub const SCALE_SELECT_ID: &str = "scale-select";
pub const KEY_SELECT_ID: &str = "key-select";
pub const SETTINGS_TOGGLE_ID: &str = "settings-toggle";
pub const SETTINGS_PANEL_ID: &str = "settings-panel";
pub const HINT_ID: &str = "hint-overlay";
pub const INITIAL_VALUE_ATTR: &str = "data-initial"; // optional preselection on a <select>

// Theme swatches, in degree order: root, third, fifth, seventh
pub const SWATCH_IDS: [&str; 4] = ["swatch-root", "swatch-third", "swatch-fifth", "swatch-seventh"];

pub const HIDDEN_CLASS: &str = "hidden";
// Only this inline style property is touched when hiding the panel
pub const PANEL_DISPLAY_PROPERTY: &str = "display";
pub const PANEL_HIDDEN_DISPLAY: &str = "none";

// Trailing-edge debounce for container resizes (milliseconds)
pub const RESIZE_DEBOUNCE_MS: i32 = 120;
