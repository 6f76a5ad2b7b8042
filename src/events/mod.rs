pub mod controls;
pub mod keyboard;

pub use controls::{wire_resize, wire_selects, wire_settings_toggle};
pub use keyboard::wire_global_keydown;
