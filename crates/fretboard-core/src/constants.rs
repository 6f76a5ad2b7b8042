// Shared layout and palette constants for the fretboard core.

// Board defaults
pub const DEFAULT_NUM_FRETS: usize = 15;
pub const DEFAULT_NUM_STRINGS: usize = 6;
pub const DEFAULT_TUNING: &str = "guitar";
pub const DEFAULT_KEY: &str = "E";
pub const DEFAULT_SCALE: &str = "major";
pub const MAX_FRETS: usize = 36;

// Geometry
pub const ZERO_FRET_OFFSET: f32 = 15.0; // px reserved left of the nut for open-string markers
pub const STRING_PADDING_DIVISOR: f32 = 10.0; // string_padding = height / 10
pub const NOTE_RADIUS_DIVISOR: f32 = 4.0; // note_radius = fret_width / 4

// Frets that carry a printed fret number
pub const MARKED_FRETS: [usize; 7] = [3, 5, 7, 9, 12, 15, 17];

// Stroke widths and text
pub const FRET_LINE_WIDTH: f32 = 2.0;
pub const STRING_LINE_WIDTH: f32 = 1.0;
pub const OUTLINE_LINE_WIDTH: f32 = 1.0;
pub const FONT_FAMILY: &str = "system-ui, sans-serif";
pub const LABEL_FONT_SCALE: f32 = 1.1; // label px size relative to note radius
pub const INLAY_FONT_PX: f32 = 11.0;

// Fallback palette, used when the theme does not provide a swatch
pub const ROOT_COLOR: [u8; 3] = [0xe0, 0x4f, 0x5f];
pub const THIRD_COLOR: [u8; 3] = [0xf2, 0xb1, 0x34];
pub const FIFTH_COLOR: [u8; 3] = [0x3f, 0xa7, 0xd6];
pub const SEVENTH_COLOR: [u8; 3] = [0x7d, 0xce, 0x82];
pub const OTHER_COLOR: [u8; 3] = [0xdd, 0xdd, 0xdd]; // neutral foreground
pub const EMPTY_COLOR: [u8; 3] = [0x44, 0x44, 0x44]; // muted background
pub const LINE_COLOR: [u8; 3] = [0x88, 0x88, 0x88];
pub const LABEL_COLOR: [u8; 3] = [0x1b, 0x1b, 0x1b];
