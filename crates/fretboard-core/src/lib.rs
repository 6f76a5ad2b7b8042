//! Platform-free core of the fretboard viewer: board layout, scale-degree
//! coloring and rendering against an abstract [`Surface`].
pub mod config;
pub mod constants;
pub mod degree;
pub mod geometry;
pub mod render;
pub mod resolver;
pub mod state;
pub mod surface;
pub mod theory;

pub use config::*;
pub use constants::*;
pub use degree::*;
pub use geometry::*;
pub use render::*;
pub use resolver::*;
pub use state::*;
pub use surface::*;
pub use theory::*;
