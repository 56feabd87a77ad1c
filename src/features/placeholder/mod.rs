pub mod font;
pub mod renderer;
pub mod supplier;

pub use font::GlyphSource;
pub use renderer::{PlaceholderRenderer, PlaceholderStyle};
pub use supplier::{display_gloss, supply_image};
