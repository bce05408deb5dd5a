pub mod palettes;

pub use palettes::color_for_value;
