pub mod definitions;
pub mod iterations;
pub mod types;

pub use definitions::{
    center_for_exponent, default_params_for_exponent, exponent_from_arg, DEFAULT_EXTENT,
    DEFAULT_ITERATION_MAX, DEFAULT_RESOLUTION,
};
pub use iterations::iterate_cell;
pub use types::FieldParams;
