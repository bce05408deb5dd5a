pub mod escape_time;

pub use escape_time::render_escape_field;
