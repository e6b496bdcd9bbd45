//! Loading, printing and drawing helpers behind the `gridstar` binary.

pub mod load;
pub mod preset;
pub mod print;
pub mod render;

pub use load::{LoadError, load_grid, parse_position, parse_size, random_grid};
pub use preset::Preset;
pub use print::{write_outcome_json, write_path};
pub use render::render_grid;
