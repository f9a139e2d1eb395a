mod cell;
mod error;
mod grid;
mod patterns;

pub use cell::{AGE_CAP, Cell};
pub use error::LifeError;
pub use grid::LifeGrid;
pub use patterns::{Pattern, Shape, presets};
