//! Data types for the column-sizing core.

mod column;
mod state;

pub use column::*;
pub use state::*;
