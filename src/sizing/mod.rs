//! Column-sizing computation: size resolution, region aggregation,
//! sticky offsets, and the owning state store.

mod headers;
mod offsets;
mod region;
mod resolver;
mod store;

pub use headers::*;
pub use offsets::*;
pub use region::*;
pub use resolver::*;
pub use store::*;
