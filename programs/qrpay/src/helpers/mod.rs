pub mod cpi;
pub mod hash;

pub use cpi::*;
pub use hash::*;
