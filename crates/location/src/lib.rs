pub mod distance;
mod halls;
mod provider;

pub use halls::*;
pub use provider::*;
