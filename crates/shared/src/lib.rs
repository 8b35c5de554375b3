mod command;
mod coordinate;
pub mod chat;
pub mod dining;
pub mod menu;
pub mod preferences;
pub mod user;

pub use command::*;
pub use coordinate::*;
