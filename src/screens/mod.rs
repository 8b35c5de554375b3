mod about;
mod auth;
mod chat;
mod home;
mod menu;

pub use about::*;
pub use auth::*;
pub use chat::*;
pub use home::*;
pub use menu::*;
