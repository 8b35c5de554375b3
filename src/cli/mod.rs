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

use midining_client::ApiClient;

use crate::{config::Config, error::Alert, navigation::Route};

pub fn client(config: &Config) -> anyhow::Result<ApiClient> {
    Ok(ApiClient::new(&config.api.base_url, config.api.timeout())?)
}

fn print_alert(alert: Option<&Alert>) {
    if let Some(alert) = alert {
        println!("{alert}");
    }
}

fn print_navigation(route: Route) {
    println!("→ {}", route.path());
}
