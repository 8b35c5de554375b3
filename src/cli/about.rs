use anyhow::Result;
use midining_shared::preferences::Priority;

use crate::{
    config::Config,
    screens::{AboutScreen, Tab},
};

/// Edits applied to the fetched profile, in order, before rendering.
#[derive(Debug, Default)]
pub struct AboutEdits {
    pub traits: Vec<(String, Priority)>,
    pub toggles: Vec<String>,
    pub custom: Option<String>,
    pub save: bool,
    pub logout: bool,
}

/// Parses `name=priority` as given to `--set`.
pub fn parse_trait(value: &str) -> Result<(String, Priority), String> {
    let (name, priority) = value
        .split_once('=')
        .ok_or_else(|| format!("expected name=priority, got `{value}`"))?;

    let priority = priority
        .trim()
        .parse::<Priority>()
        .map_err(|_| format!("priority must be like, neutral or dislike, got `{priority}`"))?;

    Ok((name.trim().to_owned(), priority))
}

pub async fn about(config: Config, tab: Tab, edits: AboutEdits) -> Result<()> {
    let client = super::client(&config)?;

    let mut screen = AboutScreen::default();
    screen.mount(&client).await;
    screen.select_tab(tab);

    for (name, priority) in &edits.traits {
        screen.set_trait(name, *priority)?;
    }
    for name in &edits.toggles {
        screen.toggle_allergen(name)?;
    }
    if let Some(custom) = edits.custom {
        screen.set_custom(custom);
    }

    if edits.save {
        screen.save(&client).await;
    }

    println!("{}", screen.render()?);
    super::print_alert(screen.alert.as_ref());

    if edits.logout {
        let next = screen.log_out(&client).await;
        super::print_alert(screen.alert.as_ref());
        super::print_navigation(next);
    }

    Ok(())
}
