use askama::Template;
use clap::ValueEnum;
use midining_client::ApiClient;
use midining_shared::preferences::{Preferences, Priority, display_label};
use strum::{Display, VariantArray};

use crate::{
    error::{Alert, AppError, SERVER_ERROR_MESSAGE},
    navigation::{Route, header},
};

#[derive(ValueEnum, VariantArray, Display, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Tab {
    #[default]
    Traits,
    Allergens,
    Custom,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Traits => "Traits",
            Tab::Allergens => "Allergens",
            Tab::Custom => "Learned",
        }
    }
}

/// "About Me": the preference editor.
///
/// Edits only touch local state; nothing reaches the server until `save`
/// or `log_out`, and neither of those modifies the editor.
#[derive(Debug, Clone, Default)]
pub struct AboutScreen {
    pub active_tab: Tab,
    pub preferences: Preferences,
    pub alert: Option<Alert>,
}

impl AboutScreen {
    /// Loads the stored profile. On failure the editor keeps its defaults.
    pub async fn mount(&mut self, client: &ApiClient) {
        match client.fetch_preferences().await {
            Ok(preferences) => self.preferences = preferences,
            Err(e) if e.is_status() => {
                tracing::warn!("fetch preferences: {e}");
                self.alert = Some(Alert::error("Unable to fetch preferences"));
            }
            Err(e) => {
                tracing::error!("fetch preferences: {e}");
                self.alert = Some(Alert::error(SERVER_ERROR_MESSAGE));
            }
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn set_trait(&mut self, name: &str, priority: Priority) -> Result<(), AppError> {
        Ok(self.preferences.set_trait(name, priority)?)
    }

    pub fn toggle_allergen(&mut self, name: &str) -> Result<bool, AppError> {
        Ok(self.preferences.toggle_allergen(name)?)
    }

    pub fn set_custom(&mut self, text: impl Into<String>) {
        self.preferences.set_custom(text);
    }

    pub async fn save(&mut self, client: &ApiClient) {
        self.alert = Some(match client.save_preferences(&self.preferences).await {
            Ok(()) => Alert::success("Preferences saved successfully!"),
            Err(e) => {
                tracing::error!("save preferences: {e}");
                Alert::from_client_error(&e, "Failed to save preferences.")
            }
        });
    }

    /// Sends the in-memory profile with the end-session call, then leaves
    /// for the login screen whatever the outcome.
    pub async fn log_out(&mut self, client: &ApiClient) -> Route {
        self.alert = Some(match client.end_session(&self.preferences).await {
            Ok(()) => Alert::success("Logged out successfully."),
            Err(e) => {
                tracing::error!("end session: {e}");
                Alert::from_client_error(&e, "Failed to log out.")
            }
        });

        Route::Login
    }

    pub fn render(&self) -> Result<String, AppError> {
        let rows = match self.active_tab {
            Tab::Traits => self
                .preferences
                .traits
                .iter()
                .map(|(name, priority)| format!("{}: {priority}", display_label(name)))
                .collect(),
            Tab::Allergens => self
                .preferences
                .allergens
                .iter()
                .map(|(name, flag)| {
                    let mark = if *flag { "[x]" } else { "[ ]" };
                    format!("{mark} {}", display_label(name))
                })
                .collect(),
            Tab::Custom => vec![],
        };

        let tabs = Tab::VARIANTS
            .iter()
            .map(|tab| {
                if *tab == self.active_tab {
                    format!("[{}]", tab.label())
                } else {
                    tab.label().to_owned()
                }
            })
            .collect::<Vec<_>>()
            .join("  ");

        let template = AboutTemplate {
            header: header(Route::About),
            tabs,
            custom: self.active_tab == Tab::Custom,
            custom_preferences: self.preferences.custom_preferences.to_owned(),
            rows,
        };

        Ok(template.render()?)
    }
}

#[derive(Template)]
#[template(path = "about.txt")]
struct AboutTemplate {
    header: String,
    tabs: String,
    custom: bool,
    custom_preferences: String,
    rows: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traits_tab_lists_priorities() {
        let mut screen = AboutScreen::default();
        screen.set_trait("spicy", Priority::Dislike).unwrap();

        let text = screen.render().unwrap();
        assert!(text.contains("[Traits]"));
        assert!(text.contains("Spicy: dislike"));
        assert!(text.contains("GlutenFree: neutral"));
    }

    #[test]
    fn allergens_tab_shows_flags() {
        let mut screen = AboutScreen::default();
        screen.toggle_allergen("treeNuts").unwrap();
        screen.select_tab(Tab::Allergens);

        let text = screen.render().unwrap();
        assert!(text.contains("[Allergens]"));
        assert!(text.contains("[x] TreeNuts"));
        assert!(text.contains("[ ] Milk"));
    }

    #[test]
    fn custom_tab_shows_text() {
        let mut screen = AboutScreen::default();
        screen.set_custom("Loves pho, avoids cilantro");
        screen.select_tab(Tab::Custom);

        let text = screen.render().unwrap();
        assert!(text.contains("[Learned]"));
        assert!(text.contains("Loves pho, avoids cilantro"));
    }

    #[test]
    fn unknown_allergen_is_a_validation_error() {
        let mut screen = AboutScreen::default();

        assert!(matches!(
            screen.toggle_allergen("gelatin"),
            Err(AppError::ValidationError(_))
        ));
    }
}
