use askama::Template;
use midining_client::ApiClient;
use midining_shared::menu::{HallMenu, MenuItem, TraitKind};

use crate::{
    error::{Alert, AppError, SERVER_ERROR_MESSAGE},
    navigation::{Route, header},
};

/// Full menu of every dining hall for today.
#[derive(Debug, Clone)]
pub struct MenuScreen {
    pub loading: bool,
    pub halls: Vec<HallMenu>,
    pub alert: Option<Alert>,
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self {
            loading: true,
            halls: vec![],
            alert: None,
        }
    }
}

impl MenuScreen {
    pub async fn mount(&mut self, client: &ApiClient) {
        self.loading = true;

        match client.full_menu().await {
            Ok(halls) => self.halls = halls,
            Err(e) if e.is_status() => {
                tracing::warn!("fetch full menu: {e}");
                self.alert = Some(Alert::error("Unable to fetch menu."));
            }
            Err(e) => {
                tracing::error!("fetch full menu: {e}");
                self.alert = Some(Alert::error(SERVER_ERROR_MESSAGE));
            }
        }

        self.loading = false;
    }

    /// Keeps only the hall whose name matches, ignoring case.
    pub fn retain_hall(&mut self, name: &str) {
        let name = name.trim().to_lowercase();
        self.halls.retain(|hall| hall.dining_hall.to_lowercase() == name);
    }

    pub fn render(&self, color: bool) -> Result<String, AppError> {
        let halls = self
            .halls
            .iter()
            .map(|hall| HallView {
                name: hall.dining_hall.to_owned(),
                meals: hall
                    .meals()
                    .into_iter()
                    .map(|(meal, sections)| MealView {
                        name: meal.to_owned(),
                        stations: sections
                            .iter()
                            .map(|section| StationView {
                                name: section.station_name.to_owned(),
                                items: section
                                    .items
                                    .iter()
                                    .map(|item| ItemView::new(item, color))
                                    .collect(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        let template = MenuTemplate {
            header: header(Route::Menu),
            loading: self.loading,
            halls,
        };

        Ok(template.render()?)
    }
}

/// `[Vegan]`, coloured with the category's xterm colour when requested.
pub fn badge(value: &str, color: bool) -> String {
    if !color {
        return format!("[{value}]");
    }

    let code = TraitKind::classify(value).ansi_color();
    format!("\x1b[38;5;{code}m[{value}]\x1b[0m")
}

struct ItemView {
    name: String,
    badges: String,
    allergens: String,
    calories: String,
}

impl ItemView {
    fn new(item: &MenuItem, color: bool) -> Self {
        Self {
            name: item.item_name.to_owned(),
            badges: item
                .traits
                .iter()
                .map(|value| badge(value, color))
                .collect::<Vec<_>>()
                .join(" "),
            allergens: item.allergen_label(),
            calories: item.calories_label(),
        }
    }
}

struct StationView {
    name: String,
    items: Vec<ItemView>,
}

struct MealView {
    name: String,
    stations: Vec<StationView>,
}

struct HallView {
    name: String,
    meals: Vec<MealView>,
}

#[derive(Template)]
#[template(path = "menu.txt")]
struct MenuTemplate {
    header: String,
    loading: bool,
    halls: Vec<HallView>,
}
