use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Nutrition facts as printed by the dining service. Values are free text
/// ("123 Cal", "14g") and any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nutrition {
    pub serving_size: Option<String>,
    pub calories: Option<String>,
    pub total_fat: Option<String>,
    pub saturated_fat: Option<String>,
    pub trans_fat: Option<String>,
    pub cholesterol: Option<String>,
    pub sodium: Option<String>,
    pub total_carbohydrate: Option<String>,
    pub dietary_fiber: Option<String>,
    pub sugars: Option<String>,
    pub protein: Option<String>,
    pub vitamin_a: Option<String>,
    pub vitamin_c: Option<String>,
    pub calcium: Option<String>,
    pub iron: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub item_name: String,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub nutrition: Nutrition,
    #[serde(default)]
    pub rating: Option<String>,
}

impl MenuItem {
    pub fn allergen_label(&self) -> String {
        if self.allergens.is_empty() {
            return "No Allergens".to_owned();
        }

        format!("Allergens: {}", self.allergens.join(", "))
    }

    pub fn calories_label(&self) -> String {
        format!(
            "Calories: {}",
            self.nutrition.calories.as_deref().unwrap_or_default()
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    pub station_name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// Stations of one meal. The personalised feed sends a list of sections while
/// the raw menu sends a `station -> items` object; both are accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum Stations {
    Sections(Vec<MenuSection>),
    Map(BTreeMap<String, Vec<MenuItem>>),
}

impl From<Stations> for Vec<MenuSection> {
    fn from(value: Stations) -> Self {
        match value {
            Stations::Sections(sections) => sections,
            Stations::Map(map) => map
                .into_iter()
                .map(|(station_name, items)| MenuSection {
                    station_name,
                    items,
                })
                .collect(),
        }
    }
}

pub(crate) fn deserialize_meals<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, Vec<MenuSection>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, Stations>>::deserialize(deserializer)?;

    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(meal, stations)| (meal, stations.into()))
        .collect())
}

/// One dining hall of the full menu listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HallMenu {
    pub dining_hall: String,
    #[serde(default, deserialize_with = "deserialize_meals")]
    pub menus: BTreeMap<String, Vec<MenuSection>>,
}

impl HallMenu {
    pub fn meals(&self) -> Vec<(&str, &[MenuSection])> {
        ordered_meals(&self.menus)
    }
}

/// Meals in serving order: Breakfast, Brunch, Lunch, Dinner, then anything
/// else alphabetically.
pub fn ordered_meals(menus: &BTreeMap<String, Vec<MenuSection>>) -> Vec<(&str, &[MenuSection])> {
    let mut meals = menus
        .iter()
        .map(|(name, sections)| (name.as_str(), sections.as_slice()))
        .collect::<Vec<_>>();

    meals.sort_by_key(|(name, _)| meal_rank(name));
    meals
}

fn meal_rank(name: &str) -> usize {
    match name.to_lowercase().as_str() {
        "breakfast" => 0,
        "brunch" => 1,
        "lunch" => 2,
        "dinner" => 3,
        _ => 4,
    }
}

/// Category of a food trait badge.
#[derive(EnumString, VariantArray, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraitKind {
    Vegan,
    Vegetarian,
    NutrientDenseLow,
    NutrientDenseMedium,
    NutrientDenseHigh,
    Spicy,
    CarbonFootprintLow,
    CarbonFootprintMedium,
    CarbonFootprintHigh,
    GlutenFree,
    Halal,
    Kosher,
    Other,
}

impl TraitKind {
    /// First match wins, so "nutrient dense low medium" counts as low.
    pub fn classify(value: &str) -> Self {
        let value = value.to_lowercase();
        let rules = [
            ("vegan", Self::Vegan),
            ("vegetarian", Self::Vegetarian),
            ("nutrient dense low", Self::NutrientDenseLow),
            ("nutrient dense medium", Self::NutrientDenseMedium),
            ("nutrient dense high", Self::NutrientDenseHigh),
            ("spicy", Self::Spicy),
            ("carbon footprint low", Self::CarbonFootprintLow),
            ("carbon footprint medium", Self::CarbonFootprintMedium),
            ("carbon footprint high", Self::CarbonFootprintHigh),
            ("gluten free", Self::GlutenFree),
            ("halal", Self::Halal),
            ("kosher", Self::Kosher),
        ];

        rules
            .into_iter()
            .find(|(needle, _)| value.contains(needle))
            .map(|(_, kind)| kind)
            .unwrap_or(Self::Other)
    }

    /// xterm-256 foreground colour used for the badge.
    pub fn ansi_color(&self) -> u8 {
        match self {
            Self::Vegan => 34,
            Self::Vegetarian => 114,
            Self::NutrientDenseLow => 229,
            Self::NutrientDenseMedium => 214,
            Self::NutrientDenseHigh => 208,
            Self::Spicy => 196,
            Self::CarbonFootprintLow => 189,
            Self::CarbonFootprintMedium => 141,
            Self::CarbonFootprintHigh => 92,
            Self::GlutenFree => 218,
            Self::Halal => 117,
            Self::Kosher => 180,
            Self::Other => 252,
        }
    }
}
