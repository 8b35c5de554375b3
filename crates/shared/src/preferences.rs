use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// How much a user wants food carrying a given trait.
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Like,
    #[default]
    Neutral,
    Dislike,
}

pub const DEFAULT_TRAITS: [&str; 7] = [
    "vegan",
    "vegetarian",
    "spicy",
    "kosher",
    "halal",
    "glutenFree",
    "nutrientLow",
];

pub const DEFAULT_ALLERGENS: [&str; 8] = [
    "milk",
    "eggs",
    "fish",
    "shellfish",
    "treeNuts",
    "peanuts",
    "wheat",
    "soy",
];

/// A user's trait priorities, allergen flags and free-text notes.
///
/// The key sets come from whoever produced the profile: a fetched profile
/// replaces the defaults wholesale, and edits only touch existing keys. Keys
/// keep the order they were received in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub traits: IndexMap<String, Priority>,
    #[serde(default)]
    pub allergens: IndexMap<String, bool>,
    #[serde(default)]
    pub custom_preferences: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            traits: DEFAULT_TRAITS
                .iter()
                .map(|name| (name.to_string(), Priority::Neutral))
                .collect(),
            allergens: DEFAULT_ALLERGENS
                .iter()
                .map(|name| (name.to_string(), false))
                .collect(),
            custom_preferences: String::new(),
        }
    }
}

impl Preferences {
    pub fn set_trait(&mut self, name: &str, priority: Priority) -> crate::Result<()> {
        let key = find_key(self.traits.keys(), name)
            .ok_or_else(|| crate::Error::UnknownTrait(name.to_owned()))?;

        self.traits.insert(key, priority);

        Ok(())
    }

    /// Flips an allergen flag and returns its new value.
    pub fn toggle_allergen(&mut self, name: &str) -> crate::Result<bool> {
        let key = find_key(self.allergens.keys(), name)
            .ok_or_else(|| crate::Error::UnknownAllergen(name.to_owned()))?;

        let flag = self.allergens.entry(key).or_default();
        *flag = !*flag;

        Ok(*flag)
    }

    pub fn set_custom(&mut self, text: impl Into<String>) {
        self.custom_preferences = text.into();
    }

    pub fn active_allergens(&self) -> impl Iterator<Item = &str> {
        self.allergens
            .iter()
            .filter(|(_, flag)| **flag)
            .map(|(name, _)| name.as_str())
    }
}

fn find_key<'a>(mut keys: impl Iterator<Item = &'a String>, name: &str) -> Option<String> {
    keys.find(|key| key.eq_ignore_ascii_case(name)).cloned()
}

/// `treeNuts` -> `TreeNuts`, `gluten_free` -> `Gluten free`.
pub fn display_label(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>().replace('_', " "),
        None => String::new(),
    }
}
