use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::menu::{MenuSection, deserialize_meals, ordered_meals};

/// A dining hall as returned by the personalised feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiningHall {
    pub dining_hall: String,
    #[serde(default)]
    pub status: String,
    /// Miles from the position sent with the request, when the backend knows it.
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default, deserialize_with = "deserialize_meals")]
    pub menus: BTreeMap<String, Vec<MenuSection>>,
}

impl DiningHall {
    pub fn meals(&self) -> Vec<(&str, &[MenuSection])> {
        ordered_meals(&self.menus)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub reasoning: String,
}

/// Body of `GET /getmenu/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiningInfo {
    #[serde(default)]
    pub dining_info: Vec<DiningHall>,
    #[serde(default)]
    pub recommendation: Option<Recommendation>,
    #[serde(default)]
    pub payload: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_personalised_feed() {
        let json = r#"{
            "recommendation": {"reasoning": "Head to East Quad for the Thai BBQ chicken."},
            "dining_info": [{
                "dining_hall": "East Quad",
                "distance": 0.3,
                "last_updated": "2024-11-20",
                "status": "Serving lunch",
                "menus": {"Lunch": [{"station_name": "Grill", "items": []}]}
            }],
            "payload": "Success"
        }"#;

        let info: DiningInfo = serde_json::from_str(json).unwrap();

        assert_eq!(info.dining_info.len(), 1);
        assert_eq!(info.dining_info[0].distance, Some(0.3));
        assert_eq!(info.dining_info[0].meals()[0].1[0].station_name, "Grill");
        assert_eq!(
            info.recommendation.unwrap().reasoning,
            "Head to East Quad for the Thai BBQ chicken."
        );
        assert_eq!(info.payload.as_deref(), Some("Success"));
    }

    #[test]
    fn decode_error_payload() {
        let info: DiningInfo =
            serde_json::from_str(r#"{"dining_info": [], "error": "could not convert string to float"}"#)
                .unwrap();

        assert!(info.dining_info.is_empty());
        assert!(info.recommendation.is_none());
        assert!(info.error.is_some());
    }

    #[test]
    fn null_distance_is_none() {
        let hall: DiningHall =
            serde_json::from_str(r#"{"dining_hall": "Bursley", "status": "Closed", "distance": null, "menus": {}}"#)
                .unwrap();

        assert_eq!(hall.distance, None);
    }
}
