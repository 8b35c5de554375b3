use std::cmp::Ordering;

use askama::Template;
use midining_client::ApiClient;
use midining_location::{
    HallDirectory, LocationProvider, LocationState,
    distance::{self, UNAVAILABLE},
    locate,
};
use midining_shared::{
    Coordinate,
    dining::{DiningHall, Recommendation},
};

use crate::{
    error::{Alert, AppError},
    navigation::{Route, header},
};

use super::chat::ChatOverlay;

/// Home feed: recommendation card plus one card per dining hall.
#[derive(Debug, Clone)]
pub struct HomeScreen {
    directory: HallDirectory,
    fallback: Coordinate,
    pub loading: bool,
    pub location: Option<LocationState>,
    pub halls: Vec<DiningHall>,
    pub recommendation: Option<Recommendation>,
    pub alert: Option<Alert>,
    pub chat: ChatOverlay,
}

/// One dining hall card, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct HallCard {
    pub name: String,
    pub status: String,
    pub distance: String,
    pub miles: Option<f64>,
    pub directions: Option<String>,
}

impl HomeScreen {
    pub fn new(directory: HallDirectory, fallback: Coordinate) -> Self {
        Self {
            directory,
            fallback,
            loading: true,
            location: None,
            halls: vec![],
            recommendation: None,
            alert: None,
            chat: ChatOverlay::default(),
        }
    }

    /// Reads the position once, then loads the feed.
    pub async fn mount(&mut self, client: &ApiClient, provider: &dyn LocationProvider) {
        let state = locate(provider).await;
        if let Some(message) = state.error_message() {
            tracing::warn!("{message}");
        }

        self.location = Some(state);
        self.fetch_dining_halls(client).await;
    }

    pub fn user_position(&self) -> Option<Coordinate> {
        self.location.as_ref().and_then(LocationState::position)
    }

    /// The backend ranks by the position it is sent: the device position
    /// when known, the configured fallback otherwise.
    pub async fn fetch_dining_halls(&mut self, client: &ApiClient) {
        self.loading = true;

        let position = self.user_position().unwrap_or(self.fallback);
        match client.dining_info(position).await {
            Ok(info) => {
                if let Some(error) = &info.error {
                    tracing::warn!("backend could not build the feed: {error}");
                }

                self.halls = info.dining_info;
                self.recommendation = info.recommendation;
            }
            Err(e) => {
                tracing::error!("Error fetching dining halls: {e}");
                self.halls.clear();
                self.recommendation = None;
                self.alert = Some(Alert::error("Failed to load dining halls"));
            }
        }

        self.loading = false;
    }

    /// Cards nearest first when the user's position is known, in feed order
    /// otherwise.
    pub fn cards(&self) -> Vec<HallCard> {
        let user = self.user_position();

        let mut cards = self
            .halls
            .iter()
            .map(|hall| {
                let known = self.directory.find(&hall.dining_hall);
                let miles = match (user, known) {
                    (Some(user), Some(known)) => {
                        Some(distance::haversine_miles(user, known.coordinate()))
                    }
                    (Some(_), None) => hall.distance,
                    (None, _) => None,
                };

                HallCard {
                    name: hall.dining_hall.to_owned(),
                    status: hall.status.to_owned(),
                    distance: miles
                        .map(distance::format_miles)
                        .unwrap_or_else(|| UNAVAILABLE.to_owned()),
                    miles,
                    directions: known.map(|known| known.directions_url()),
                }
            })
            .collect::<Vec<_>>();

        if user.is_some() {
            cards.sort_by(|a, b| match (a.miles, b.miles) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }

        cards
    }

    pub fn render(&self) -> Result<String, AppError> {
        let template = HomeTemplate {
            header: header(Route::Home),
            loading: self.loading,
            location_error: self
                .location
                .as_ref()
                .and_then(LocationState::error_message),
            recommendation: self
                .recommendation
                .as_ref()
                .map(|r| r.reasoning.to_owned())
                .unwrap_or_default(),
            cards: self.cards(),
        };

        Ok(template.render()?)
    }
}

#[derive(Template)]
#[template(path = "home.txt")]
struct HomeTemplate {
    header: String,
    loading: bool,
    location_error: Option<&'static str>,
    recommendation: String,
    cards: Vec<HallCard>,
}
