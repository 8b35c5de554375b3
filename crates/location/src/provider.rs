use async_trait::async_trait;
use midining_shared::Coordinate;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    #[default]
    Granted,
    Denied,
}

#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Error getting location: {0}")]
    Unavailable(String),
}

/// Source of the user's position: one permission prompt, one read.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn request_permission(&self) -> Permission;

    async fn current_position(&self) -> Result<Coordinate, LocationError>;
}

/// Permission granted, position known up front.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinate);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        Ok(self.0)
    }
}

/// The user refused to share their location.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedLocation;

#[async_trait]
impl LocationProvider for DeniedLocation {
    async fn request_permission(&self) -> Permission {
        Permission::Denied
    }

    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}

/// Permission granted but no position could be read.
#[derive(Debug, Clone, Default)]
pub struct UnavailableLocation {
    pub reason: String,
}

#[async_trait]
impl LocationProvider for UnavailableLocation {
    async fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        Err(LocationError::Unavailable(self.reason.to_owned()))
    }
}

/// Outcome of the single location read a screen session makes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationState {
    Available(Coordinate),
    PermissionDenied,
    Unavailable,
}

impl LocationState {
    pub fn position(&self) -> Option<Coordinate> {
        match self {
            Self::Available(position) => Some(*position),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Available(_) => None,
            Self::PermissionDenied => Some("Location permission denied"),
            Self::Unavailable => Some("Error getting location"),
        }
    }
}

/// Asks for permission, then reads the position once. Never fails: errors
/// degrade to a state without a position.
pub async fn locate(provider: &dyn LocationProvider) -> LocationState {
    if provider.request_permission().await == Permission::Denied {
        tracing::info!("location permission denied");
        return LocationState::PermissionDenied;
    }

    match provider.current_position().await {
        Ok(position) => LocationState::Available(position),
        Err(LocationError::PermissionDenied) => LocationState::PermissionDenied,
        Err(e) => {
            tracing::warn!("{e}");
            LocationState::Unavailable
        }
    }
}
