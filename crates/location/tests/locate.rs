use midining_location::{
    DeniedLocation, FixedLocation, LocationState, UnavailableLocation, distance, locate,
};
use midining_shared::Coordinate;

#[tokio::test]
async fn granted_position_is_available() {
    let position = Coordinate::new(42.2739968, -83.7287936).unwrap();
    let state = locate(&FixedLocation(position)).await;

    assert_eq!(state, LocationState::Available(position));
    assert_eq!(state.error_message(), None);
    assert_eq!(distance::distance_label(state.position(), position), "0.0 mi");
}

#[tokio::test]
async fn denied_permission_degrades_to_na() {
    let state = locate(&DeniedLocation).await;
    let target = Coordinate::new(42.28, -83.73).unwrap();

    assert_eq!(state, LocationState::PermissionDenied);
    assert_eq!(state.error_message(), Some("Location permission denied"));
    assert_eq!(distance::distance_label(state.position(), target), "N/A");
}

#[tokio::test]
async fn read_failure_degrades_to_na() {
    let provider = UnavailableLocation {
        reason: "no fix".to_owned(),
    };
    let state = locate(&provider).await;

    assert_eq!(state, LocationState::Unavailable);
    assert_eq!(state.error_message(), Some("Error getting location"));
    assert_eq!(state.position(), None);
}
