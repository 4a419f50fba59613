use crate::error::GeolocationError;

/// A geographic coordinate pair reported by the location capability.
///
/// Only ever built from a successful position callback. Replaced wholesale,
/// never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// The three observable fields of a geolocation request.
///
/// Every instance starts out as [`GeolocationState::pending`] and settles into
/// exactly one of two terminal shapes:
///
/// - `(Some(location), None, loading: false)` on success
/// - `(None, Some(message), loading: false)` on failure or when the platform
///   has no location capability at all
///
/// `location` and `error` are never both populated, and once `loading` drops
/// to `false` the state never changes again. [`GeolocationState::resolve`] is
/// the only mutator and it enforces both rules.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeolocationState {
    pub location: Option<Location>,
    pub error: Option<String>,
    pub loading: bool,
}

impl GeolocationState {
    /// The initial state: no position, no error, request in flight.
    pub fn pending() -> Self {
        Self {
            location: None,
            error: None,
            loading: true,
        }
    }

    /// Settle the request with its one outcome.
    ///
    /// Ignored if the state is already terminal, so a stray second resolution
    /// can never overwrite a settled result.
    pub fn resolve(&mut self, outcome: Result<Location, GeolocationError>) {
        if !self.loading {
            return;
        }

        match outcome {
            Ok(location) => self.location = Some(location),
            Err(error) => self.error = Some(error.to_string()),
        }

        self.loading = false;
    }
}

impl Default for GeolocationState {
    fn default() -> Self {
        Self::pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_pending() {
        let state = GeolocationState::pending();
        assert_eq!(state.location, None);
        assert_eq!(state.error, None);
        assert!(state.loading);
    }

    #[test]
    fn success_is_terminal() {
        let mut state = GeolocationState::pending();
        state.resolve(Ok(Location {
            latitude: 12.34,
            longitude: 56.78,
        }));

        assert_eq!(
            state.location,
            Some(Location {
                latitude: 12.34,
                longitude: 56.78,
            })
        );
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    #[test]
    fn failure_carries_the_platform_message_verbatim() {
        let mut state = GeolocationState::pending();
        state.resolve(Err(GeolocationError::Platform(
            "User denied Geolocation".to_string(),
        )));

        assert_eq!(state.location, None);
        assert_eq!(state.error.as_deref(), Some("User denied Geolocation"));
        assert!(!state.loading);
    }

    #[test]
    fn resolving_twice_keeps_the_first_outcome() {
        let mut state = GeolocationState::pending();
        state.resolve(Ok(Location {
            latitude: 1.0,
            longitude: 2.0,
        }));
        let settled = state.clone();

        state.resolve(Err(GeolocationError::Platform("too late".to_string())));
        assert_eq!(state, settled);

        state.resolve(Ok(Location {
            latitude: 9.0,
            longitude: 9.0,
        }));
        assert_eq!(state, settled);
    }

    #[test]
    fn location_and_error_are_mutually_exclusive() {
        let mut success = GeolocationState::pending();
        success.resolve(Ok(Location {
            latitude: 1.0,
            longitude: 2.0,
        }));
        assert!(success.location.is_some() && success.error.is_none());

        let mut failure = GeolocationState::pending();
        failure.resolve(Err(GeolocationError::NotSupported));
        assert!(failure.location.is_none() && failure.error.is_some());
    }
}
