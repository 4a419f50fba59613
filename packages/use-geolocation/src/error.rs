/// The two ways a geolocation request can fail.
///
/// Both are terminal. The embedder only ever sees the rendered message text
/// through [`GeolocationState::error`](crate::GeolocationState), never the
/// variant itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    /// The host platform exposes no location capability at all.
    #[error("Geolocation is not supported by your browser")]
    NotSupported,

    /// The platform's location subsystem rejected or failed the request.
    /// The message is passed through verbatim, never classified further.
    #[error("{0}")]
    Platform(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_supported_message_is_fixed() {
        assert_eq!(
            GeolocationError::NotSupported.to_string(),
            "Geolocation is not supported by your browser"
        );
    }

    #[test]
    fn platform_message_passes_through_verbatim() {
        let err = GeolocationError::Platform("User denied Geolocation".to_string());
        assert_eq!(err.to_string(), "User denied Geolocation");
    }
}
