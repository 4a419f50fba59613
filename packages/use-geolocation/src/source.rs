use crate::error::GeolocationError;
use crate::state::Location;

/// Completion callback handed to a [`PositionSource`].
///
/// A source invokes this at most once, with either the resolved coordinates
/// or the platform's error. Dropping it without calling it is allowed and
/// leaves the request pending forever, which the hook tolerates.
pub type PositionCallback = Box<dyn FnOnce(Result<Location, GeolocationError>)>;

/// The host platform's location capability, as seen by the hook.
///
/// This is the seam that replaces a direct dependency on the ambient
/// `navigator.geolocation` global: production code plugs in the browser
/// binding, tests plug in a deterministic double.
pub trait PositionSource {
    /// Does the platform expose a location capability at all?
    fn available(&self) -> bool;

    /// Issue exactly one asynchronous "current position" request.
    ///
    /// Only called after [`available`](Self::available) returned `true`. The
    /// crate enforces no timeout of its own; whatever timeout applies is the
    /// platform's default.
    fn current_position(&self, resolve: PositionCallback);
}

/// A source for platforms without any location capability.
///
/// This is the default source on non-web targets, so `use_geolocation()`
/// degrades to the unsupported-platform error instead of failing to compile.
pub struct Unsupported;

impl PositionSource for Unsupported {
    fn available(&self) -> bool {
        false
    }

    fn current_position(&self, resolve: PositionCallback) {
        resolve(Err(GeolocationError::NotSupported));
    }
}
