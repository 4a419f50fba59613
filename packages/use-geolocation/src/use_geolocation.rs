use std::ops::Deref;

use dioxus_core::prelude::*;
use dioxus_signals::*;
use futures_channel::oneshot;

use crate::error::GeolocationError;
use crate::source::PositionSource;
use crate::state::{GeolocationState, Location};

/// Ask the host platform for the device's current position, once.
///
/// The request fires on first render and never again for the lifetime of the
/// component instance; the only way to retry is to remount. The returned
/// handle starts out loading and settles into exactly one terminal state,
/// either a position or an error message.
///
/// ```rust,no_run
/// use dioxus::prelude::*;
/// use dioxus_use_geolocation::use_geolocation;
///
/// fn app() -> Element {
///     let geolocation = use_geolocation();
///
///     if geolocation.loading() {
///         return rsx! { p { "Locating…" } };
///     }
///
///     match (geolocation.location(), geolocation.error()) {
///         (Some(location), _) => rsx! {
///             p { "You are at {location.latitude}, {location.longitude}" }
///         },
///         (_, Some(error)) => rsx! { p { "{error}" } },
///         _ => unreachable!("a settled request has a location or an error"),
///     }
/// }
/// ```
///
/// On wasm this talks to `navigator.geolocation`; everywhere else the
/// capability is reported as unsupported.
#[must_use]
pub fn use_geolocation() -> UseGeolocation {
    #[cfg(target_arch = "wasm32")]
    return use_geolocation_with(crate::web::BrowserGeolocation::new());

    #[cfg(not(target_arch = "wasm32"))]
    return use_geolocation_with(crate::source::Unsupported);
}

/// [`use_geolocation`], but with an explicit [`PositionSource`].
///
/// This is the seam for tests and for embedders that bring their own
/// platform binding: hand in a deterministic double instead of relying on
/// the ambient browser global.
#[must_use]
pub fn use_geolocation_with(source: impl PositionSource + 'static) -> UseGeolocation {
    let state = use_hook(move || {
        if !source.available() {
            tracing::debug!("no location capability on this platform");
            let mut state = GeolocationState::pending();
            state.resolve(Err(GeolocationError::NotSupported));
            return Signal::new(state);
        }

        let mut state = Signal::new(GeolocationState::pending());

        // The source hands its one outcome to this channel. The receiving
        // task is owned by the component's scope, so unmounting cancels it
        // and a late platform callback sends into a closed channel, which is
        // a no-op rather than a write into a dead component.
        let (tx, rx) = oneshot::channel();
        source.current_position(Box::new(move |outcome| {
            let _ = tx.send(outcome);
        }));
        tracing::debug!("requested current position");

        spawn(async move {
            if let Ok(outcome) = rx.await {
                tracing::debug!(ok = outcome.is_ok(), "geolocation request settled");
                state.with_mut(|state| state.resolve(outcome));
            }
        });

        state
    });

    UseGeolocation { state }
}

/// Handle to a one-shot geolocation request.
///
/// A thin `Copy` wrapper over the request's state signal. Reading through it
/// subscribes the component, so every transition re-renders the embedder.
#[derive(Clone, Copy)]
pub struct UseGeolocation {
    state: Signal<GeolocationState>,
}

impl UseGeolocation {
    /// The resolved position, if the request has succeeded.
    pub fn location(&self) -> Option<Location> {
        self.state.read().location
    }

    /// The failure message, if the request has failed.
    ///
    /// Either the platform's own message, verbatim, or the fixed
    /// unsupported-platform message. Never present together with a location.
    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// Is the request still in flight?
    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    /// The full state as a read-only signal.
    pub fn state(&self) -> ReadOnlySignal<GeolocationState> {
        self.state.into()
    }
}

impl From<UseGeolocation> for ReadOnlySignal<GeolocationState> {
    fn from(val: UseGeolocation) -> Self {
        val.state.into()
    }
}

impl Readable for UseGeolocation {
    type Target = GeolocationState;
    type Storage = UnsyncStorage;

    #[track_caller]
    fn try_read_unchecked(
        &self,
    ) -> Result<ReadableRef<'static, Self>, generational_box::BorrowError> {
        self.state.try_read_unchecked()
    }

    #[track_caller]
    fn try_peek_unchecked(
        &self,
    ) -> Result<ReadableRef<'static, Self>, generational_box::BorrowError> {
        self.state.try_peek_unchecked()
    }
}

/// Allow calling the handle with `geolocation()` syntax to clone the state.
impl Deref for UseGeolocation {
    type Target = dyn Fn() -> GeolocationState;

    fn deref(&self) -> &Self::Target {
        unsafe { Readable::deref_impl(self) }
    }
}
