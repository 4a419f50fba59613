//! Browser binding for the location capability, via `navigator.geolocation`.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Geolocation, Position, PositionError};

use crate::error::GeolocationError;
use crate::source::{PositionCallback, PositionSource};
use crate::state::Location;

/// [`PositionSource`] backed by the browser's Geolocation API.
///
/// This is the default source on wasm targets.
#[derive(Default)]
pub struct BrowserGeolocation;

impl BrowserGeolocation {
    pub fn new() -> Self {
        Self
    }

    fn geolocation() -> Option<Geolocation> {
        web_sys::window()?.navigator().geolocation().ok()
    }
}

impl PositionSource for BrowserGeolocation {
    fn available(&self) -> bool {
        Self::geolocation().is_some()
    }

    fn current_position(&self, resolve: PositionCallback) {
        let Some(geolocation) = Self::geolocation() else {
            resolve(Err(GeolocationError::NotSupported));
            return;
        };

        // The browser settles the request through exactly one of the two
        // callbacks. Both closures share the single FnOnce through this slot,
        // so whichever fires takes it and the other becomes a no-op.
        let resolve = Rc::new(Cell::new(Some(resolve)));

        let on_success = {
            let resolve = resolve.clone();
            Closure::wrap(Box::new(move |position: Position| {
                if let Some(resolve) = resolve.take() {
                    let coords = position.coords();
                    resolve(Ok(Location {
                        latitude: coords.latitude(),
                        longitude: coords.longitude(),
                    }));
                }
            }) as Box<dyn FnMut(Position)>)
        };

        let on_error = {
            let resolve = resolve.clone();
            Closure::wrap(Box::new(move |error: PositionError| {
                if let Some(resolve) = resolve.take() {
                    resolve(Err(GeolocationError::Platform(error.message())));
                }
            }) as Box<dyn FnMut(PositionError)>)
        };

        if let Err(err) = geolocation.get_current_position_with_error_callback(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
        ) {
            tracing::error!(?err, "failed to issue geolocation request");
            if let Some(resolve) = resolve.take() {
                resolve(Err(GeolocationError::Platform(format!("{err:?}"))));
            }
            return;
        }

        // Keep the closures alive for the browser; it calls one of them once.
        on_success.forget();
        on_error.forget();
    }
}
