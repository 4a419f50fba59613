//! A one-shot geolocation hook for Dioxus
//!
//! [`use_geolocation`] asks the host platform for the device's current
//! position exactly once per component instance and exposes the outcome as
//! three observable fields: the location, an error message, and a loading
//! flag. On the web it wraps `navigator.geolocation.getCurrentPosition`; on
//! every other target it reports the capability as unsupported.
//!
//! ```rust,no_run
//! use dioxus::prelude::*;
//! use dioxus_use_geolocation::use_geolocation;
//!
//! fn app() -> Element {
//!     let geolocation = use_geolocation();
//!
//!     if geolocation.loading() {
//!         return rsx! { p { "Locating…" } };
//!     }
//!
//!     if let Some(error) = geolocation.error() {
//!         return rsx! { p { "{error}" } };
//!     }
//!
//!     let location = geolocation.location().unwrap();
//!     rsx! { p { "{location.latitude}, {location.longitude}" } }
//! }
//! ```
//!
//! The platform capability sits behind the [`PositionSource`] trait, so the
//! hook can be driven by a deterministic double in tests through
//! [`use_geolocation_with`]. There is deliberately no retry, no caching, no
//! watch mode and no position options: one request, one outcome, and a
//! remount is the only way to ask again.

mod error;
mod source;
mod state;
mod use_geolocation;

#[cfg(target_arch = "wasm32")]
mod web;

pub use error::GeolocationError;
pub use source::{PositionCallback, PositionSource, Unsupported};
pub use state::{GeolocationState, Location};
pub use use_geolocation::{use_geolocation, use_geolocation_with, UseGeolocation};

#[cfg(target_arch = "wasm32")]
pub use web::BrowserGeolocation;
