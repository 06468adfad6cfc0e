//! Reverse geocoding
//!
//! Turns GPS coordinates into free-text administrative area guesses using
//! Nominatim. Failures degrade to "no guess" instead of propagating.

mod nominatim;

pub use nominatim::{AreaGuess, NominatimClient, ReverseGeocoder};
