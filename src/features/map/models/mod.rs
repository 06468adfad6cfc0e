mod marker;

pub use marker::{spread_coinciding, Marker, MarkerKind, MarkerPopup};
