//! Map scene model for Arrival.
//!
//! Describes what the external map should show (view, markers with
//! popups, route line layers) without depending on any particular map
//! renderer. A [`MapSurface`] implementation turns these into calls on
//! the real map; [`MapScene`] keeps track of what has been placed so
//! layers are replaced rather than duplicated.

pub mod layer;
pub mod marker;
pub mod scene;
pub mod surface;

pub use layer::{LineLayer, LineStyle};
pub use marker::{driver_marker, site_markers, Marker, Popup, PopupImage, DRIVER_MARKER_ID};
pub use scene::MapScene;
pub use surface::{MapSurface, MapView};
