//! Rise, set and twilight events for the Sun and Moon.
//!
//! The altitude of a body is sampled once an hour across a local day and a
//! parabola is fitted through each run of three samples; threshold crossings
//! are the parabola's roots.

pub mod altitude;
pub mod location;
pub mod quadratic;
pub mod rise_set;
pub mod threshold;

pub use altitude::{horizontal_position, local_hour_angle, sin_altitude, sin_altitude_of};
pub use location::GeographicLocation;
pub use quadratic::{DEGENERATE_CURVATURE, QuadraticFit, Roots};
pub use rise_set::{RiseEvent, body_events, rise_set_events};
pub use threshold::RiseThreshold;
