//! Sun and Moon positions, lunar phase and daily rise/set almanacs.
//!
//! The numerical work lives in the member crates; this crate ties them to
//! civil calendar dates and site catalogs so front-ends (the CLI today) can
//! share one entry point.

pub mod almanac;
pub mod calendar;

pub use lunisolar_bodies as bodies;
pub use lunisolar_config as config;
pub use lunisolar_core::{constants, matrix, time, units, vector};
pub use lunisolar_events as events;
pub use lunisolar_export as export;

/// Returns the version of the library for smoke tests and `--version` banners.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
