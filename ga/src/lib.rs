//! GardenAdvice - season and plant-type garden tips
//!
//! Combines two independent lookups (season tip, plant-type tip) into a
//! short two-line advice string, with a polite fallback line for unknown
//! input. The resolver is a pure function; the `ga` binary wraps it in an
//! interactive prompt session.
//!
//! # Example
//!
//! ```
//! use gardenadvice::advice;
//!
//! let tip = advice::resolve("summer", "flower");
//! assert_eq!(tip.lines().count(), 2);
//! ```

pub mod advice;
pub mod cli;
pub mod config;
pub mod shell;

pub use advice::{PLANT_FALLBACK, PLANT_TYPES, SEASONS, SEASON_FALLBACK, normalize, resolve};
