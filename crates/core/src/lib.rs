//! # Timetabler Core
//!
//! Domain types and the timetable generator. Everything in this crate is pure:
//! no network, no disk, no clocks. The catalog is parsed from a string that the
//! host has already loaded, and committing a timetable goes through the
//! [`store::SelectedScheduleStore`] trait implemented elsewhere.
//!
//! ## Pipeline
//!
//! 1. [`generator::adapter`] turns catalog courses into section groups
//! 2. [`generator::enumerator`] walks the cross product of section choices
//! 3. [`generator::validator`] rejects or scores each complete candidate
//! 4. [`generator::ranking`] orders the accepted candidates and applies one

pub mod catalog;
pub mod errors;
pub mod generator;
pub mod models;
pub mod slots;
pub mod store;

pub use catalog::Catalog;
pub use errors::{TimetableError, TimetableResult};
pub use generator::{GeneratorOptions, GeneratorSession};
