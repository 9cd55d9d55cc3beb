/// Catalog search and reference tables
pub mod catalog;
/// Generator session, generation and ranked-timetable navigation
pub mod generator;
/// Stored selected schedules
pub mod schedule;
