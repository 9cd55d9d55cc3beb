pub mod catalog;
pub mod generator;
pub mod health;
pub mod schedule;
