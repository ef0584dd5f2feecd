//! Terminal hand explorer: deal seeded joker pools and inspect every classifier.

pub mod app;
pub mod controller;
pub mod ui;
