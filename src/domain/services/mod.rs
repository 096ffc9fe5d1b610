pub mod configurator;
pub mod currency;
pub mod payload;
pub mod schedule;
