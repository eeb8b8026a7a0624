pub mod geo;
pub mod host;
