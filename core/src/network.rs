//! Production adapters for the traits in [`crate::ports`].

pub mod ftp;
pub mod geo;
pub mod resolver;
