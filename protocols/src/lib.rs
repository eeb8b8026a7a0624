//! Wire formats spoken by the scanner.
//!
//! * [`geo`]: the JSON body returned by the geolocation service.

pub mod geo;
