//! # ftpsweep engine
//!
//! Finds FTP servers that accept anonymous logins.
//!
//! * **[`scanner`]**: the concurrent scan engine (dispatcher, per-host probe,
//!   aggregator).
//! * **[`ports`]**: traits the engine talks through. Everything that touches
//!   the network sits behind one of them.
//! * **[`network`]**: the production implementations of those traits.
//! * **[`hosts`]** and **[`sink`]**: the host list going in and the findings
//!   log going out.

pub mod hosts;
pub mod network;
pub mod ports;
pub mod scanner;
pub mod sink;
