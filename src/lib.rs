//! Lights Out: a grid of lights, a toggle, and a win when every light is off.
//!
//! [`core`] holds the board model. [`console_interface`] is a terminal front
//! end that only translates keys into coordinates and draws what the model
//! reports.

pub mod console_interface;
pub mod core;
pub mod models;

#[cfg(test)]
mod test;
