//! Inventory domain module
//!
//! Coffees on the shelf and how much of each is left.

mod entity;

pub use entity::{Coffee, NewCoffee};
