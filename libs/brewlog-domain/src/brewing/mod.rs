//! Brewing domain module
//!
//! This module contains the brew log: what a logged brew is, how a brew is
//! recorded against the inventory, and the statistics drawn from the log.

mod entity;
mod error;
mod service;
mod stats;
mod timer;

pub use entity::{BrewLogEntry, BrewRequest, RecordedBrew};
pub use error::{BrewLogError, Result};
pub use service::{BrewService, ServiceConfig};
pub use stats::BrewStats;
pub use timer::{format_brew_time, parse_brew_time};
