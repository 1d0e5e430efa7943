//! Core of the Garden Value Calculator
//!
//! Plant catalog, catalog search, harvest valuation and the capped
//! calculation history. Shared between native consumers and the browser
//! (via WASM).

pub mod calculator;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod history;
pub mod models;
pub mod types;
pub mod validation;
pub mod valuation;

pub use calculator::*;
pub use catalog::*;
pub use self::config::*;
pub use error::*;
pub use filter::*;
pub use history::*;
pub use models::*;
pub use types::*;
pub use validation::*;
pub use valuation::*;
