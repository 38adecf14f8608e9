//! Foundation types for termfolio.
//!
//! Platform-agnostic data shared by the interpreter and the front end:
//! error types, themes, input events, configuration, and the portfolio
//! content records.

pub mod config;
pub mod error;
pub mod input;
pub mod portfolio;
pub mod theme;
