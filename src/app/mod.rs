//! Application controller and action-level errors.
//!
//! The controller wires user actions (search, detect-current, history
//! replay, copy, export, clear-history) to the validator, lookup client,
//! history store, and presenter, and owns the current-result state for the
//! session.

mod controller;
mod error;

pub use controller::AppController;
pub use error::AppError;
