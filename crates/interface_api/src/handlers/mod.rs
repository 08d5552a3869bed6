//! Request handlers

pub mod advisory;
pub mod guidance;
pub mod health;
pub mod will;
