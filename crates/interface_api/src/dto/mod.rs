//! Request and response bodies

pub mod advisory;
pub mod will;
