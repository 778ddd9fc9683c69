//! HTTP routes.

pub mod signup;
pub mod status;
