//! Infrastructure module

pub mod email;
pub mod http;
