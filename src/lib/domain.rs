//! Domain model

pub mod notifications;
