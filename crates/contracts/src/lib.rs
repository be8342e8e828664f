//! Wire types shared between the UI and the fights REST service.

pub mod domain;
