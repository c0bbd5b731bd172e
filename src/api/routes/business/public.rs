//! Public types for the business API
pub use crate::core::{BusinessProfile, Product};
