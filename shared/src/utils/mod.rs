//! Utility functions

pub mod masking;

pub use masking::{mask_email, mask_token};
