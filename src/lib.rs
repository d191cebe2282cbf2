// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod frequency;
pub mod persistence;
pub use crate::core::engine::PortmanteauEngine;
pub use crate::core::types::CandidatePair;
pub use crate::error::{PortmanteauError, Result};
