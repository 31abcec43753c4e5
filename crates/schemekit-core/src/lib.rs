//! # SchemeKit Core
//!
//! Core types, errors, constants, and observer primitives for SchemeKit.
//! Provides the foundation shared by the scheme editor and its hosts:
//! typed errors, the color model, tuning constants, and a small
//! publish-on-change observer layer for UI binding.

pub mod constants;
pub mod error;
pub mod observer;
pub mod types;

pub use error::{Result, SchemeError};
pub use observer::{Dispatcher, Observable, SubscriptionId};
pub use types::Color;
