//! # Roster Service
//!
//! Business logic service layer for Roster. Translates API requests into
//! repository operations, hashing passwords on the way in.

pub mod dto;
pub mod user_service;
mod user_service_impl;

pub use dto::*;
pub use user_service::*;
pub use user_service_impl::*;
