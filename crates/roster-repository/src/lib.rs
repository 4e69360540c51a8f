//! # Roster Repository
//!
//! Persistence layer for Roster: the `UserRepository` trait and its MySQL
//! implementation backed by an SQLx connection pool.

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;
