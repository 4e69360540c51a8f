//! # Roster Security
//!
//! Password hashing for Roster. Passwords are stored only as salted,
//! adaptive one-way hashes; no verification endpoint exists, but the
//! hasher's check function is part of the interface.

pub mod password;

pub use password::*;
