//! # Domain Models
//!
//! Configuration types shared by every reference application.
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple helpers.

pub mod config;
pub mod constants;
