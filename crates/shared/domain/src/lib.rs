//! # Domain Models
//!
//! Pure types shared by every crate: the catalog [`part::Part`], the [`category::Category`]
//! selector values, configuration structs, and the feature slice registry.
//! Keep it lean: no I/O, networking, or heavy logic.

pub mod category;
pub mod config;
pub mod constants;
pub mod part;
pub mod registry;
