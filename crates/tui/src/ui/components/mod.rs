//! Reusable rendering components.

pub mod dropdown;
pub mod profile_card;
