//! Reusable UI components

pub mod home;
pub mod intro_overlay;
pub mod profile_select;
