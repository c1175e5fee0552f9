//! Presentation layer - Dioxus UI components and views

pub mod components;
pub mod handlers;
pub mod state;
pub mod views;
