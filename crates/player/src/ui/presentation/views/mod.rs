//! Full-page views

pub mod detail_view;
pub mod home_view;
