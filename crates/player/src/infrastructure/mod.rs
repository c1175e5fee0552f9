pub mod media;
pub mod platform;
