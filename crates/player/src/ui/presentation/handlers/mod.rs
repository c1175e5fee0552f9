pub mod back_navigation;
pub mod link_activation;
pub mod page_title;

pub use back_navigation::back_action;
pub use link_activation::activate_link;
pub use page_title::PageTitleGuard;
