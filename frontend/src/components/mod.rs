pub mod design_system;
pub mod layout;

// Pages
pub mod destinations;
pub mod guides;
pub mod home;
pub mod map;
pub mod not_found;
pub mod photos;
pub mod timeline;
