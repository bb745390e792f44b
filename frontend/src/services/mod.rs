pub mod scroll_service;
