pub mod config;
pub mod export;
pub mod hover;
pub mod map;
pub mod render;
pub mod summary;
pub mod timeline;
