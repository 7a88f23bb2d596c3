pub mod grouping;
pub mod session;
pub mod summary;
pub mod zone;
