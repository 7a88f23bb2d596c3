pub mod colors;
pub mod formatting;
pub mod table;

pub use formatting::format_date_time;
