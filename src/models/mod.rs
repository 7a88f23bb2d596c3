pub mod day_bucket;
pub mod duty_status;
pub mod schedule_entry;
pub mod trip;

pub use day_bucket::DayBucket;
pub use duty_status::DutyStatus;
pub use schedule_entry::ScheduleEntry;
pub use trip::{Trip, TripResponse};
