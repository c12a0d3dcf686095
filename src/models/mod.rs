pub mod day_summary;
pub mod identity;
pub mod role;
pub mod stamp_event;
pub mod stamp_kind;
pub mod store;
pub mod user;
