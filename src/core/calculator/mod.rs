pub mod timeline;
pub mod worked;
