pub mod admin;
pub mod aggregate;
pub mod auth;
pub mod backup;
pub mod calculator;
pub mod correct;
pub mod history;
pub mod listing;
pub mod log;
pub mod seed;
pub mod stamp;
