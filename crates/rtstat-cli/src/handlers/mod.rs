pub mod compare;
pub mod config;
pub mod load_session;
pub mod participants;
pub mod report;
pub mod summary;
