pub mod applier;
pub mod availability;
pub mod cli;
pub mod context;
pub mod directory;
pub mod edit;
pub mod fatigue;
pub mod models;
pub mod persist;
pub mod schedule;
pub mod timetable;
pub mod transaction;
pub mod types;
pub mod workload;
