//! Background services for async operations.
//!
//! Services run blocking work on tokio's blocking pool and are driven with
//! `Task::perform`.

pub mod database;
