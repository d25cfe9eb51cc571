//! Adapter implementations of the workflow ports.

mod enqueue;
mod log_mailer;
pub mod memory;
pub mod postgres;

pub use enqueue::ReminderEnqueueSink;
pub use log_mailer::LogMailer;
