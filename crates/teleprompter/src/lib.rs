//! Timed reveal of caption chunks, three lines at a time.
//!
//! [`Teleprompter`] is the cursor state machine and can be driven by hand.
//! [`Scheduler`] drives one on a fixed cadence inside a tokio task and
//! publishes every frame on a watch channel.

mod config;
mod prompter;
mod scheduler;
mod view;

pub use config::Cadence;
pub use prompter::{Teleprompter, TeleprompterState};
pub use scheduler::{Scheduler, SchedulerSnapshot};
pub use view::{Segment, TeleprompterFrame, highlighted_line, plain_line};
