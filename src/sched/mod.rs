//! Cooperative multitasking
//!
//! Tasks are plain objects stepped in a fixed order, once per tick, on a single
//! thread. A step always runs to completion before the next task is stepped, so
//! shared game state needs no locking. The order of the task list is the causal
//! order of effects inside one tick.

pub mod clock;
pub mod delay;
pub mod scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use delay::Delay;
pub use scheduler::{RoundState, Scheduler, Task};
