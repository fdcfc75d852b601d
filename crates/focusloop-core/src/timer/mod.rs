//! Tick-driven timers.
//!
//! Both the cycling session timer and the ad-hoc countdown are instances of
//! the same [`IntervalTimer`]; they never share a tick source or state.

pub mod adhoc;
pub mod cycle;
pub mod interval;

pub use adhoc::{AdHocStatus, AdHocTimer};
pub use cycle::{CycleController, CycleOutcome, Phase, TimerConfig, CYCLES_BEFORE_LONG_BREAK};
pub use interval::IntervalTimer;
