//! Cooperative single-threaded scheduling: virtual clock and timers.

pub(crate) mod scheduler;
