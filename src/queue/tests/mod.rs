//! Test modules for the queue component
//!
//! Tests are organized by functional area: core contract operations,
//! lifecycle transitions, stats tracking, the monitor loop protocol, and
//! concurrent access.

mod concurrent;
