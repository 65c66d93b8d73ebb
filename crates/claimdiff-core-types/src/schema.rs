//! Canonical event names for structured logging
//!
//! Every operation boundary logged by the loader and the diff engine carries
//! one of these values in its `event` field.

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
