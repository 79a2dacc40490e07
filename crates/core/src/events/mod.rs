//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events
//! after successful domain mutations. The embedding shell implements the
//! sink to translate domain events into platform-specific effects.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
