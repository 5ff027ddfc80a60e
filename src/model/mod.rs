//! Domain models passed between the event handlers and the service layer.
//!
//! Gateway payloads are converted into these types at the handler boundary so the
//! services only see the fields they act on.

pub mod pin;
pub mod reaction;
pub mod role;
