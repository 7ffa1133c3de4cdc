//! Domain Services
//!
//! Pure generation logic. No service here touches the file system directly;
//! reads go through the `PropertyLoader` port.

mod aggregator;
mod emitter;
mod staleness;

pub use aggregator::{aggregate, SourceSet};
pub use emitter::{constants_for, render};
pub use staleness::should_regenerate;
