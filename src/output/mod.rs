// src/output/mod.rs
//! Output sink abstraction.
//!
//! All console writing in the crate goes through [`OutputSink`], keeping the
//! channel stubs and user logic free of direct I/O and observable in tests.

mod sink;

pub use sink::{ConsoleSink, MemorySink, OutputSink};
