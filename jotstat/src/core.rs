// src/core.rs
pub mod aggregate;
pub mod cancel;
pub mod entry;
pub mod pipeline;
pub mod reffreq;
pub mod report;
pub mod scanner;
pub mod walker;
