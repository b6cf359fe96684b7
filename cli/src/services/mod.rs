//! Conversion services: output naming and the end-to-end pipeline.

pub mod convert;
pub mod output;
