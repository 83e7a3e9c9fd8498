//! Utility functions shared across the analysis pipeline.

pub mod stats;
