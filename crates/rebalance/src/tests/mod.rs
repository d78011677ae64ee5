//! End-to-end tests for the command-line pipeline
//!
//! Tests are organized by topic:
//! - `pipeline` - Config file, CSV prices, both analyses and the console report
