//! UI components for the chart viewer.

pub mod charts;
pub mod tab_bar;
