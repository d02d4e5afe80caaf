//! Core data model for assembling pie-chart documents.
//!
//! A [chart::PieChart] starts empty, accumulates named series built from
//! category to value mappings, and merges display options contributed by
//! the caller. The assembled document serializes directly into the option
//! object understood by [Apache ECharts]; turning that object into an HTML
//! page is the job of the `pievis-html` crate.
//!
//! [Apache ECharts]: https://echarts.apache.org

#![warn(missing_docs)]

pub mod chart;
pub mod data;
pub mod error;
pub mod options;
pub mod series;
