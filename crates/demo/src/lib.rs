//! Demo driver: builds the sample order and renders its report.

pub mod config;
pub mod report;
pub mod sample;

pub use config::{DemoConfig, ReportFormat};
pub use report::{TextReport, render};
pub use sample::sample_order;
