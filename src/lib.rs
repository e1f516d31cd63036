//! Covmark - Cobertura coverage report converter
//!
//! A library for turning Cobertura XML coverage reports into Markdown
//! summaries:
//! - Streaming Cobertura XML parsing via `quick-xml`
//! - Per-file coverage records sorted by filename
//! - Fixed Markdown summary table rendering

pub mod coverage;
pub mod report;

pub use coverage::{parse_cobertura, parse_cobertura_string, ClassCoverage, CoverageData};
pub use report::{render_markdown, write_report};
