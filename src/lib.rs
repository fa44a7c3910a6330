//! Finds every word of a text document that is not in a keyword list and
//! records the line and field position of each occurrence.
//!
//! The pipeline is `keywords::load` + `Document::load`, then
//! `indexer::index`, then `report::write`. [`analyzer::Analyzer`] runs all of
//! it for three file paths.

pub mod analyzer;
pub mod document;
pub mod error;
pub mod indexer;
pub mod keywords;
pub mod report;
pub mod tokenizer;

pub use analyzer::{analyze, AnalysisObserver, AnalysisSummary, Analyzer, LogObserver, Stage};
pub use error::{Error, Result};
pub use indexer::{FrequencyIndex, Occurrence};
