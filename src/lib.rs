//! Language identification and conversion for code-mixed Hinglish and
//! Marathlish text.
//!
//! Text flows through [`tokenizer`] → [`classifier`] → [`aggregator`] and
//! [`converter`], and [`processor`] assembles the final [`AnalysisResult`].
//! [`server`] exposes the pipeline over HTTP; [`client`] talks to it.

pub mod aggregator;
pub mod classifier;
pub mod client;
pub mod config;
pub mod converter;
pub mod error;
pub mod lexicon;
pub mod processor;
pub mod retry;
pub mod server;
pub mod tokenizer;

pub use error::InvalidInput;
pub use processor::{AnalysisResult, Processor};
