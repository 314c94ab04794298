//! Lexicon module: language labels, word lists and conversion tables.
//!
//! # Architecture
//!
//! - `label`: The `Label` type assigned to each word, with its two wire spellings
//! - `data`: Built-in transliterated word lists and conversion pairs
//! - `registry`: The immutable, process-wide `Lexicon` built from `data`
//!
//! # Example
//!
//! ```rust
//! use codemix::lexicon::{Label, Lexicon};
//!
//! let lexicon = Lexicon::global();
//! assert!(lexicon.contains(Label::Hindi, "hai"));
//! assert_eq!(lexicon.translate(Label::Hindi, Label::English, "naam"), Some("name"));
//! ```

mod data;
mod label;
mod registry;

pub use label::{title_case, Label};
pub use registry::{ConversionEntry, Lexicon, LexiconExtension};
