#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Default [`parley_core::TextPipeline`] implementation.
//!
//! Everything here is rule-based and dictionary-free: a whitespace and
//! punctuation tokenizer, a suffix-rule lemmatizer with an irregular-forms
//! table, a lexicon-driven part-of-speech tagger with root-verb detection,
//! and a capitalization/gazetteer entity extractor. Good enough for the
//! chat engine's needs without pulling in a model.

pub mod entities;
pub mod lemmatizer;
pub mod pipeline;
pub mod tagger;
pub mod tokenizer;

pub use pipeline::HeuristicPipeline;
