//! Core modules for MindLens

pub mod lexicon;
pub mod provider;
pub mod inference;
pub mod resolver;
pub mod catalog;
pub mod composer;
pub mod assembler;
pub mod engine;
pub mod api;

pub use lexicon::{LexiconHits, LexiconScorer};
pub use provider::{MoodProvider, SummaryProvider};
pub use inference::{FineTunedClassifier, InferenceClient, Summarizer, ZeroShotClassifier};
pub use resolver::{MoodResolver, Resolution};
pub use composer::{Composition, ReflectionComposer};
pub use assembler::{fallback_summary, OutputAssembler};
pub use engine::InsightEngine;
pub use api::{create_router, run_server};
