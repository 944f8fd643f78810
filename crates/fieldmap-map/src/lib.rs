//! Field mapping inference.
//!
//! Proposes target schema paths for unmapped rows of a [`FieldTable`] by
//! matching trailing path segments against rows that already have a target:
//!
//! - [`infer`]: strict engine, commits a target only when exactly one
//!   compatible candidate exists at the longest matching suffix.
//! - [`rank`]: relaxed engine, scores every candidate at every suffix length
//!   and falls back to an identifier search when nothing matches.
//! - [`scaffold`]: lists mapping declarations still missing from a mapper.
//!
//! Everything here is pure; loading and writing live in `fieldmap-ingest`
//! and `fieldmap-report`.
//!
//! [`FieldTable`]: fieldmap_model::FieldTable

#![deny(unsafe_code)]

pub mod index;
pub mod path;
pub mod patterns;
pub mod relaxed;
pub mod scaffold;
pub mod score;
pub mod strict;

pub use index::SuffixIndex;
pub use path::{is_list_path, normalize_path, simple_type};
pub use relaxed::{Ranking, rank};
pub use scaffold::{Declaration, scaffold};
pub use score::{CandidateScore, ScoreComponent};
pub use strict::{InferenceOutcome, InferenceReport, InferredPair, infer};
