//! Vector representations of sentences
//!
//! Sparse TF-IDF vectors shared by the TF-IDF and TextRank scorers.

pub mod space;
pub mod sparse;

pub use space::{VectorSpace, VectorSpaceBuilder, DEFAULT_MAX_FEATURES};
pub use sparse::SparseVector;
