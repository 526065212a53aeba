//! Sentence graph construction and representation
//!
//! This module builds the sentence-similarity graph that TextRank propagates
//! scores over.

pub mod csr;
pub mod similarity;
