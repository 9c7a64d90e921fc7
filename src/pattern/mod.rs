//! Pattern matching: locating a short template anywhere in a data window by
//! scanning circular time alignments. Only the best score is surfaced, not
//! the alignment that produced it, which is enough for accept/reject
//! decisions against a score threshold.

mod matcher;

pub use matcher::match_score;
