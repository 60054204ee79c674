pub mod engine;
pub mod string_set;
pub mod mismatch_matrix;
pub mod partition;
