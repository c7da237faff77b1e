// ATS scoring core: pure, synchronous text computations with no I/O.
// Everything here operates on plain strings already produced by the
// boundaries (PDF extractor, JD extractor) and is safe to call concurrently.

pub mod compare;
pub mod evaluator;
pub mod keywords;

pub use compare::{compare, Comparison, Verdict};
pub use evaluator::{evaluate, Evaluation};
pub use keywords::extract_keywords;
