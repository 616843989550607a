//! Boundary resolution for brace-delimited languages.
//!
//! Front ends whose syntax tree does not give a usable closing line ask the
//! [`BoundaryResolver`] to find it by balancing braces in the raw text. The
//! scanner ignores braces inside string, character, text-block and comment
//! literals. When the text ends before the braces balance (for example when
//! only a fragment of the file is available) the resolver falls back to the
//! per-kind [`DefaultSpans`] policy and marks the result as estimated.

mod scanner;
mod spans;


pub use scanner::BoundaryResolver;
pub use spans::DefaultSpans;
