//! HTML term-rewriting core
//!
//! Two pieces: a pure [`TermRewriter`] implementing the whole-word,
//! case-preserving substitution rule, and a document pipeline that applies
//! it to every text node of a parsed page and re-serializes the result.
//! Both are synchronous, stateless per call, and safe to share across
//! concurrent requests.

pub mod pipeline;
pub mod terms;

pub use pipeline::{rewrite_document, RewrittenDocument};
pub use terms::TermRewriter;
