// ATS engine: tokenizer, JD keyword extraction, keyword-overlap scoring.
// Pure functions; the HTTP surface lives in handlers.rs.

pub mod handlers;
pub mod keywords;
pub mod scorer;
pub mod tokenizer;
