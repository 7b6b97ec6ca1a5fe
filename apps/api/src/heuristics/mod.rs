// Local heuristic evaluators: resume feedback, interview questions, answer scoring.
// Deterministic and total; used directly and as the LLM fallback.

pub mod answer;
pub mod feedback;
pub mod questions;
pub mod salient;
