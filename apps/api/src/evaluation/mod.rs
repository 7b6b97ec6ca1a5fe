// LLM-backed evaluation with deterministic heuristic fallback.
// All provider calls go through llm_client; heuristics live in crate::heuristics.

pub mod handlers;
pub mod orchestrator;
pub mod prompts;
