// Experiment pipeline: variant expansion, response acquisition, scoring,
// best-effort persistence. All LLM calls go through llm_client via the
// Responder trait — no direct Gemini calls here.

pub mod expand;
pub mod handlers;
pub mod pipeline;
pub mod responder;
pub mod scoring;
pub mod store;
