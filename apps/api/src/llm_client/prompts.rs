// Shared prompt constants. Each service that needs LLM calls defines its own
// prompts.rs alongside it; this file contains cross-cutting fragments.

/// System prompt applied to every completion call.
pub const RESUME_ASSISTANT_SYSTEM: &str = "You are an expert resume assistant.";
