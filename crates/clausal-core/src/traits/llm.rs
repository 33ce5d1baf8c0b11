use crate::errors::ClausalResult;

/// Optional remote-LLM collaborator used as a supplementary analysis
/// path. The rule-based synthesizer must produce correct decisions with
/// this collaborator absent or failing.
pub trait ILlmAnalyzer: Send + Sync {
    fn analyze(&self, prompt: &str) -> ClausalResult<String>;
}
