/// Decision subsystem errors.
///
/// The rule-based synthesizer itself is total and never errors; this
/// covers only the optional LLM collaborator path.
#[derive(Debug, thiserror::Error)]
pub enum DecisionError {
    #[error("llm analyzer unavailable: {reason}")]
    AnalyzerUnavailable { reason: String },
}
