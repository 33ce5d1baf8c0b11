//! The analysis pipeline facade.
//!
//! One synchronous call chain per request: chunk → parse → retrieve →
//! decide. The only shared state is the injected embedding model holder
//! and the per-document index cache inside the retrieval engine; both
//! are safe under concurrent requests.

use std::sync::Arc;

use clausal_core::config::ClausalConfig;
use clausal_core::errors::ClausalResult;
use clausal_core::models::{AnalysisResponse, Decision, Document, ParsedQuery, RetrievalResult};
use clausal_core::traits::{ILlmAnalyzer, ITextExtractor};
use clausal_decision::{llm, DecisionSynthesizer};
use clausal_embeddings::ModelHolder;
use clausal_ingest::DocumentProcessor;
use clausal_query::QueryParser;
use clausal_retrieval::RetrievalEngine;
use tracing::{info, warn};

use crate::response;

pub struct AnalysisPipeline {
    processor: DocumentProcessor,
    parser: QueryParser,
    engine: RetrievalEngine,
    synthesizer: DecisionSynthesizer,
    analyzer: Option<Arc<dyn ILlmAnalyzer>>,
}

impl std::fmt::Debug for AnalysisPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisPipeline")
            .field("analyzer_present", &self.analyzer.is_some())
            .finish()
    }
}

impl AnalysisPipeline {
    /// Build a pipeline from validated configuration. The model holder
    /// is created here and shared with the retrieval engine; the model
    /// itself loads lazily on first use.
    pub fn new(config: ClausalConfig) -> ClausalResult<Self> {
        config.validate()?;
        let holder = Arc::new(ModelHolder::new(config.embedding.clone()));
        Self::with_model_holder(config, holder)
    }

    /// Build a pipeline around an existing model holder. Callers that
    /// run several pipelines share one holder so the model loads once.
    pub fn with_model_holder(
        config: ClausalConfig,
        holder: Arc<ModelHolder>,
    ) -> ClausalResult<Self> {
        config.validate()?;
        Ok(Self {
            processor: DocumentProcessor::new(config.chunker.clone())?,
            parser: QueryParser::new(),
            engine: RetrievalEngine::new(&config.retrieval, holder),
            synthesizer: DecisionSynthesizer::new(config.decision.clone()),
            analyzer: None,
        })
    }

    /// Attach the optional LLM collaborator. The rule-based path is
    /// unaffected; the analyzer only adds commentary to responses.
    pub fn with_llm_analyzer(mut self, analyzer: Arc<dyn ILlmAnalyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    /// Build a document from already-extracted plain text.
    pub fn process_document(&self, text: &str) -> Document {
        self.processor.process(text)
    }

    /// Build a document from raw bytes through an external extractor.
    ///
    /// Extraction failure is not a pipeline failure: it degrades to a
    /// zero-chunk document, which downstream stages handle explicitly.
    pub fn ingest(
        &self,
        raw: &[u8],
        format_hint: &str,
        extractor: &dyn ITextExtractor,
    ) -> Document {
        match extractor.extract(raw, format_hint) {
            Ok(text) => self.process_document(&text),
            Err(e) => {
                warn!(format_hint, error = %e, "extraction failed, continuing with empty document");
                self.process_document("")
            }
        }
    }

    /// Parse a free-text query into its structured form.
    pub fn parse_query(&self, text: &str) -> ParsedQuery {
        self.parser.parse(text)
    }

    /// Rank the document's chunks against the query.
    pub fn retrieve(
        &self,
        document: &Document,
        query: &ParsedQuery,
    ) -> ClausalResult<RetrievalResult> {
        self.engine.retrieve(document, query)
    }

    /// Synthesize a decision from the parsed query and retrieval.
    pub fn decide(&self, query: &ParsedQuery, retrieval: &RetrievalResult) -> Decision {
        self.synthesizer.decide(query, retrieval)
    }

    /// Run the whole chain and assemble the response contract.
    pub fn analyze(&self, document_text: &str, query_text: &str) -> ClausalResult<AnalysisResponse> {
        let document = self.process_document(document_text);
        let query = self.parse_query(query_text);
        let retrieval = self.retrieve(&document, &query)?;

        let decision = if document.is_empty() {
            self.synthesizer.no_content_decision()
        } else {
            self.decide(&query, &retrieval)
        };

        let commentary = self
            .analyzer
            .as_deref()
            .and_then(|analyzer| llm::commentary(analyzer, &query, &retrieval));

        info!(
            document = %document.id,
            method = %retrieval.method,
            status = %decision.status,
            "analysis complete"
        );

        Ok(response::assemble(query, decision, retrieval, commentary))
    }
}
