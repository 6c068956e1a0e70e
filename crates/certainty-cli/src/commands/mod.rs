//! CLI command implementations

pub mod diagnose;
pub mod kb;
pub mod levels;
pub mod rules;

use std::path::PathBuf;

use certainty_engine::{builtin, load_knowledge_base, CertaintyEngine, KnowledgeBase};

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::OutputFormat;

/// Settings resolved from flags, environment and the config file.
pub struct Context {
    pub config: CliConfig,
    pub kb_path: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Context {
    pub fn new(config: CliConfig, kb_flag: Option<PathBuf>, format: OutputFormat) -> Self {
        let kb_path = kb_flag.or_else(|| config.knowledge_base.clone());
        Self {
            config,
            kb_path,
            format,
        }
    }

    /// The selected knowledge base, or the bundled quail one.
    pub fn knowledge_base(&self) -> CliResult<KnowledgeBase> {
        match &self.kb_path {
            Some(path) => Ok(load_knowledge_base(path)?),
            None => Ok(builtin::quail_breeding()),
        }
    }

    pub fn engine(&self) -> CliResult<CertaintyEngine> {
        Ok(CertaintyEngine::with_config(
            self.knowledge_base()?,
            self.config.engine.clone(),
        ))
    }
}
