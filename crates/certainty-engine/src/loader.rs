//! Knowledge base loading from TOML, JSON or YAML documents.
//!
//! A document has three arrays, `traits`, `hypotheses` and `rules`:
//!
//! ```toml
//! [[traits]]
//! id = "K01"
//! name = "Bright eyes"
//!
//! [[hypotheses]]
//! id = "P01"
//! name = "Layer"
//!
//! [[rules]]
//! trait_id = "K01"
//! hypothesis_id = "P01"
//! mb = 0.8
//! md = 0.1
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CfError, CfResult};
use crate::knowledge::KnowledgeBase;
use crate::types::{Hypothesis, Rule, Trait};

/// Serialization formats for knowledge base documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> CfResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(CfError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Raw, unvalidated knowledge base contents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBaseDocument {
    #[serde(default)]
    pub traits: Vec<Trait>,
    #[serde(default)]
    pub hypotheses: Vec<Hypothesis>,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl KnowledgeBaseDocument {
    pub fn parse(contents: &str, format: DocumentFormat) -> CfResult<Self> {
        let parse_error = |message: String| CfError::Parse {
            format: format.name(),
            message,
        };
        match format {
            DocumentFormat::Toml => toml::from_str(contents).map_err(|e| parse_error(e.to_string())),
            DocumentFormat::Json => {
                serde_json::from_str(contents).map_err(|e| parse_error(e.to_string()))
            }
            DocumentFormat::Yaml => {
                serde_yaml::from_str(contents).map_err(|e| parse_error(e.to_string()))
            }
        }
    }

    pub fn render(&self, format: DocumentFormat) -> CfResult<String> {
        let render_error = |message: String| CfError::Parse {
            format: format.name(),
            message,
        };
        match format {
            DocumentFormat::Toml => toml::to_string(self).map_err(|e| render_error(e.to_string())),
            DocumentFormat::Json => {
                serde_json::to_string_pretty(self).map_err(|e| render_error(e.to_string()))
            }
            DocumentFormat::Yaml => {
                serde_yaml::to_string(self).map_err(|e| render_error(e.to_string()))
            }
        }
    }

    /// Validate the document into a usable knowledge base.
    pub fn into_knowledge_base(self) -> CfResult<KnowledgeBase> {
        Ok(KnowledgeBase::new(self.traits, self.hypotheses, self.rules)?)
    }
}

impl From<&KnowledgeBase> for KnowledgeBaseDocument {
    fn from(kb: &KnowledgeBase) -> Self {
        Self {
            traits: kb.traits().to_vec(),
            hypotheses: kb.hypotheses().to_vec(),
            rules: kb.rules().to_vec(),
        }
    }
}

/// Parse and validate a knowledge base from a string.
pub fn parse_knowledge_base(contents: &str, format: DocumentFormat) -> CfResult<KnowledgeBase> {
    KnowledgeBaseDocument::parse(contents, format)?.into_knowledge_base()
}

/// Read, parse and validate a knowledge base file; the format follows the
/// file extension.
pub fn load_knowledge_base(path: impl AsRef<Path>) -> CfResult<KnowledgeBase> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path)?;
    let kb = parse_knowledge_base(&contents, format)?;
    debug!(
        path = %path.display(),
        traits = kb.traits().len(),
        hypotheses = kb.hypotheses().len(),
        rules = kb.rules().len(),
        "Loaded knowledge base"
    );
    Ok(kb)
}
