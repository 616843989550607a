//! Language front ends that turn source text into structures.
//!
//! Each supported language has a [`StructureExtractor`] built on its
//! tree-sitter grammar. Python definitions carry exact spans; Java
//! declarations get their end lines from the boundary resolver.

mod java;
mod python;
mod tree;


pub use java::JavaExtractor;
pub use python::PythonExtractor;

use crate::boundary::DefaultSpans;
use crate::structure::FileStructures;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Why a file's structures could not be extracted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The tree-sitter grammar could not be loaded.
    #[error("grammar unavailable: {0}")]
    Language(String),

    /// The parser gave up without producing a tree.
    #[error("parser produced no syntax tree")]
    NoTree,

    #[error("syntax error at line {line}")]
    Syntax { line: usize },
}

/// Produces the structures of one source file.
pub trait StructureExtractor {
    fn extract(&self, source: &str) -> Result<FileStructures, ExtractError>;
}

/// Languages with a structure front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    Java,
}

impl Language {
    /// Detect the language from a file extension.
    pub fn from_path(path: &str) -> Option<Self> {
        match Path::new(path).extension()?.to_str()? {
            "py" | "pyi" => Some(Language::Python),
            "java" => Some(Language::Java),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Java => "java",
        }
    }

    pub fn extractor(&self, spans: DefaultSpans) -> Box<dyn StructureExtractor> {
        match self {
            Language::Python => Box::new(PythonExtractor),
            Language::Java => Box::new(JavaExtractor::new(spans)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extract the structures of `source` with the front end for `language`.
pub fn extract(
    language: Language,
    source: &str,
    spans: DefaultSpans,
) -> Result<FileStructures, ExtractError> {
    language.extractor(spans).extract(source)
}
