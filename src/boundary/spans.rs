//! Heuristic span table used when a closing brace cannot be found.

use crate::structure::StructureKind;
use serde::Deserialize;

/// Estimated number of lines after the opening line, per structure kind.
///
/// Only applies when the source is truncated; the resulting boundaries are
/// marked as estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DefaultSpans {
    pub class: usize,
    pub interface: usize,
    #[serde(rename = "enum")]
    pub enumeration: usize,
    pub method: usize,
    pub constructor: usize,
    pub function: usize,
}

impl Default for DefaultSpans {
    fn default() -> Self {
        Self {
            class: 1000,
            interface: 1000,
            enumeration: 100,
            method: 50,
            constructor: 50,
            function: 50,
        }
    }
}

impl DefaultSpans {
    /// The fallback span for a structure kind.
    pub fn span_for(&self, kind: StructureKind) -> usize {
        match kind {
            StructureKind::Class => self.class,
            StructureKind::Interface => self.interface,
            StructureKind::Enum => self.enumeration,
            StructureKind::Method => self.method,
            StructureKind::Constructor => self.constructor,
            StructureKind::Function => self.function,
        }
    }

    /// All entries with their config key, for validation messages.
    pub fn entries(&self) -> [(&'static str, usize); 6] {
        [
            ("class", self.class),
            ("interface", self.interface),
            ("enum", self.enumeration),
            ("method", self.method),
            ("constructor", self.constructor),
            ("function", self.function),
        ]
    }
}
