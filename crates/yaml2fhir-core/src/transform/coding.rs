//! Code shorthand parsing
//!
//! Converts `SYSTEM#code display text` into a [`Coding`]. The system part may
//! be a short alias (`LOINC`, `SCT`, ...) resolved through
//! [`CodeSystemAliases`], or a full URI which is used verbatim.
//!
//! ```rust
//! use yaml2fhir_core::transform::{CodeSystemAliases, parse_code};
//!
//! let aliases = CodeSystemAliases::builtin();
//! let coding = parse_code("LOINC#12345-6 Fake LOINC Code", &aliases).unwrap();
//!
//! assert_eq!(coding.system.as_deref(), Some("http://loinc.org"));
//! assert_eq!(coding.code, "12345-6");
//! assert_eq!(coding.display.as_deref(), Some("Fake LOINC Code"));
//! ```

use super::TransformError;
use crate::fhir_types::Coding;
use std::collections::HashMap;

/// Common code system aliases mapped to canonical URLs
const BUILTIN_CODE_SYSTEMS: &[(&str, &str)] = &[
    ("LOINC", "http://loinc.org"),
    ("LNC", "http://loinc.org"),
    ("SNOMED", "http://snomed.info/sct"),
    ("SCT", "http://snomed.info/sct"),
    ("RXNORM", "http://www.nlm.nih.gov/research/umls/rxnorm"),
    ("ICD10", "http://hl7.org/fhir/sid/icd-10"),
    ("ICD10CM", "http://hl7.org/fhir/sid/icd-10-cm"),
    ("CVX", "http://hl7.org/fhir/sid/cvx"),
    ("CPT", "http://www.ama-assn.org/go/cpt"),
    ("UCUM", "http://unitsofmeasure.org"),
    ("NDC", "http://hl7.org/fhir/sid/ndc"),
];

/// Alias lookup table for code systems
///
/// Lookups are case-sensitive. A name that is not an alias resolves to
/// itself, so full URIs can be written directly in the shorthand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeSystemAliases {
    aliases: HashMap<String, String>,
}

impl CodeSystemAliases {
    /// Create an empty alias table
    pub fn new() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    /// Create a table holding the built-in aliases
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (name, url) in BUILTIN_CODE_SYSTEMS {
            table.insert(*name, *url);
        }
        table
    }

    /// Add or replace an alias
    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.aliases.insert(name.into(), url.into());
    }

    /// Extend the table, replacing existing aliases of the same name
    pub fn extend<I, K, V>(&mut self, aliases: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, url) in aliases {
            self.insert(name, url);
        }
    }

    /// Resolve a system name to its URI, falling back to the name itself
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map(String::as_str).unwrap_or(name)
    }

    /// Check if a name is a defined alias
    pub fn is_alias(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    /// All aliases sorted by name
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .aliases
            .iter()
            .map(|(name, url)| (name.as_str(), url.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Parse a code shorthand into a coding
///
/// Handles formats:
/// - `SYSTEM#code` - alias or URI and code
/// - `SYSTEM#code display text` - with trailing display text
/// - `SYSTEM#code "display text"` - display text may be quoted
/// - `#code display` - no system
pub fn parse_code(value: &str, aliases: &CodeSystemAliases) -> Result<Coding, TransformError> {
    let trimmed = value.trim();

    let (system_part, rest) = trimmed
        .split_once('#')
        .ok_or_else(|| TransformError::InvalidCode(trimmed.to_string()))?;

    let (code, display) = match rest.split_once(char::is_whitespace) {
        Some((code, display)) => (code, unquote(display.trim())),
        None => (rest, ""),
    };

    if code.is_empty() {
        return Err(TransformError::InvalidCode(trimmed.to_string()));
    }

    let system_part = system_part.trim();
    let system = (!system_part.is_empty()).then(|| aliases.resolve(system_part).to_string());
    let display = (!display.is_empty()).then(|| display.to_string());

    Ok(Coding {
        system,
        code: code.to_string(),
        display,
    })
}

fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}
