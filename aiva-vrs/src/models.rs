//! Data models for identifier generation and parsing.

use arrayvec::ArrayString;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::assembly::Assembly;

/// Identifier namespace. Fixed for the lifetime of the identifier format.
pub const NAMESPACE: &str = "ga4gh";

/// Length of the base64url digest text (24 bytes, no padding).
pub const DIGEST_TEXT_LEN: usize = 32;

/// Number of hash bytes kept after truncation.
pub const DIGEST_LEN: usize = 24;

/// A variant as supplied by a caller, before any validation.
///
/// Empty alleles are valid and describe pure insertions or deletions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVariant {
    pub chromosome: String,
    pub position: u64,
    #[serde(default)]
    pub reference_allele: String,
    #[serde(default)]
    pub alternate_allele: String,
    pub assembly: String,
}

/// The normalized, assembly-qualified form of a variant that gets hashed.
///
/// Only the normalizer builds these, so holding one means every field has
/// passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalForm {
    assembly: Assembly,
    sequence_key: CompactString,
    position: u64,
    reference: String,
    alternate: String,
}

impl CanonicalForm {
    pub(crate) fn new(
        assembly: Assembly,
        sequence_key: CompactString,
        position: u64,
        reference: String,
        alternate: String,
    ) -> Self {
        Self {
            assembly,
            sequence_key,
            position,
            reference,
            alternate,
        }
    }

    pub fn assembly(&self) -> Assembly {
        self.assembly
    }

    /// Chromosome without any `chr` prefix, e.g. `7`, `X`, `MT`.
    pub fn sequence_key(&self) -> &str {
        &self.sequence_key
    }

    /// 1-based position.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn alternate(&self) -> &str {
        &self.alternate
    }
}

/// The kind of variant object an identifier names.
///
/// Only alleles exist today. The type field of the identifier is reserved
/// for further kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum VariantType {
    #[serde(rename = "VA")]
    Allele,
}

impl VariantType {
    pub fn code(&self) -> &'static str {
        match self {
            VariantType::Allele => "VA",
        }
    }

    pub fn from_code(code: &str) -> Option<VariantType> {
        match code {
            "VA" => Some(VariantType::Allele),
            _ => None,
        }
    }
}

impl std::fmt::Display for VariantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A public variant identifier, `ga4gh:VA:<chromosome>:<digest>`.
///
/// The chromosome is the caller's display token, not the canonical key. The
/// digest is opaque: nothing about position or alleles can be recovered
/// from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VariantIdentifier {
    #[serde(rename = "type")]
    pub(crate) variant_type: VariantType,
    pub(crate) chromosome: CompactString,
    #[serde(rename = "digest")]
    pub(crate) digest_text: ArrayString<DIGEST_TEXT_LEN>,
}

impl VariantIdentifier {
    pub fn namespace(&self) -> &'static str {
        NAMESPACE
    }

    pub fn variant_type(&self) -> VariantType {
        self.variant_type
    }

    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    /// The 32-character base64url digest text.
    pub fn digest(&self) -> &str {
        &self.digest_text
    }
}

impl std::fmt::Display for VariantIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            NAMESPACE, self.variant_type, self.chromosome, self.digest_text
        )
    }
}
