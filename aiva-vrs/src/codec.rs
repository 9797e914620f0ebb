//! Identifier encoding and decoding.
//!
//! Identifiers have exactly four `:`-separated fields:
//!
//! ```text
//! ga4gh:VA:<chromosome>:<32-char base64url digest>
//! ```
//!
//! Decoding is purely structural. The digest is returned as text and nothing
//! about position or alleles can be recovered from it.

use std::str::FromStr;

use arrayvec::ArrayString;
use compact_str::CompactString;

use crate::digest::Digest;
use crate::errors::{Result, VrsError};
use crate::models::{DIGEST_LEN, DIGEST_TEXT_LEN, NAMESPACE, VariantIdentifier, VariantType};
use crate::normalize::canonical_token;

#[inline]
fn is_base64url_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Build an allele identifier from a display chromosome and a digest.
///
/// The chromosome is used as given, so `chr7` and `7` produce different
/// identifier strings around the same digest. It must be a token that
/// [`decode`] accepts back; otherwise this fails with
/// [`VrsError::InvalidChromosome`].
pub fn encode(chromosome_display: &str, digest: &Digest) -> Result<VariantIdentifier> {
    canonical_token(chromosome_display).map_err(|reason| VrsError::InvalidChromosome {
        input: chromosome_display.to_string(),
        reason,
    })?;

    Ok(VariantIdentifier {
        variant_type: VariantType::Allele,
        chromosome: CompactString::from(chromosome_display),
        digest_text: digest.to_text(),
    })
}

/// Parse an identifier string into its structural fields.
///
/// # Errors
/// * [`VrsError::MalformedIdentifier`] - not four fields, wrong namespace, or
///   an unusable chromosome field
/// * [`VrsError::UnsupportedType`] - type field is not a known variant kind
/// * [`VrsError::MalformedDigest`] - digest field is not 32 base64url characters
pub fn decode(identifier: &str) -> Result<VariantIdentifier> {
    let malformed = |reason: String| VrsError::MalformedIdentifier {
        input: identifier.to_string(),
        reason,
    };

    let mut fields = identifier.split(':');
    let (namespace, type_field, chromosome, digest_field) = match (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    ) {
        (Some(ns), Some(ty), Some(chrom), Some(digest), None) => (ns, ty, chrom, digest),
        _ => {
            return Err(malformed(format!(
                "expected 4 ':'-separated fields, found {}",
                identifier.split(':').count()
            )));
        }
    };

    if namespace != NAMESPACE {
        return Err(malformed(format!(
            "namespace must be '{}', found '{}'",
            NAMESPACE, namespace
        )));
    }

    let variant_type =
        VariantType::from_code(type_field).ok_or_else(|| VrsError::UnsupportedType {
            input: identifier.to_string(),
            type_field: type_field.to_string(),
        })?;

    canonical_token(chromosome).map_err(malformed)?;

    let malformed_digest = |reason: String| VrsError::MalformedDigest {
        input: identifier.to_string(),
        digest: digest_field.to_string(),
        reason,
    };
    if digest_field.len() != DIGEST_TEXT_LEN {
        return Err(malformed_digest(format!(
            "expected {} characters, found {}",
            DIGEST_TEXT_LEN,
            digest_field.chars().count()
        )));
    }
    if let Some(c) = digest_field.chars().find(|c| !is_base64url_char(*c)) {
        return Err(malformed_digest(format!(
            "character {:?} is not in the URL-safe base64 alphabet",
            c
        )));
    }
    let digest_text =
        ArrayString::from(digest_field).map_err(|e| malformed_digest(e.to_string()))?;

    Ok(VariantIdentifier {
        variant_type,
        chromosome: CompactString::from(chromosome),
        digest_text,
    })
}

/// Decode an identifier and return only its chromosome field.
pub fn extract_chromosome(identifier: &str) -> Result<String> {
    decode(identifier).map(|id| id.chromosome().to_string())
}

impl VariantIdentifier {
    /// The raw 24 digest bytes. Still opaque: useful for comparing digests
    /// across identifiers whose chromosome spelling differs.
    pub fn digest_bytes(&self) -> Result<Digest> {
        let bytes = base64_url::decode(self.digest_text.as_str()).map_err(|e| {
            VrsError::MalformedDigest {
                input: self.to_string(),
                digest: self.digest_text.to_string(),
                reason: e.to_string(),
            }
        })?;
        let bytes: [u8; DIGEST_LEN] =
            bytes
                .try_into()
                .map_err(|bytes: Vec<u8>| VrsError::MalformedDigest {
                    input: self.to_string(),
                    digest: self.digest_text.to_string(),
                    reason: format!("decodes to {} bytes, expected {}", bytes.len(), DIGEST_LEN),
                })?;
        Ok(Digest::from_bytes(bytes))
    }
}

impl FromStr for VariantIdentifier {
    type Err = VrsError;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}
