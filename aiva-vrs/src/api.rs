//! The public operation surface: generate, parse, extract, route.
//!
//! Every function here is pure. Generation either returns a complete
//! identifier or fails before anything is hashed.

use crate::codec::{decode, encode, extract_chromosome};
use crate::digest::DigestWriter;
use crate::errors::Result;
use crate::models::{CanonicalForm, RawVariant, VariantIdentifier};
use crate::normalize::{IntoPosition, normalize};
use crate::routing::{self, LookupQuery};

pub(crate) fn generate_with(
    writer: &mut DigestWriter,
    chromosome: &str,
    position: impl IntoPosition,
    reference_allele: &str,
    alternate_allele: &str,
    assembly: &str,
) -> Result<VariantIdentifier> {
    let canonical = normalize(
        chromosome,
        position,
        reference_allele,
        alternate_allele,
        assembly,
    )?;
    let digest = writer.digest(&canonical);
    encode(chromosome, &digest)
}

/// Generate the identifier for a variant.
pub fn generate(
    chromosome: &str,
    position: impl IntoPosition,
    reference_allele: &str,
    alternate_allele: &str,
    assembly: &str,
) -> Result<VariantIdentifier> {
    generate_with(
        &mut DigestWriter::new(),
        chromosome,
        position,
        reference_allele,
        alternate_allele,
        assembly,
    )
}

/// Generate the identifier string for a variant.
///
/// # Example
/// ```
/// let id = aiva_vrs::generate_vrs_id("chr7", 55174772, "GGAATTAAGAGAAGC", "", "GRCh38").unwrap();
/// assert_eq!(id, "ga4gh:VA:chr7:v9TQXvNOQeG1vNRVJCWlD_a1tRf_m2AP");
/// ```
pub fn generate_vrs_id(
    chromosome: &str,
    position: impl IntoPosition,
    reference_allele: &str,
    alternate_allele: &str,
    assembly: &str,
) -> Result<String> {
    generate(
        chromosome,
        position,
        reference_allele,
        alternate_allele,
        assembly,
    )
    .map(|id| id.to_string())
}

/// Parse an identifier into its type, chromosome and digest text.
pub fn parse_vrs_id(identifier: &str) -> Result<VariantIdentifier> {
    decode(identifier)
}

pub fn get_chromosome_from_vrs_id(identifier: &str) -> Result<String> {
    extract_chromosome(identifier)
}

/// Storage table for an identifier, e.g. `variants_chr7`.
pub fn get_sql_table_for_variant(identifier: &str) -> Result<String> {
    routing::table_for(identifier)
}

/// Parameterized lookup query for an identifier.
pub fn build_variant_query(identifier: &str) -> Result<LookupQuery> {
    routing::build_lookup_query(identifier)
}

impl RawVariant {
    pub fn new(
        chromosome: impl Into<String>,
        position: u64,
        reference_allele: impl Into<String>,
        alternate_allele: impl Into<String>,
        assembly: impl Into<String>,
    ) -> Self {
        Self {
            chromosome: chromosome.into(),
            position,
            reference_allele: reference_allele.into(),
            alternate_allele: alternate_allele.into(),
            assembly: assembly.into(),
        }
    }

    pub fn canonicalize(&self) -> Result<CanonicalForm> {
        normalize(
            &self.chromosome,
            self.position,
            &self.reference_allele,
            &self.alternate_allele,
            &self.assembly,
        )
    }

    pub fn vrs_id(&self) -> Result<VariantIdentifier> {
        self.vrs_id_with(&mut DigestWriter::new())
    }

    pub(crate) fn vrs_id_with(&self, writer: &mut DigestWriter) -> Result<VariantIdentifier> {
        generate_with(
            writer,
            &self.chromosome,
            self.position,
            &self.reference_allele,
            &self.alternate_allele,
            &self.assembly,
        )
    }
}
