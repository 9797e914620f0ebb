//! Parallel identifier generation for many variants.
//!
//! Generation is pure, so rows are processed independently on the rayon pool
//! with one [`DigestWriter`] per worker. Results come back in input order and
//! one bad row never aborts the batch.

use rayon::prelude::*;

use crate::digest::DigestWriter;
use crate::errors::Result;
use crate::models::{RawVariant, VariantIdentifier};

/// Generate identifiers for every variant, preserving input order.
pub fn generate_batch(variants: &[RawVariant]) -> Vec<Result<VariantIdentifier>> {
    let results: Vec<Result<VariantIdentifier>> = variants
        .par_iter()
        .map_init(DigestWriter::new, |writer, variant| variant.vrs_id_with(writer))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    log::debug!(
        "Generated {} identifiers, {} variants rejected",
        results.len() - failed,
        failed
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::VrsError;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_batch_matches_sequential() {
        let variants: Vec<RawVariant> = (1..=500u64)
            .map(|i| RawVariant::new(format!("chr{}", i % 22 + 1), i * 1000, "A", "G", "GRCh38"))
            .collect();

        let batch = generate_batch(&variants);
        assert_eq!(batch.len(), variants.len());
        for (variant, result) in variants.iter().zip(batch) {
            assert_eq!(result.unwrap(), variant.vrs_id().unwrap());
        }
    }

    #[test]
    fn test_bad_rows_do_not_abort_batch() {
        let variants = vec![
            RawVariant::new("chr7", 55174772, "GGAATTAAGAGAAGC", "", "GRCh38"),
            RawVariant::new("chr7", 0, "A", "T", "GRCh38"),
            RawVariant::new("chr7", 10, "A", "T", "GRCh99"),
            RawVariant::new("chr17", 31350290, "C", "T", "GRCh38"),
        ];

        let results = generate_batch(&variants);
        assert_eq!(
            results[0].as_ref().unwrap().digest(),
            "v9TQXvNOQeG1vNRVJCWlD_a1tRf_m2AP"
        );
        assert!(matches!(results[1], Err(VrsError::InvalidPosition { .. })));
        assert!(matches!(results[2], Err(VrsError::UnknownAssembly(_))));
        assert_eq!(
            results[3].as_ref().unwrap().digest(),
            "0WNx7PqRUIPudU4jNEi-rXwzzFfToSyM"
        );
    }

    #[test]
    fn test_empty_batch() {
        assert!(generate_batch(&[]).is_empty());
    }
}
