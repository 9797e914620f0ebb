//! Variant normalization.
//!
//! Turns caller-supplied variant fields into a [`CanonicalForm`]: chromosome
//! spelling, position representation, allele case and assembly aliases are
//! all folded so that biologically identical inputs hash identically.

use compact_str::CompactString;

use crate::assembly::Assembly;
use crate::errors::{AlleleRole, Result, VrsError};
use crate::models::CanonicalForm;

/// Anything that can stand for a 1-based genomic position.
///
/// Implemented for the integer types and for decimal text, so that values
/// read straight out of delimited files can be passed through unchanged.
pub trait IntoPosition {
    /// Convert to a 1-based position. Zero, negative, non-numeric and
    /// out-of-range values fail with [`VrsError::InvalidPosition`].
    fn into_position(self) -> Result<u64>;
}

fn invalid_position(input: impl ToString, reason: impl Into<String>) -> VrsError {
    VrsError::InvalidPosition {
        input: input.to_string(),
        reason: reason.into(),
    }
}

fn one_based(position: u64) -> Result<u64> {
    if position == 0 {
        return Err(invalid_position(
            position,
            "positions are 1-based; 0 is not a valid coordinate",
        ));
    }
    Ok(position)
}

macro_rules! impl_into_position_unsigned {
    ($($t:ty),*) => {
        $(
            impl IntoPosition for $t {
                fn into_position(self) -> Result<u64> {
                    let position = u64::try_from(self)
                        .map_err(|_| invalid_position(self, "does not fit in 64 bits"))?;
                    one_based(position)
                }
            }
        )*
    };
}

macro_rules! impl_into_position_signed {
    ($($t:ty),*) => {
        $(
            impl IntoPosition for $t {
                fn into_position(self) -> Result<u64> {
                    if self < 0 {
                        return Err(invalid_position(self, "negative positions are not allowed"));
                    }
                    let position = u64::try_from(self)
                        .map_err(|_| invalid_position(self, "does not fit in 64 bits"))?;
                    one_based(position)
                }
            }
        )*
    };
}

impl_into_position_unsigned!(u8, u16, u32, u64, usize);
impl_into_position_signed!(i8, i16, i32, i64, isize);

impl IntoPosition for &str {
    fn into_position(self) -> Result<u64> {
        let trimmed = self.trim();
        if trimmed.starts_with('-') {
            return Err(invalid_position(self, "negative positions are not allowed"));
        }
        let position = trimmed
            .parse::<u64>()
            .map_err(|e| invalid_position(self, format!("not a non-negative integer ({})", e)))?;
        one_based(position)
    }
}

impl IntoPosition for &String {
    fn into_position(self) -> Result<u64> {
        self.as_str().into_position()
    }
}

impl IntoPosition for String {
    fn into_position(self) -> Result<u64> {
        self.as_str().into_position()
    }
}

/// Characters allowed in chromosome tokens, both when generating and when
/// decoding. `:` is deliberately absent: it delimits identifier fields and
/// separates digest input fields.
#[inline]
fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

/// Check that a chromosome token is non-empty and uses only token characters.
/// Returns the violated rule on failure.
fn check_token(token: &str) -> std::result::Result<(), String> {
    if token.is_empty() {
        return Err("chromosome is empty".to_string());
    }
    if let Some((offset, c)) = token.char_indices().find(|(_, c)| !is_token_char(*c)) {
        return Err(format!(
            "character {:?} at offset {} is not allowed; use letters, digits, '.', '_' or '-'",
            c, offset
        ));
    }
    Ok(())
}

/// Remove a leading `chr` prefix in any case. The input must already be ASCII.
fn strip_chr_prefix(chromosome: &str) -> &str {
    match chromosome.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("chr") => &chromosome[3..],
        _ => chromosome,
    }
}

/// Canonicalize a chromosome token, returning the violated rule on failure.
pub(crate) fn canonical_token(chromosome: &str) -> std::result::Result<CompactString, String> {
    check_token(chromosome)?;
    let token = strip_chr_prefix(chromosome);
    if token.is_empty() {
        return Err("nothing is left after removing the 'chr' prefix".to_string());
    }

    if token.bytes().all(|b| b.is_ascii_digit()) {
        let digits = token.trim_start_matches('0');
        return Ok(if digits.is_empty() {
            CompactString::from("0")
        } else {
            CompactString::from(digits)
        });
    }

    if token.len() <= 2 && token.bytes().all(|b| b.is_ascii_alphabetic()) {
        let upper = token.to_ascii_uppercase();
        return Ok(if upper == "M" {
            CompactString::from("MT")
        } else {
            CompactString::from(upper)
        });
    }

    Ok(CompactString::from(token))
}

/// Canonicalize a chromosome name to its sequence key.
///
/// `chr7`, `CHR7`, `7` and `07` all become `7`; `chrx` becomes `X`; `chrM`
/// and `mt` become `MT`. Longer contig names are kept as written.
pub fn normalize_chromosome(chromosome: &str) -> Result<CompactString> {
    canonical_token(chromosome).map_err(|reason| VrsError::InvalidChromosome {
        input: chromosome.to_string(),
        reason,
    })
}

/// Validate an allele and fold it to uppercase. Empty alleles are valid.
pub fn normalize_allele(role: AlleleRole, allele: &str) -> Result<String> {
    let mut normalized = String::with_capacity(allele.len());
    for (offset, c) in allele.char_indices() {
        let upper = c.to_ascii_uppercase();
        match upper {
            'A' | 'C' | 'G' | 'T' | 'N' => normalized.push(upper),
            _ => {
                return Err(VrsError::InvalidAllele {
                    role,
                    input: allele.to_string(),
                    reason: format!(
                        "character {:?} at offset {} is not one of A, C, G, T, N",
                        c, offset
                    ),
                });
            }
        }
    }
    Ok(normalized)
}

/// Normalize raw variant fields into the canonical form that gets hashed.
///
/// Fields are checked in order (chromosome, position, reference allele,
/// alternate allele, assembly) and the first violation is returned.
///
/// # Arguments
/// * `chromosome` - chromosome or contig name, with or without `chr`
/// * `position` - 1-based position, as an integer or decimal text
/// * `reference_allele` - reference bases, possibly empty
/// * `alternate_allele` - alternate bases, possibly empty
/// * `assembly` - assembly name or alias, e.g. `GRCh38` or `hg19`
pub fn normalize(
    chromosome: &str,
    position: impl IntoPosition,
    reference_allele: &str,
    alternate_allele: &str,
    assembly: &str,
) -> Result<CanonicalForm> {
    let sequence_key = normalize_chromosome(chromosome)?;
    let position = position.into_position()?;
    let reference = normalize_allele(AlleleRole::Reference, reference_allele)?;
    let alternate = normalize_allele(AlleleRole::Alternate, alternate_allele)?;
    let assembly: Assembly = assembly.parse()?;

    Ok(CanonicalForm::new(
        assembly,
        sequence_key,
        position,
        reference,
        alternate,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("chr7", "7")]
    #[case("7", "7")]
    #[case("CHR7", "7")]
    #[case("Chr7", "7")]
    #[case("07", "7")]
    #[case("chr007", "7")]
    #[case("chrX", "X")]
    #[case("x", "X")]
    #[case("chry", "Y")]
    #[case("chrM", "MT")]
    #[case("mt", "MT")]
    #[case("chrMT", "MT")]
    #[case("0", "0")]
    #[case("chrUn_KI270302v1", "Un_KI270302v1")]
    #[case("GL000192.1", "GL000192.1")]
    fn test_normalize_chromosome(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_chromosome(input).unwrap().as_str(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("chr")]
    #[case("CHR")]
    #[case("7:1")]
    #[case("chr 7")]
    #[case(" 7")]
    #[case("chr7\t")]
    fn test_invalid_chromosome(#[case] input: &str) {
        let result = normalize_chromosome(input);
        assert!(matches!(result, Err(VrsError::InvalidChromosome { .. })));
    }

    #[test]
    fn test_positions_from_integers() {
        assert_eq!(55174772u64.into_position().unwrap(), 55174772);
        assert_eq!(1u8.into_position().unwrap(), 1);
        assert_eq!(31350290i64.into_position().unwrap(), 31350290);
        assert_eq!(100usize.into_position().unwrap(), 100);
    }

    #[rstest]
    #[case("55174772", 55174772)]
    #[case(" 42 ", 42)]
    #[case("0001", 1)]
    #[case("+9", 9)]
    fn test_positions_from_text(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(input.into_position().unwrap(), expected);
        assert_eq!(input.to_string().into_position().unwrap(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-5")]
    #[case("")]
    #[case("12a")]
    #[case("1.5")]
    #[case("99999999999999999999999")]
    fn test_invalid_positions_from_text(#[case] input: &str) {
        let result = input.into_position();
        assert!(matches!(result, Err(VrsError::InvalidPosition { .. })));
    }

    #[test]
    fn test_invalid_positions_from_integers() {
        assert!(matches!(0u64.into_position(), Err(VrsError::InvalidPosition { .. })));
        assert!(matches!((-1i32).into_position(), Err(VrsError::InvalidPosition { .. })));
        assert!(matches!(0i64.into_position(), Err(VrsError::InvalidPosition { .. })));
    }

    #[rstest]
    #[case("", "")]
    #[case("acgtn", "ACGTN")]
    #[case("GGAATTAAGAGAAGC", "GGAATTAAGAGAAGC")]
    #[case("gGaA", "GGAA")]
    fn test_normalize_allele(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_allele(AlleleRole::Reference, input).unwrap(), expected);
    }

    #[rstest]
    #[case("-")]
    #[case(".")]
    #[case("ACGU")]
    #[case("A C")]
    #[case("R")]
    #[case("<DEL>")]
    fn test_invalid_allele(#[case] input: &str) {
        let err = normalize_allele(AlleleRole::Alternate, input).unwrap_err();
        match err {
            VrsError::InvalidAllele { role, input: bad, .. } => {
                assert_eq!(role, AlleleRole::Alternate);
                assert_eq!(bad, input);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_normalize_full_variant() {
        let canonical = normalize("chr7", 55174772, "ggaattaagagaagc", "", "hg38").unwrap();
        assert_eq!(canonical.assembly(), Assembly::GRCh38);
        assert_eq!(canonical.sequence_key(), "7");
        assert_eq!(canonical.position(), 55174772);
        assert_eq!(canonical.reference(), "GGAATTAAGAGAAGC");
        assert_eq!(canonical.alternate(), "");
    }

    #[test]
    fn test_aliases_share_canonical_form() {
        let a = normalize("chr7", 55174772, "GGAATTAAGAGAAGC", "", "GRCh38").unwrap();
        let b = normalize("7", "55174772", "GGAATTAAGAGAAGC", "", "hg38").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_first_violation_is_reported() {
        // bad position and bad assembly: position is checked first
        let err = normalize("7", 0, "A", "T", "GRCh99").unwrap_err();
        assert!(matches!(err, VrsError::InvalidPosition { .. }));

        let err = normalize("7", 10, "A", "T", "GRCh99").unwrap_err();
        assert_eq!(err, VrsError::UnknownAssembly("GRCh99".to_string()));
    }
}
