//! # Computed variant identifiers
//!
//! This crate assigns stable, content-derived identifiers to genomic variants
//! and reads structural metadata back out of them. It provides:
//!
//! - Normalization of chromosome names, positions, alleles and assembly aliases
//! - Digest computation (`:`-separated canonical form + SHA-512/24u)
//! - Identifier encoding/decoding (`ga4gh:VA:<chromosome>:<digest>`)
//! - Storage routing (per-chromosome table names, parameterized lookup queries)
//! - Parallel batch generation
//!
//! Identifiers are one-way: position and alleles cannot be recovered from
//! them. Everything except [`RoutingConfig`] file loading is pure and
//! thread-safe without locks.

pub mod api;
pub mod assembly;
pub mod batch;
pub mod codec;
pub mod config;
pub mod digest;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod routing;

pub use api::{
    build_variant_query, generate, generate_vrs_id, get_chromosome_from_vrs_id,
    get_sql_table_for_variant, parse_vrs_id,
};
pub use assembly::Assembly;
pub use batch::generate_batch;
pub use codec::{decode, encode, extract_chromosome};
pub use config::{ConfigError, PlaceholderStyle, RoutingConfig};
pub use digest::{Digest, DigestWriter, digest, sha512t24u};
pub use errors::{AlleleRole, Result, VrsError};
pub use models::{CanonicalForm, RawVariant, VariantIdentifier, VariantType};
pub use normalize::{IntoPosition, normalize};
pub use routing::{LookupQuery, QueryParam, Router, build_lookup_query, table_for};
