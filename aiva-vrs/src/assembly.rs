//! Reference genome assemblies and their aliases.
//!
//! The alias table is part of the identifier contract: an alias that maps to a
//! different assembly in a later release silently changes the identifiers
//! computed for it. Entries are only ever added, never remapped.

use std::str::FromStr;
use std::sync::LazyLock;

use fxhash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};

use crate::errors::VrsError;

/// A reference genome build against which positions are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Assembly {
    #[serde(rename = "GRCh38")]
    GRCh38,
    #[serde(rename = "GRCh37")]
    GRCh37,
    #[serde(rename = "NCBI36")]
    NCBI36,
    #[serde(rename = "T2T-CHM13")]
    T2TChm13,
}

/// Canonical name and accepted aliases for every supported assembly.
pub const ASSEMBLY_ALIASES: &[(Assembly, &[&str])] = &[
    (
        Assembly::GRCh38,
        &["hg38", "b38", "hs38", "38", "GRCh38.p14"],
    ),
    (
        Assembly::GRCh37,
        &["hg19", "b37", "hs37d5", "37", "GRCh37.p13"],
    ),
    (Assembly::NCBI36, &["hg18", "b36", "36"]),
    (
        Assembly::T2TChm13,
        &["chm13", "hs1", "chm13v2.0", "T2T-CHM13v2.0"],
    ),
];

/// Lowercased name or alias -> assembly. Built once, never mutated.
static LOOKUP: LazyLock<HashMap<String, Assembly>> = LazyLock::new(|| {
    let mut lookup = HashMap::default();
    for (assembly, aliases) in ASSEMBLY_ALIASES {
        lookup.insert(assembly.as_str().to_lowercase(), *assembly);
        for alias in aliases.iter() {
            lookup.insert(alias.to_lowercase(), *assembly);
        }
    }
    lookup
});

impl Assembly {
    /// The canonical spelling used in digest input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Assembly::GRCh38 => "GRCh38",
            Assembly::GRCh37 => "GRCh37",
            Assembly::NCBI36 => "NCBI36",
            Assembly::T2TChm13 => "T2T-CHM13",
        }
    }

    /// The assembly whose identifiers are serialized without an assembly
    /// qualifier. Identifiers published before assembly qualification existed
    /// were all computed against it.
    pub fn is_primary(&self) -> bool {
        matches!(self, Assembly::GRCh38)
    }

    /// Resolve a canonical name or alias, ignoring ASCII case.
    pub fn resolve(name: &str) -> Option<Assembly> {
        LOOKUP.get(&name.to_ascii_lowercase()).copied()
    }
}

impl FromStr for Assembly {
    type Err = VrsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Assembly::resolve(s).ok_or_else(|| VrsError::UnknownAssembly(s.to_string()))
    }
}

impl std::fmt::Display for Assembly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
