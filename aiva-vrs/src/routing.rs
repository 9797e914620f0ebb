//! Storage routing derived from identifier structure.
//!
//! Variant rows are partitioned by chromosome, one table per chromosome.
//! Routing only ever looks at the decoded chromosome field; the digest stays
//! opaque. Nothing here is cached: every call recomputes from the identifier.

use compact_str::CompactString;
use serde::Serialize;

use crate::codec::decode;
use crate::config::{ConfigResult, RoutingConfig};
use crate::errors::Result;
use crate::models::VariantIdentifier;
use crate::normalize::canonical_token;

/// A named value to bind to a query placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParam {
    pub name: String,
    pub value: String,
}

/// A parameterized lookup query for one identifier.
///
/// Values are never interpolated into `sql`; they are returned in `params`
/// in placeholder order so any driver can bind them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupQuery {
    pub table: String,
    #[serde(rename = "query")]
    pub sql: String,
    pub params: Vec<QueryParam>,
}

impl LookupQuery {
    /// Split into `(query_text, [(name, value), ...])`.
    pub fn into_parts(self) -> (String, Vec<(String, String)>) {
        let params = self
            .params
            .into_iter()
            .map(|p| (p.name, p.value))
            .collect();
        (self.sql, params)
    }
}

/// Routes identifiers to tables and lookup queries under a [`RoutingConfig`].
#[derive(Debug, Clone, Default)]
pub struct Router {
    config: RoutingConfig,
}

impl Router {
    pub fn new(config: RoutingConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Table for an already decoded identifier, e.g. `variants_chr7`.
    ///
    /// The chromosome is canonicalized first so that `chr7` and `7`
    /// identifiers share a table, then lowercased with `.` and `-` folded to
    /// `_` so the result is always a plain SQL identifier.
    pub fn table_name(&self, id: &VariantIdentifier) -> String {
        let key = canonical_token(id.chromosome())
            .unwrap_or_else(|_| CompactString::from(id.chromosome()));

        let mut table = String::with_capacity(self.config.table_prefix.len() + key.len());
        table.push_str(&self.config.table_prefix);
        table.extend(key.chars().map(|c| match c {
            '.' | '-' => '_',
            c => c.to_ascii_lowercase(),
        }));
        table
    }

    /// Table name with the configured schema qualifier, if any.
    pub fn qualified_table_name(&self, id: &VariantIdentifier) -> String {
        match &self.config.schema {
            Some(schema) => format!("{}.{}", schema, self.table_name(id)),
            None => self.table_name(id),
        }
    }

    /// Decode `identifier` and return its table name.
    pub fn table_for(&self, identifier: &str) -> Result<String> {
        decode(identifier).map(|id| self.table_name(&id))
    }

    /// Lookup query for an already decoded identifier.
    pub fn lookup_query(&self, id: &VariantIdentifier) -> LookupQuery {
        let placeholder = self.config.placeholder;
        let sql = format!(
            "SELECT * FROM {} WHERE {} = {} AND {} = {}",
            self.qualified_table_name(id),
            self.config.id_column,
            placeholder.render("vrs_id", 1),
            self.config.chromosome_column,
            placeholder.render("chromosome", 2),
        );

        LookupQuery {
            table: self.table_name(id),
            sql,
            params: vec![
                QueryParam {
                    name: "vrs_id".to_string(),
                    value: id.to_string(),
                },
                QueryParam {
                    name: "chromosome".to_string(),
                    value: id.chromosome().to_string(),
                },
            ],
        }
    }

    /// Decode `identifier` and build its lookup query.
    pub fn build_lookup_query(&self, identifier: &str) -> Result<LookupQuery> {
        decode(identifier).map(|id| self.lookup_query(&id))
    }
}

/// Table name for an identifier under the default layout.
pub fn table_for(identifier: &str) -> Result<String> {
    Router::default().table_for(identifier)
}

/// Lookup query for an identifier under the default layout.
pub fn build_lookup_query(identifier: &str) -> Result<LookupQuery> {
    Router::default().build_lookup_query(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlaceholderStyle;
    use crate::errors::VrsError;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const EGFR_ID: &str = "ga4gh:VA:7:v9TQXvNOQeG1vNRVJCWlD_a1tRf_m2AP";
    const DIGEST: &str = "v9TQXvNOQeG1vNRVJCWlD_a1tRf_m2AP";

    #[rstest]
    #[case("7", "variants_chr7")]
    #[case("chr7", "variants_chr7")]
    #[case("X", "variants_chrx")]
    #[case("chrM", "variants_chrmt")]
    #[case("GL000192.1", "variants_chrgl000192_1")]
    #[case("chrUn_KI270302v1", "variants_chrun_ki270302v1")]
    #[case("HLA-A", "variants_chrhla_a")]
    fn test_table_for(#[case] chromosome: &str, #[case] expected: &str) {
        let identifier = format!("ga4gh:VA:{}:{}", chromosome, DIGEST);
        assert_eq!(table_for(&identifier).unwrap(), expected);
    }

    #[test]
    fn test_table_for_rejects_malformed() {
        assert!(matches!(
            table_for("not:a:valid:id"),
            Err(VrsError::MalformedIdentifier { .. })
        ));
    }

    #[test]
    fn test_default_lookup_query() {
        let query = build_lookup_query(EGFR_ID).unwrap();
        assert_eq!(query.table, "variants_chr7");
        assert_eq!(
            query.sql,
            "SELECT * FROM variants_chr7 WHERE id = :vrs_id AND chromosome = :chromosome"
        );
        assert_eq!(
            query.params,
            vec![
                QueryParam {
                    name: "vrs_id".to_string(),
                    value: EGFR_ID.to_string()
                },
                QueryParam {
                    name: "chromosome".to_string(),
                    value: "7".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_query_never_interpolates_values() {
        let query = build_lookup_query(EGFR_ID).unwrap();
        assert!(!query.sql.contains(DIGEST));
        assert!(!query.sql.contains("'"));
    }

    #[test]
    fn test_configured_lookup_query() {
        let router = Router::new(RoutingConfig {
            schema: Some("project.dataset".to_string()),
            id_column: "vrs_id".to_string(),
            placeholder: PlaceholderStyle::Dollar,
            ..RoutingConfig::default()
        })
        .unwrap();

        let query = router
            .build_lookup_query("ga4gh:VA:chrX:UcKcuoFBIcaCrtA8xvz6ZlXMsLWCcFF5")
            .unwrap();
        assert_eq!(query.table, "variants_chrx");
        assert_eq!(
            query.sql,
            "SELECT * FROM project.dataset.variants_chrx WHERE vrs_id = $1 AND chromosome = $2"
        );
        assert_eq!(query.params[1].value, "chrX");
    }

    #[test]
    fn test_router_rejects_invalid_config() {
        let result = Router::new(RoutingConfig {
            table_prefix: "v\"; --".to_string(),
            ..RoutingConfig::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_into_parts() {
        let (sql, params) = build_lookup_query(EGFR_ID).unwrap().into_parts();
        assert!(sql.starts_with("SELECT * FROM variants_chr7"));
        assert_eq!(
            params,
            vec![
                ("vrs_id".to_string(), EGFR_ID.to_string()),
                ("chromosome".to_string(), "7".to_string()),
            ]
        );
    }
}
