use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How bound parameters are spelled inside a query template.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderStyle {
    /// `:vrs_id` (SQLAlchemy, SQLite, Oracle)
    #[default]
    Named,
    /// `@vrs_id` (BigQuery, SQL Server)
    At,
    /// `%(vrs_id)s` (psycopg2)
    PyFormat,
    /// `$1` (PostgreSQL native)
    Dollar,
    /// `?` (JDBC, ODBC, SQLite positional)
    Question,
}

impl PlaceholderStyle {
    /// Render the placeholder for a parameter. `index` is 1-based.
    pub fn render(&self, name: &str, index: usize) -> String {
        match self {
            PlaceholderStyle::Named => format!(":{}", name),
            PlaceholderStyle::At => format!("@{}", name),
            PlaceholderStyle::PyFormat => format!("%({})s", name),
            PlaceholderStyle::Dollar => format!("${}", index),
            PlaceholderStyle::Question => "?".to_string(),
        }
    }
}

/// Storage layout used to route identifiers to tables and lookup queries.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RoutingConfig {
    /// Prepended to the lowercased chromosome: `variants_chr` + `7`.
    pub table_prefix: String,
    /// Optional qualifier, e.g. `public` or `project.dataset`.
    pub schema: Option<String>,
    pub id_column: String,
    pub chromosome_column: String,
    pub placeholder: PlaceholderStyle,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            table_prefix: "variants_chr".to_string(),
            schema: None,
            id_column: "id".to_string(),
            chromosome_column: "chromosome".to_string(),
            placeholder: PlaceholderStyle::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for `{key}`: must be a plain SQL identifier ([A-Za-z_][A-Za-z0-9_]*)")]
    InvalidIdentifier { key: &'static str, value: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// True for identifiers that need no quoting in any SQL dialect we target.
pub(crate) fn is_sql_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl RoutingConfig {
    ///
    /// Check that every value spliced into query text is a plain identifier.
    /// Table and column names cannot be bound as parameters, so this is the
    /// only thing standing between a config file and the generated SQL.
    ///
    pub fn validate(&self) -> ConfigResult<()> {
        let checks = [
            ("table_prefix", self.table_prefix.as_str()),
            ("id_column", self.id_column.as_str()),
            ("chromosome_column", self.chromosome_column.as_str()),
        ];
        for (key, value) in checks {
            if !is_sql_identifier(value) {
                return Err(ConfigError::InvalidIdentifier {
                    key,
                    value: value.to_string(),
                });
            }
        }
        if let Some(schema) = &self.schema {
            if !schema.split('.').all(is_sql_identifier) {
                return Err(ConfigError::InvalidIdentifier {
                    key: "schema",
                    value: schema.clone(),
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(toml_str: &str) -> ConfigResult<Self> {
        let config: RoutingConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

impl TryFrom<&Path> for RoutingConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = RoutingConfig::from_toml_str(&toml_str)?;
        log::debug!("Loaded routing config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io::Write;

    #[rstest]
    fn test_default_config_is_valid() {
        let config = RoutingConfig::default();
        assert_eq!(config.validate().is_ok(), true);
        assert_eq!(config.table_prefix, "variants_chr");
        assert_eq!(config.placeholder, PlaceholderStyle::Named);
    }

    #[rstest]
    fn test_try_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "table_prefix = \"variants_chr\"\nschema = \"project.dataset\"\nplaceholder = \"at\""
        )
        .unwrap();

        let config = RoutingConfig::try_from(file.path()).unwrap();
        assert_eq!(config.schema.as_deref(), Some("project.dataset"));
        assert_eq!(config.placeholder, PlaceholderStyle::At);
        // unspecified keys keep their defaults
        assert_eq!(config.id_column, "id");
        assert_eq!(config.chromosome_column, "chromosome");
    }

    #[rstest]
    fn test_missing_file() {
        let result = RoutingConfig::try_from(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[rstest]
    fn test_bad_toml() {
        let result = RoutingConfig::from_toml_str("placeholder = \"curly\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[rstest]
    #[case("table_prefix = \"variants; DROP TABLE x\"", "table_prefix")]
    #[case("id_column = \"1id\"", "id_column")]
    #[case("chromosome_column = \"\"", "chromosome_column")]
    #[case("schema = \"public.\"", "schema")]
    #[case("schema = \"my-project.dataset\"", "schema")]
    fn test_rejects_unsafe_identifiers(#[case] toml_str: &str, #[case] expected_key: &str) {
        match RoutingConfig::from_toml_str(toml_str) {
            Err(ConfigError::InvalidIdentifier { key, .. }) => assert_eq!(key, expected_key),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[rstest]
    #[case(PlaceholderStyle::Named, ":vrs_id")]
    #[case(PlaceholderStyle::At, "@vrs_id")]
    #[case(PlaceholderStyle::PyFormat, "%(vrs_id)s")]
    #[case(PlaceholderStyle::Dollar, "$2")]
    #[case(PlaceholderStyle::Question, "?")]
    fn test_render_placeholder(#[case] style: PlaceholderStyle, #[case] expected: &str) {
        assert_eq!(style.render("vrs_id", 2), expected);
    }
}
