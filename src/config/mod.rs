//! View configuration loading
//!
//! A list screen's tunables (page size, required form fields, the
//! default sort) can ship as YAML next to the view instead of being
//! hardcoded. [`ViewConfig`] parses that file and builds the rule set
//! and sort order a [`ListView`](crate::core::view::ListView) starts
//! from.

use crate::core::error::ConfigError;
use crate::core::sort::SortOrder;
use crate::core::validation::RuleSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_page_size() -> usize {
    10
}

/// Sort direction for a configured default sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Configured default sort for a view
///
/// `ranks` switches to rank-table ordering; `pinned` names a boolean
/// field whose records come first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortConfig {
    pub field: String,

    #[serde(default)]
    pub direction: SortDirection,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranks: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<String>,
}

/// Configuration for one list screen
///
/// # Example
/// ```yaml
/// page_size: 6
/// required: [title]
/// sort:
///   field: date
///   direction: desc
///   pinned: featured
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Fixed page size for the view
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Form fields that must be present and non-blank
    #[serde(default)]
    pub required: Vec<String>,

    /// Default sort applied until the user picks another
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortConfig>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            required: Vec::new(),
            sort: None,
        }
    }
}

impl ViewConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|err| ConfigError::Parse {
            message: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(sort) = &self.sort {
            if sort.field.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "sort.field".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Build the rule set for the view's forms
    pub fn rules(&self) -> RuleSet {
        let mut rules = RuleSet::new();
        for field in &self.required {
            rules = rules.required(field.clone());
        }
        rules
    }

    /// Build the default sort order
    pub fn sort_order(&self) -> SortOrder {
        let Some(sort) = &self.sort else {
            return SortOrder::Unsorted;
        };
        let inner = if let Some(table) = &sort.ranks {
            SortOrder::Ranked {
                field: sort.field.clone(),
                table: table.clone(),
            }
        } else {
            match sort.direction {
                SortDirection::Asc => SortOrder::Ascending(sort.field.clone()),
                SortDirection::Desc => SortOrder::Descending(sort.field.clone()),
            }
        };
        match &sort.pinned {
            Some(flag) => SortOrder::Pinned {
                flag: flag.clone(),
                then: Box::new(inner),
            },
            None => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ViewConfig::from_yaml_str("{}").expect("parse");
        assert_eq!(config.page_size, 10);
        assert!(config.required.is_empty());
        assert_eq!(config.sort_order(), SortOrder::Unsorted);
    }

    #[test]
    fn test_full_config() {
        let yaml = r#"
page_size: 6
required: [title]
sort:
  field: date
  direction: desc
  pinned: featured
"#;
        let config = ViewConfig::from_yaml_str(yaml).expect("parse");
        assert_eq!(config.page_size, 6);
        assert_eq!(
            config.sort_order(),
            SortOrder::Pinned {
                flag: "featured".to_string(),
                then: Box::new(SortOrder::Descending("date".to_string())),
            }
        );
    }

    #[test]
    fn test_ranked_sort_config() {
        let yaml = r#"
sort:
  field: priority
  ranks: [Urgent, High, Medium, Low]
"#;
        let config = ViewConfig::from_yaml_str(yaml).expect("parse");
        match config.sort_order() {
            SortOrder::Ranked { field, table } => {
                assert_eq!(field, "priority");
                assert_eq!(table.len(), 4);
            }
            other => panic!("unexpected sort order: {other:?}"),
        }
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = ViewConfig::from_yaml_str("page_size: 0").expect_err("invalid");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_rules_from_required() {
        let config = ViewConfig::from_yaml_str("required: [name, email]").expect("parse");
        let rules = config.rules();
        let err = rules
            .check(json!({"email": "a@example.com"}).as_object().expect("object"))
            .expect_err("missing name");
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "page_size: 12").expect("write");
        let config = ViewConfig::from_yaml_file(file.path()).expect("load");
        assert_eq!(config.page_size, 12);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ViewConfig::from_yaml_file("/nonexistent/view.yaml").expect_err("missing");
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
