//! Document formats accepted for policies, claims and configuration.

use std::path::Path;

/// Input document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension: `.yaml`/`.yml` are YAML,
    /// everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_format_from_path() {
        assert_eq!(DocumentFormat::from_path(Path::new("p.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("p.yml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("p.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("policy")), DocumentFormat::Json);
    }
}
