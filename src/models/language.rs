#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Python,
    Java,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Java => "Java",
        }
    }

    /// Directory name under `attempts/`, also how the language is
    /// spelled on the command line.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Java => "java",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Language::Python => "py",
            Language::Java => "java",
        }
    }
}

pub fn parse_language(s: &str) -> Result<Language, String> {
    match s.to_lowercase().as_str() {
        "python" => Ok(Language::Python),
        "java" => Ok(Language::Java),
        _ => Err(format!("Invalid language '{}'. Use 'python' or 'java'.", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language() {
        assert_eq!(parse_language("python").unwrap(), Language::Python);
        assert_eq!(parse_language("JAVA").unwrap(), Language::Java);
    }

    #[test]
    fn test_parse_language_rejects_unknown() {
        let err = parse_language("ruby").unwrap_err();
        assert!(err.contains("Invalid language 'ruby'"));
        assert!(err.contains("'python' or 'java'"));
    }
}
