//! Template document and named placeholder substitution
//!
//! A template is plain text with `{name}` placeholders. Substitution is a
//! single pass: a `{identifier}` token is replaced by its placeholder
//! value, and any brace that does not open such a token (Lua tables,
//! spaces or punctuation after the brace) passes through verbatim, so Lua
//! templates need no escape syntax. Substituted values are never
//! re-scanned for placeholders.

use thiserror::Error;

use crate::template::fields::PlaceholderValues;

/// Errors raised during template substitution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template references a placeholder with no supplied value.
    #[error("template references unknown placeholder: {{{0}}}")]
    MissingPlaceholder(String),
}

/// An immutable template document, loaded once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    content: String,
}

impl Template {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Substitute the placeholder values into the template.
    ///
    /// Fails with [`TemplateError::MissingPlaceholder`] naming the first
    /// `{identifier}` token that has no supplied value. On success the
    /// output contains no residual placeholder tokens.
    pub fn render(&self, values: &PlaceholderValues) -> Result<String, TemplateError> {
        let chars: Vec<char> = self.content.chars().collect();
        let mut out = String::with_capacity(self.content.len());
        let mut i = 0;

        while i < chars.len() {
            if chars[i] != '{' {
                out.push(chars[i]);
                i += 1;
                continue;
            }

            // A brace only opens a placeholder when it reads {identifier}
            let mut j = i + 1;
            while j < chars.len() && is_identifier_char(chars[j]) {
                j += 1;
            }

            if j > i + 1 && j < chars.len() && chars[j] == '}' {
                let token: String = chars[i + 1..j].iter().collect();
                match values.get(&token) {
                    Some(value) => out.push_str(value),
                    None => return Err(TemplateError::MissingPlaceholder(token)),
                }
                i = j + 1;
            } else {
                out.push('{');
                i += 1;
            }
        }

        Ok(out)
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::{ToolDescriptor, VersionRecord};

    fn full_values() -> PlaceholderValues {
        let tool = ToolDescriptor {
            name: Some("samtools".to_string()),
            description: Some("Sequence alignment utilities".to_string()),
            url: Some("https://www.htslib.org".to_string()),
            doi: Some("10.1093/gigascience/giab008".to_string()),
            license: Some("MIT".to_string()),
            categories: Some(vec!["alignment".to_string(), "bio".to_string()]),
        };
        let record = VersionRecord {
            version: Some("1.19".to_string()),
            uri: Some("oci://samtools:1.19".to_string()),
            cmds: Some(vec!["samtools".to_string()]),
            entrypoint_args: Some(vec!["--help".to_string()]),
        };
        PlaceholderValues::compose(&tool, &record)
    }

    #[test]
    fn test_render_substitutes_every_placeholder() {
        let template = Template::new(
            "-- {name}: {description}\n\
             whatis(\"Version: {version}\")\n\
             whatis(\"URL: {url}\")\n\
             whatis(\"DOI: {doi}\")\n\
             whatis(\"License: {license}\")\n\
             local uri = \"{uri}\"\n\
             local cmds = { {cmds} }\n\
             local categories = { {categories} }\n\
             local entrypoint_args = { {entrypoint_args} }\n",
        );

        let output = template.render(&full_values()).unwrap();
        assert!(output.contains("samtools: Sequence alignment utilities"));
        assert!(output.contains("Version: 1.19"));
        assert!(output.contains("local cmds = { \"samtools\" }"));
        assert!(output.contains("local categories = { \"alignment\", \"bio\" }"));
        assert!(output.contains("local entrypoint_args = { \"--help\" }"));
        // No placeholder token survives substitution
        for name in [
            "{version}",
            "{uri}",
            "{cmds}",
            "{name}",
            "{description}",
            "{url}",
            "{doi}",
            "{license}",
            "{categories}",
            "{entrypoint_args}",
        ] {
            assert!(!output.contains(name), "unsubstituted {}", name);
        }
    }

    #[test]
    fn test_render_reproduces_exact_field_text() {
        let template = Template::new("[{version}|{uri}]");
        let output = template.render(&full_values()).unwrap();
        assert_eq!(output, "[1.19|oci://samtools:1.19]");
    }

    #[test]
    fn test_unknown_placeholder_is_an_error() {
        let template = Template::new("hello {nonsense}");
        let err = template.render(&full_values()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::MissingPlaceholder("nonsense".to_string())
        );
    }

    #[test]
    fn test_lua_table_braces_pass_through() {
        let template = Template::new("local t = { a = 1, b = 2 }");
        let output = template.render(&full_values()).unwrap();
        assert_eq!(output, "local t = { a = 1, b = 2 }");
    }

    #[test]
    fn test_unclosed_brace_kept_verbatim() {
        let template = Template::new("broken {version");
        let output = template.render(&full_values()).unwrap();
        assert_eq!(output, "broken {version");
    }

    #[test]
    fn test_empty_braces_pass_through() {
        let template = Template::new("local t = {}");
        let output = template.render(&full_values()).unwrap();
        assert_eq!(output, "local t = {}");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let tool = ToolDescriptor {
            description: Some("uses {version} literally".to_string()),
            ..Default::default()
        };
        let record = VersionRecord::default();
        let values = PlaceholderValues::compose(&tool, &record);

        let output = Template::new("{description}").render(&values).unwrap();
        assert_eq!(output, "uses {version} literally");
    }
}
