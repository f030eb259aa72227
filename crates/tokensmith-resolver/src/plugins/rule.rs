use serde::Serialize;
use std::fmt::Write;

/// A single CSS rule, optionally nested in an at-rule such as
/// `@media (min-width: 1400px)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassRule {
    pub selector: String,
    pub at_rule: Option<String>,
    pub declarations: Vec<(String, String)>,
}

impl ClassRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            at_rule: None,
            declarations: Vec::new(),
        }
    }

    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push((property.into(), value.into()));
        self
    }

    pub fn within(mut self, at_rule: impl Into<String>) -> Self {
        self.at_rule = Some(at_rule.into());
        self
    }

    pub fn to_css(&self) -> String {
        let indent = if self.at_rule.is_some() { "  " } else { "" };
        let mut body = format!("{indent}{} {{\n", self.selector);
        for (property, value) in &self.declarations {
            let _ = writeln!(body, "{indent}  {property}: {value};");
        }
        body.push_str(indent);
        body.push('}');

        match &self.at_rule {
            Some(at_rule) => format!("{at_rule} {{\n{body}\n}}"),
            None => body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_plain_rule() {
        let rule = ClassRule::new(".prose").declare("max-width", "65ch");
        assert_eq!(rule.to_css(), ".prose {\n  max-width: 65ch;\n}");
    }

    #[test]
    fn renders_nested_rule() {
        let rule = ClassRule::new(".container")
            .declare("max-width", "1400px")
            .within("@media (min-width: 1400px)");
        assert_eq!(
            rule.to_css(),
            "@media (min-width: 1400px) {\n  .container {\n    max-width: 1400px;\n  }\n}"
        );
    }
}
