/// Accumulates indented source lines and joins them with a separator.
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent: String,
    separator: String,
    lines: Vec<String>,
}

impl CodeBuilder {
    pub fn new(indent: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
            separator: separator.into(),
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: impl AsRef<str>) -> &mut Self {
        self.push_indented(0, line)
    }

    pub fn push_indented(&mut self, level: usize, line: impl AsRef<str>) -> &mut Self {
        let line = self.build_line(level, line.as_ref());
        self.lines.push(line);
        self
    }

    pub fn unshift(&mut self, line: impl AsRef<str>) -> &mut Self {
        let line = self.build_line(0, line.as_ref());
        self.lines.insert(0, line);
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn join(&self) -> String {
        self.lines.join(&self.separator)
    }

    fn build_line(&self, level: usize, line: &str) -> String {
        format!("{}{}", self.indent.repeat(level), line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_with_indentation() {
        let mut code = CodeBuilder::new("  ", "\n");
        code.push("a {").push_indented(1, "b").push_indented(2, "c").push("}");

        assert_eq!(code.join(), "a {\n  b\n    c\n}");
    }

    #[test]
    fn test_unshift_and_blank() {
        let mut code = CodeBuilder::new("\t", "|");
        code.push("second").blank();
        code.unshift("first");

        assert_eq!(code.join(), "first|second|");
        assert!(!code.is_empty());
    }
}
