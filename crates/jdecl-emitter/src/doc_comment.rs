//! Doc comment rendering.

/// Turns a source doc comment into header documentation.
pub trait DocCommentRenderer: Sync {
    /// Rendered comment lines, without trailing newlines. Empty when nothing should print.
    fn render(&self, doc: &str) -> Vec<String>;
}

/// Renders doc comments as `/*! @brief ... */` blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavadocRenderer;

impl JavadocRenderer {
    fn clean_line(line: &str) -> &str {
        let trimmed = line.trim();
        let trimmed = trimmed.strip_prefix("/**").unwrap_or(trimmed);
        let trimmed = trimmed.strip_suffix("*/").unwrap_or(trimmed);
        let trimmed = trimmed.trim_start();
        trimmed.strip_prefix('*').unwrap_or(trimmed).trim()
    }
}

impl DocCommentRenderer for JavadocRenderer {
    fn render(&self, doc: &str) -> Vec<String> {
        let mut body: Vec<&str> = doc.lines().map(Self::clean_line).collect();
        while body.first().is_some_and(|line| line.is_empty()) {
            body.remove(0);
        }
        while body.last().is_some_and(|line| line.is_empty()) {
            body.pop();
        }
        let Some((brief, rest)) = body.split_first() else {
            return Vec::new();
        };

        let mut lines = Vec::with_capacity(body.len() + 2);
        lines.push("/*!".to_string());
        lines.push(format!(" @brief {brief}"));
        for line in rest {
            if line.is_empty() {
                lines.push(String::new());
            } else {
                lines.push(format!(" {line}"));
            }
        }
        lines.push(" */".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_javadoc() {
        let lines = JavadocRenderer.render("/**\n * Adds two values.\n *\n * Overflow wraps.\n */");
        assert_eq!(
            lines,
            vec![
                "/*!",
                " @brief Adds two values.",
                "",
                " Overflow wraps.",
                " */",
            ]
        );
    }

    #[test]
    fn test_blank_comment_renders_nothing() {
        assert!(JavadocRenderer.render("/** */").is_empty());
        assert!(JavadocRenderer.render("").is_empty());
    }
}
