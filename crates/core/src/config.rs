/// Configuration for one render invocation
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Number of tree levels to print; None = unlimited. A depth of 0
    /// is valid and truncates immediately.
    pub depth: Option<usize>,
    /// Subtree selection path, one name segment per tree level
    pub path: Option<Vec<String>>,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_path(mut self, path: Vec<String>) -> Self {
        self.path = Some(path);
        self
    }

    /// Parse a slash-separated path expression. An absolute expression
    /// carries a leading empty segment, which is stripped.
    pub fn with_path_expr(mut self, expr: &str) -> Self {
        let mut segments: Vec<String> = expr.split('/').map(str::to_string).collect();
        if segments.first().is_some_and(|s| s.is_empty()) {
            segments.remove(0);
        }
        self.path = Some(segments);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert!(config.depth.is_none());
        assert!(config.path.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = RenderConfig::new()
            .with_depth(3)
            .with_path(vec!["interfaces".to_string()]);
        assert_eq!(config.depth, Some(3));
        assert_eq!(config.path.as_deref(), Some(&["interfaces".to_string()][..]));
    }

    #[test]
    fn test_absolute_path_expr_strips_leading_segment() {
        let config = RenderConfig::new().with_path_expr("/interfaces/interface");
        assert_eq!(
            config.path,
            Some(vec!["interfaces".to_string(), "interface".to_string()])
        );
    }

    #[test]
    fn test_relative_path_expr() {
        let config = RenderConfig::new().with_path_expr("interfaces/interface");
        assert_eq!(
            config.path,
            Some(vec!["interfaces".to_string(), "interface".to_string()])
        );
    }
}
