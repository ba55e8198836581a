//! Builder configuration.
//!
//! Two name lists drive collision handling: the default-page names a folder
//! may designate as its landing content, and the container kinds recognized
//! (and assigned) for folder records. Both default to a single conventional
//! value.

/// Default-page name used when none is configured.
pub const DEFAULT_PAGE_NAME: &str = "index.html";

/// Container kind used when none is configured.
pub const DEFAULT_CONTAINER_KIND: &str = "Folder";

/// Configuration for a [`PathTreeBuilder`](crate::pipeline::PathTreeBuilder).
///
/// The first configured default-page name also seeds the names generated
/// when a page is promoted; the first container kind types synthesized
/// folders. An empty list falls back to the built-in default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeConfig {
    default_pages: Vec<String>,
    default_containers: Vec<String>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            default_pages: vec![DEFAULT_PAGE_NAME.to_string()],
            default_containers: vec![DEFAULT_CONTAINER_KIND.to_string()],
        }
    }
}

impl TreeConfig {
    /// Create a config with the conventional defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the recognized default-page names.
    pub fn with_default_pages<I, S>(mut self, pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_pages = pages.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the recognized container kinds.
    pub fn with_default_containers<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_containers = kinds.into_iter().map(Into::into).collect();
        self
    }

    /// Name seeding synthesized default-page names.
    pub fn primary_default_page(&self) -> &str {
        self.default_pages
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_PAGE_NAME)
    }

    /// Kind assigned to synthesized folders.
    pub fn primary_container_kind(&self) -> &str {
        self.default_containers
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_CONTAINER_KIND)
    }

    /// Whether `segment` is recognized as a default-page name.
    pub fn is_default_page(&self, segment: &str) -> bool {
        if self.default_pages.is_empty() {
            segment == DEFAULT_PAGE_NAME
        } else {
            self.default_pages.iter().any(|p| p == segment)
        }
    }

    /// Whether `kind` is recognized as a container kind.
    pub fn is_container_kind(&self, kind: &str) -> bool {
        if self.default_containers.is_empty() {
            kind == DEFAULT_CONTAINER_KIND
        } else {
            self.default_containers.iter().any(|k| k == kind)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TreeConfig::new();
        assert_eq!(config.primary_default_page(), "index.html");
        assert_eq!(config.primary_container_kind(), "Folder");
        assert!(config.is_default_page("index.html"));
        assert!(config.is_container_kind("Folder"));
        assert!(!config.is_default_page("readme.txt"));
        assert!(!config.is_container_kind("Document"));
    }

    #[test]
    fn test_with_default_pages() {
        let config = TreeConfig::new().with_default_pages(["welcome.htm", "index.html"]);
        assert_eq!(config.primary_default_page(), "welcome.htm");
        assert!(config.is_default_page("index.html"));
        assert!(config.is_default_page("welcome.htm"));
    }

    #[test]
    fn test_with_default_containers() {
        let config = TreeConfig::new().with_default_containers(["Collection"]);
        assert_eq!(config.primary_container_kind(), "Collection");
        assert!(config.is_container_kind("Collection"));
        assert!(!config.is_container_kind("Folder"));
    }

    #[test]
    fn test_empty_lists_fall_back_to_builtins() {
        let config = TreeConfig::new()
            .with_default_pages(Vec::<String>::new())
            .with_default_containers(Vec::<String>::new());
        assert_eq!(config.primary_default_page(), DEFAULT_PAGE_NAME);
        assert_eq!(config.primary_container_kind(), DEFAULT_CONTAINER_KIND);
        assert!(config.is_default_page("index.html"));
        assert!(config.is_container_kind("Folder"));
    }
}
