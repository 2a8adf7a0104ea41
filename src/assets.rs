//! Template asset lookup

use std::path::{Path, PathBuf};

/// Accessor for template-relative static files, optionally scoped to a
/// namespace
///
/// Widget templates and their static files live under a shared asset root;
/// `namespace` derives an accessor scoped to a subdirectory (the widget
/// system uses the "widgets" namespace).
#[derive(Debug, Clone)]
pub struct AssetFs {
    root: PathBuf,
}

impl AssetFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Derive an accessor scoped to a subdirectory of this one
    pub fn namespace(&self, prefix: &str) -> AssetFs {
        AssetFs {
            root: self.root.join(prefix),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a named template file
    pub fn template_path(&self, template: &str) -> PathBuf {
        self.root.join("templates").join(format!("{}.tmpl", template))
    }

    /// Path of a static file relative to this namespace
    pub fn asset_path(&self, relative: &str) -> PathBuf {
        self.root.join(relative.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_scoping() {
        let assets = AssetFs::new("/srv/site/assets").namespace("widgets");
        assert_eq!(assets.root(), Path::new("/srv/site/assets/widgets"));
    }

    #[test]
    fn test_template_path() {
        let assets = AssetFs::new("/srv/site/assets").namespace("widgets");
        assert_eq!(
            assets.template_path("banner"),
            PathBuf::from("/srv/site/assets/widgets/templates/banner.tmpl")
        );
    }

    #[test]
    fn test_asset_path_strips_leading_slash() {
        let assets = AssetFs::new("/srv/site/assets");
        assert_eq!(
            assets.asset_path("/images/Widget-Products.png"),
            PathBuf::from("/srv/site/assets/images/Widget-Products.png")
        );
    }
}
