//! Artifact path resolution.
//!
//! Screenshots, saved files and animated captures are recorded as absolute
//! paths by the engine; links in the report must be relative to the output
//! root. Resolution is pure path arithmetic; nothing here touches the file
//! system.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// A link to one on-disk artifact, ready for embedding
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactLink {
    /// Bare file name, e.g. "screenshot-001.png"
    pub name: String,

    /// Path relative to the report output root, '/'-separated
    pub href: String,
}

/// Resolve one artifact against the report output root
pub fn artifact_link(path: &Path, output_root: &Path) -> ArtifactLink {
    ArtifactLink {
        name: path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default(),
        href: relative_href(path, output_root),
    }
}

/// Resolve every artifact in a list, preserving order
pub fn artifact_links(paths: &[PathBuf], output_root: &Path) -> Vec<ArtifactLink> {
    paths.iter().map(|path| artifact_link(path, output_root)).collect()
}

/// Path relative to the output root with '/' separators.
///
/// An artifact outside the root keeps its original path; the link still
/// resolves when the report is viewed in place.
pub fn relative_href(path: &Path, output_root: &Path) -> String {
    match path.strip_prefix(output_root) {
        Ok(relative) => relative
            .components()
            .map(|part| part.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_href_inside_root() {
        let href = relative_href(
            Path::new("/runs/out/emulator-5554/shot-001.png"),
            Path::new("/runs/out"),
        );
        assert_eq!(href, "emulator-5554/shot-001.png");
    }

    #[test]
    fn test_relative_href_outside_root_keeps_path() {
        let href = relative_href(Path::new("/elsewhere/shot.png"), Path::new("/runs/out"));
        assert_eq!(href, "/elsewhere/shot.png");
    }

    #[test]
    fn test_artifact_link_carries_file_name() {
        let link = artifact_link(Path::new("/runs/out/dev/login.gif"), Path::new("/runs/out"));
        assert_eq!(link.name, "login.gif");
        assert_eq!(link.href, "dev/login.gif");
    }

    #[test]
    fn test_empty_list_resolves_to_empty() {
        let links = artifact_links(&[], Path::new("/runs/out"));
        assert!(links.is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let paths = vec![
            PathBuf::from("/runs/out/d/2.png"),
            PathBuf::from("/runs/out/d/1.png"),
        ];
        let links = artifact_links(&paths, Path::new("/runs/out"));
        assert_eq!(links[0].href, "d/2.png");
        assert_eq!(links[1].href, "d/1.png");
    }
}
