//! package.json discovery and parsing

use std::path::{Component, Path, PathBuf};

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::constants::manifest::MANIFEST_FILE;
use crate::core::DependencyKind;
use crate::error::{ManifestParseError, ProviderError};

/// Dependency name to version range, in the order the file declares them
pub type DependencyMap = Map<String, Value>;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    pub name: Option<String>,
    pub version: Option<String>,
    pub dependencies: Option<DependencyMap>,
    pub dev_dependencies: Option<DependencyMap>,
    pub optional_dependencies: Option<DependencyMap>,
}

impl PackageJson {
    pub fn parse_str(content: &str, file: &Path) -> Result<Self, ProviderError> {
        serde_json::from_str(content).map_err(|e| {
            let span = byte_offset(content, e.line(), e.column())
                .map(|offset| SourceSpan::new(offset.into(), 1));

            ProviderError::ManifestParse(Box::new(ManifestParseError {
                file: file.display().to_string(),
                source_code: NamedSource::new(file.display().to_string(), content.to_string()),
                span,
                source: e,
            }))
        })
    }

    pub fn parse_file(path: &Path) -> Result<Self, ProviderError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ProviderError::ManifestNotFound {
                    searched: path.parent().unwrap_or(path).to_path_buf(),
                }
            } else {
                ProviderError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        Self::parse_str(&content, path)
    }

    fn mapping(&self, kind: DependencyKind) -> Option<&DependencyMap> {
        match kind {
            DependencyKind::Production => self.dependencies.as_ref(),
            DependencyKind::Development => self.dev_dependencies.as_ref(),
            DependencyKind::Optional => self.optional_dependencies.as_ref(),
        }
    }

    /// Names declared under `kind`; an absent mapping yields nothing
    pub fn dependency_names(&self, kind: DependencyKind) -> Vec<&str> {
        self.mapping(kind)
            .map(|deps| deps.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

/// Read the manifest sitting directly inside `dir`
pub fn read_manifest(dir: &Path) -> Result<PackageJson, ProviderError> {
    let manifest_path = dir.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(ProviderError::ManifestNotFound {
            searched: dir.to_path_buf(),
        });
    }

    PackageJson::parse_file(&manifest_path)
}

/// Find the nearest manifest at or above `start_dir`
///
/// Returns the parsed manifest together with the directory it was found in.
pub fn read_root_manifest(start_dir: &Path) -> Result<(PackageJson, PathBuf), ProviderError> {
    let searched = std::path::absolute(start_dir)
        .map(|path| normalize_lexically(&path))
        .map_err(|source| ProviderError::FileRead {
            path: start_dir.to_path_buf(),
            source,
        })?;

    for dir in searched.ancestors() {
        let candidate = dir.join(MANIFEST_FILE);
        if candidate.is_file() {
            let manifest = PackageJson::parse_file(&candidate)?;
            return Ok((manifest, dir.to_path_buf()));
        }
    }

    Err(ProviderError::ManifestNotFound { searched })
}

// Drops `.` and folds `..` without touching the filesystem; `..` at the root
// stays at the root
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

// serde_json reports 1-based line/column; miette wants a byte offset
fn byte_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();

    Some((line_start + column.saturating_sub(1)).min(content.len().saturating_sub(1)))
}
