//! node_modules lookup for installed packages
//!
//! Resolution walks from a base directory up to the filesystem root and
//! checks `<dir>/node_modules/<name>/package.json` at every level, first
//! match wins. The result is always a canonical directory so that the same
//! package reached through different symlink chains compares equal.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::constants::manifest::{MANIFEST_FILE, MODULES_DIR};
use crate::error::ProviderError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleResolver;

impl ModuleResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve `module_name` to the real directory of its installed package
    pub fn resolve_module_path(
        &self,
        base_dir: &Path,
        module_name: &str,
    ) -> Result<PathBuf, ProviderError> {
        debug!("Resolving module path for '{module_name}'...");

        let not_found = || ProviderError::ModuleResolution {
            module: module_name.to_string(),
            base_dir: base_dir.to_path_buf(),
            reason: format!(
                "Cannot find module '{module_name}/{MANIFEST_FILE}' from '{}'",
                base_dir.display()
            ),
        };

        if !is_package_name(module_name) {
            return Err(not_found());
        }

        let manifest_path = self
            .lookup_paths(base_dir)
            .into_iter()
            .map(|modules_dir| modules_dir.join(module_name).join(MANIFEST_FILE))
            .find(|candidate| candidate.is_file())
            .ok_or_else(not_found)?;

        let real_manifest =
            manifest_path
                .canonicalize()
                .map_err(|e| ProviderError::ModuleResolution {
                    module: module_name.to_string(),
                    base_dir: base_dir.to_path_buf(),
                    reason: format!("Failed to resolve '{}': {e}", manifest_path.display()),
                })?;

        let module_path = real_manifest
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(not_found)?;

        debug!(
            "Resolved module {module_name} to path {}",
            module_path.display()
        );
        Ok(module_path)
    }

    /// Every `node_modules` directory searched from `base_dir`, nearest first
    ///
    /// The base directory is canonicalized first. Ancestors that are
    /// themselves called `node_modules` contribute no entry.
    pub fn lookup_paths(&self, base_dir: &Path) -> Vec<PathBuf> {
        let base = base_dir
            .canonicalize()
            .or_else(|_| std::path::absolute(base_dir))
            .unwrap_or_else(|_| base_dir.to_path_buf());

        base.ancestors()
            .filter(|dir| dir.file_name().is_none_or(|name| name != MODULES_DIR))
            .map(|dir| dir.join(MODULES_DIR))
            .collect()
    }
}

// Bare specifiers only: no empty, absolute or dot segments
fn is_package_name(name: &str) -> bool {
    !name.is_empty()
        && Path::new(name)
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
}
