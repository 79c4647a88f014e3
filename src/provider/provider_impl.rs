use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use super::GraphProvider;
use crate::analyzer::DependencyClassifier;
use crate::core::GraphNode;
use crate::error::ProviderError;
use crate::manifest::{read_manifest, read_root_manifest};
use crate::module_resolver::ModuleResolver;

/// Options the provider is constructed with
///
/// `root_configuration` and `root_config_path` are attached to the root
/// node as given; the provider never looks inside them.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderOptions {
    pub cwd: PathBuf,
    pub root_configuration: Option<serde_json::Value>,
    pub root_config_path: Option<PathBuf>,
}

impl ProviderOptions {
    pub fn builder() -> ProviderOptionsBuilder {
        ProviderOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct ProviderOptionsBuilder {
    cwd: Option<PathBuf>,
    root_configuration: Option<serde_json::Value>,
    root_config_path: Option<PathBuf>,
}

impl ProviderOptionsBuilder {
    pub fn new() -> Self {
        Self {
            cwd: None,
            root_configuration: None,
            root_config_path: None,
        }
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn with_root_configuration(mut self, configuration: Option<serde_json::Value>) -> Self {
        self.root_configuration = configuration;
        self
    }

    pub fn with_root_config_path(mut self, config_path: Option<PathBuf>) -> Self {
        self.root_config_path = config_path;
        self
    }

    pub fn build(self) -> Result<ProviderOptions, ProviderError> {
        Ok(ProviderOptions {
            cwd: self.cwd.ok_or_else(|| ProviderError::Configuration {
                message: "Missing required field: cwd".to_string(),
            })?,
            root_configuration: self.root_configuration,
            root_config_path: self.root_config_path,
        })
    }
}

/// Builds graph nodes from the packages installed under `node_modules`
///
/// Nothing is cached between calls: every expansion re-resolves and re-reads
/// its children from disk. Deduplication of nodes by `path` is up to the
/// caller.
#[derive(Debug, Clone)]
pub struct NodePackageProvider {
    options: ProviderOptions,
    resolver: ModuleResolver,
    classifier: DependencyClassifier,
}

impl NodePackageProvider {
    pub fn new(options: ProviderOptions) -> Self {
        let resolver = ModuleResolver::new();
        Self {
            options,
            resolver,
            classifier: DependencyClassifier::new(resolver),
        }
    }

    fn package_node(&self, module_path: PathBuf, optional: bool) -> Result<GraphNode, ProviderError> {
        debug!(
            "Reading package.json in directory {}...",
            module_path.display()
        );
        let manifest = read_manifest(&module_path)?;
        let pending_dependencies = self.classifier.classify(&manifest, &module_path, false);

        Ok(GraphNode {
            id: manifest.name,
            version: manifest.version,
            path: module_path,
            optional,
            configuration: None,
            config_path: None,
            pending_dependencies,
        })
    }
}

impl GraphProvider for NodePackageProvider {
    fn get_root_node(&self) -> Result<GraphNode, ProviderError> {
        let (manifest, manifest_dir) = read_root_manifest(&self.options.cwd)?;
        let module_path = canonical_dir(&manifest_dir)?;
        let pending_dependencies = self.classifier.classify(&manifest, &module_path, true);

        Ok(GraphNode {
            id: manifest.name,
            version: manifest.version,
            path: module_path,
            optional: false,
            configuration: self.options.root_configuration.clone(),
            config_path: self.options.root_config_path.clone(),
            pending_dependencies,
        })
    }

    fn expand(&self, node: &GraphNode) -> Result<Vec<GraphNode>, ProviderError> {
        if !node.has_pending_dependencies() {
            return Ok(Vec::new());
        }

        debug!("Resolving dependencies of {}...", node.display_id());
        node.pending_dependencies
            .par_iter()
            .map(|dep| {
                let module_path = self.resolver.resolve_module_path(&node.path, &dep.name)?;
                self.package_node(module_path, dep.optional)
            })
            .collect()
    }
}

fn canonical_dir(dir: &Path) -> Result<PathBuf, ProviderError> {
    dir.canonicalize().map_err(|source| ProviderError::FileRead {
        path: dir.to_path_buf(),
        source,
    })
}
