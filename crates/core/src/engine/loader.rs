use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::models::{Module, ModuleIdentity, NodeKind, SchemaNode};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported module document format: {0}")]
    UnsupportedFormat(PathBuf),
    #[error("module '{0}' not found on the search path")]
    ModuleNotFound(String),
}

/// Loads pre-resolved module documents and links them into the graph
/// the renderer consumes: owner identities stamped, config inheritance
/// resolved, list keys marked, augments attributed and injected.
#[derive(Debug, Default)]
pub struct ModuleLoader {
    search_dirs: Vec<PathBuf>,
}

impl ModuleLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dirs.push(dir.into());
        self
    }

    /// Load the given module documents, in order, and link them
    pub fn load(&self, files: &[PathBuf]) -> Result<Vec<Module>, LoadError> {
        let mut modules = Vec::with_capacity(files.len());
        for file in files {
            modules.push(self.read_document(file)?);
        }
        self.link(&mut modules)?;
        Ok(modules)
    }

    /// Parse one module document by extension
    pub fn read_document(&self, path: &Path) -> Result<Module, LoadError> {
        let content = fs::read_to_string(path)?;
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(serde_json::from_str(&content)?),
            "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
            _ => Err(LoadError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Find a named module document on the search path
    fn find_document(&self, name: &str) -> Option<PathBuf> {
        for dir in &self.search_dirs {
            for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
                if entry.file_type().is_dir() {
                    continue;
                }
                let path = entry.path();
                let stem = path.file_stem().map(|s| s.to_string_lossy().to_string());
                let ext = path
                    .extension()
                    .map(|e| e.to_string_lossy().to_lowercase())
                    .unwrap_or_default();
                if stem.as_deref() == Some(name) && matches!(ext.as_str(), "json" | "yaml" | "yml")
                {
                    return Some(path.to_path_buf());
                }
            }
        }
        None
    }

    fn link(&self, modules: &mut [Module]) -> Result<(), LoadError> {
        // includes first: a missing referenced submodule is fatal
        for module in modules.iter_mut() {
            self.resolve_includes(module)?;
        }

        // prefix -> module name, for augment target attribution
        let mut prefixes: Vec<(String, String)> = Vec::new();
        for module in modules.iter() {
            prefixes.push((module.prefix.clone(), module.name.clone()));
            for sub in &module.submodules {
                prefixes.push((sub.prefix.clone(), sub.name.clone()));
            }
        }

        for module in modules.iter_mut() {
            let identity = module.identity();
            stamp_owner(&mut module.children, &identity);
            resolve_config(&mut module.children, Some(true));
            mark_list_keys(&mut module.children);
            link_augments(&mut module.augments, &identity, &prefixes);
            for sub in &mut module.submodules {
                let sub_identity = sub.identity();
                link_augments(&mut sub.augments, &sub_identity, &prefixes);
            }
        }

        // inject augment children into targets that are loaded here;
        // augments kept on their source module still drive the
        // "augment <path>:" section when the target is not rendered
        let injections = collect_injections(modules);
        for (target_module, path, children) in injections {
            if let Some(module) = modules.iter_mut().find(|m| m.name == target_module) {
                inject(module, &path, children);
            }
        }

        Ok(())
    }

    fn resolve_includes(&self, module: &mut Module) -> Result<(), LoadError> {
        for name in module.includes.clone() {
            if module.submodules.iter().any(|s| s.name == name) {
                continue;
            }
            let path = self
                .find_document(&name)
                .ok_or_else(|| LoadError::ModuleNotFound(name.clone()))?;
            module.submodules.push(self.read_document(&path)?);
        }
        Ok(())
    }
}

/// Stamp the owning-module identity down a subtree. Nodes that already
/// carry an owner (pre-resolved augmented-in children) keep it, and
/// their descendants inherit it.
fn stamp_owner(nodes: &mut [SchemaNode], owner: &ModuleIdentity) {
    for node in nodes {
        let effective = node.owner.clone().unwrap_or_else(|| owner.clone());
        node.owner = Some(effective.clone());
        stamp_owner(&mut node.children, &effective);
    }
}

/// Resolve config inheritance down data trees. Below rpcs, actions and
/// notifications the rendering mode decides access, so config stays
/// untouched there.
fn resolve_config(nodes: &mut [SchemaNode], inherited: Option<bool>) {
    for node in nodes {
        match node.kind {
            NodeKind::Rpc
            | NodeKind::Action
            | NodeKind::Input
            | NodeKind::Output
            | NodeKind::Notification => {
                resolve_config(&mut node.children, None);
            }
            _ => {
                if node.config.is_none() {
                    node.config = inherited;
                }
                resolve_config(&mut node.children, node.config);
            }
        }
    }
}

/// Mark leaves named in their parent list's key statement
fn mark_list_keys(nodes: &mut [SchemaNode]) {
    for node in nodes {
        if node.kind == NodeKind::List {
            if let Some(key) = node.key.clone() {
                for name in key.split_whitespace() {
                    for child in &mut node.children {
                        if child.kind == NodeKind::Leaf && child.name == name {
                            child.is_key = true;
                        }
                    }
                }
            }
        }
        mark_list_keys(&mut node.children);
    }
}

/// Stamp augment children with the source module identity and
/// attribute unattributed targets through the prefix map
fn link_augments(
    augments: &mut [crate::models::Augment],
    source: &ModuleIdentity,
    prefixes: &[(String, String)],
) {
    for augment in augments {
        stamp_owner(&mut augment.children, source);
        resolve_config(&mut augment.children, None);
        mark_list_keys(&mut augment.children);
        if augment.target_module.is_none() {
            if let Some(prefix) = first_segment_prefix(&augment.target) {
                augment.target_module = prefixes
                    .iter()
                    .find(|(p, _)| p == prefix)
                    .map(|(_, name)| name.clone());
            }
        }
    }
}

fn first_segment_prefix(target: &str) -> Option<&str> {
    let first = target.split('/').find(|s| !s.is_empty())?;
    first.split_once(':').map(|(prefix, _)| prefix)
}

/// Local-name segments of an augment target path
fn target_segments(target: &str) -> Vec<String> {
    target
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| s.split_once(':').map_or(s, |(_, name)| name).to_string())
        .collect()
}

type Injection = (String, Vec<String>, Vec<SchemaNode>);

fn collect_injections(modules: &[Module]) -> Vec<Injection> {
    let mut injections = Vec::new();
    for module in modules {
        let mut sources: Vec<&Module> = vec![module];
        sources.extend(module.submodules.iter());
        for source in sources {
            for augment in &source.augments {
                let target = match &augment.target_module {
                    Some(target) if *target != module.name => target,
                    _ => continue,
                };
                if modules.iter().any(|m| m.name == *target) {
                    injections.push((
                        target.clone(),
                        target_segments(&augment.target),
                        augment.children.clone(),
                    ));
                }
            }
        }
    }
    injections
}

fn inject(module: &mut Module, path: &[String], mut children: Vec<SchemaNode>) {
    if let Some(target) = find_node_mut(&mut module.children, path) {
        resolve_config(&mut children, target.config);
        target.children.append(&mut children);
    }
}

fn find_node_mut<'a>(
    nodes: &'a mut Vec<SchemaNode>,
    path: &[String],
) -> Option<&'a mut SchemaNode> {
    let (first, rest) = path.split_first()?;
    let node = nodes.iter_mut().find(|n| n.name == *first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        find_node_mut(&mut node.children, rest)
    }
}
