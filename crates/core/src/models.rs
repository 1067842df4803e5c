use serde::{Deserialize, Serialize};

/// Statement keyword of a schema node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Container,
    List,
    Leaf,
    LeafList,
    Choice,
    Case,
    #[serde(rename = "anyxml")]
    AnyXml,
    #[serde(rename = "anydata")]
    AnyData,
    Rpc,
    Action,
    Input,
    Output,
    Notification,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Container => "container",
            NodeKind::List => "list",
            NodeKind::Leaf => "leaf",
            NodeKind::LeafList => "leaf-list",
            NodeKind::Choice => "choice",
            NodeKind::Case => "case",
            NodeKind::AnyXml => "anyxml",
            NodeKind::AnyData => "anydata",
            NodeKind::Rpc => "rpc",
            NodeKind::Action => "action",
            NodeKind::Input => "input",
            NodeKind::Output => "output",
            NodeKind::Notification => "notification",
        }
    }

    /// True for keywords that define data nodes (the "data nodes"
    /// section of a module tree)
    pub fn is_data_def(&self) -> bool {
        matches!(
            self,
            NodeKind::Container
                | NodeKind::List
                | NodeKind::Leaf
                | NodeKind::LeafList
                | NodeKind::Choice
                | NodeKind::Case
                | NodeKind::AnyXml
                | NodeKind::AnyData
        )
    }

    /// True for keywords whose statement carries a child body. Leafs
    /// and anyxml/anydata terminate the tree.
    pub fn has_child_body(&self) -> bool {
        matches!(
            self,
            NodeKind::Container
                | NodeKind::List
                | NodeKind::Choice
                | NodeKind::Case
                | NodeKind::Rpc
                | NodeKind::Action
                | NodeKind::Input
                | NodeKind::Output
                | NodeKind::Notification
        )
    }

    /// Choice and case nodes are transparent for alignment and
    /// continuation purposes.
    pub fn is_transparent(&self) -> bool {
        matches!(self, NodeKind::Choice | NodeKind::Case)
    }
}

/// Lifecycle status of a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Current,
    Deprecated,
    Obsolete,
    /// Unrecognized status values degrade to current rather than fail
    #[serde(other)]
    Unknown,
}

/// Module a node is defined in: module name plus the prefix the
/// module declares for itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleIdentity {
    pub name: String,
    pub prefix: String,
}

/// Resolved type of a leaf or leaf-list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSpec {
    /// Type name ("string", "uint32", "leafref", ...)
    pub name: String,
    /// Target path expression, present only for leafrefs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl TypeSpec {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
        }
    }

    pub fn leafref(path: impl Into<String>) -> Self {
        Self {
            name: "leafref".to_string(),
            path: Some(path.into()),
        }
    }

    pub fn is_leafref(&self) -> bool {
        self.name == "leafref"
    }
}

/// One node of a resolved schema graph. The renderer only reads these;
/// resolution (config inheritance, owner identity, key marking) has
/// already happened by the time a node reaches it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SchemaNode {
    pub kind: NodeKind,
    pub name: String,
    /// Module the node is defined in; differs from the rendered module
    /// for augmented-in nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<ModuleIdentity>,
    /// Tri-state config flag: Some(true) read-write, Some(false)
    /// read-only, None unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandatory: Option<bool>,
    /// Presence statement argument, if the container is a presence
    /// container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence: Option<String>,
    /// Key statement argument of a list (whitespace-separated leaf
    /// names)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_spec: Option<TypeSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub if_features: Vec<String>,
    /// True if this leaf is named in its parent list's key statement
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_key: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SchemaNode>,
}

impl SchemaNode {
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            owner: None,
            config: None,
            status: None,
            mandatory: None,
            presence: None,
            key: None,
            type_spec: None,
            if_features: Vec::new(),
            is_key: false,
            children: Vec::new(),
        }
    }
}

/// Header keyword of a module document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Module,
    Submodule,
}

impl ModuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Module => "module",
            ModuleKind::Submodule => "submodule",
        }
    }
}

/// An augment statement: children injected into a target node that
/// lives in another module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Augment {
    /// Target path expression, as written in the source module
    pub target: String,
    /// Name of the module owning the target node; None when the
    /// upstream resolver could not attribute it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_module: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SchemaNode>,
}

/// A named schema unit: one module or submodule document, with its
/// resolved top-level children and the augments it declares
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Module {
    #[serde(default = "default_module_kind")]
    pub kind: ModuleKind,
    pub name: String,
    pub prefix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub belongs_to: Option<String>,
    /// Names of included submodules, resolved into `submodules` by the
    /// loader
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submodules: Vec<Module>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub augments: Vec<Augment>,
    /// Ordered top-level schema nodes: data definitions, rpcs and
    /// notifications interleaved as declared
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SchemaNode>,
}

fn default_module_kind() -> ModuleKind {
    ModuleKind::Module
}

impl Module {
    pub fn new(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            kind: ModuleKind::Module,
            name: name.into(),
            prefix: prefix.into(),
            belongs_to: None,
            includes: Vec::new(),
            submodules: Vec::new(),
            augments: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn identity(&self) -> ModuleIdentity {
        ModuleIdentity {
            name: self.name.clone(),
            prefix: self.prefix.clone(),
        }
    }
}
