use crate::models::SchemaNode;

/// Compact a leafref target path for display. Local prefixes are
/// removed; a prefix is emitted only on the first segment after the
/// path crosses into another module.
pub fn compact_target(path: &str, owner_prefix: &str) -> String {
    let mut current: &str = owner_prefix;
    let mut target: Vec<String> = Vec::new();

    for (i, segment) in path.split('/').enumerate() {
        // absolute expressions carry a leading empty segment
        if i == 0 && segment.is_empty() {
            continue;
        }
        let (prefix, name) = match segment.split_once(':') {
            Some((prefix, name)) => (prefix, name),
            None => (current, segment),
        };
        if prefix == current {
            target.push(name.to_string());
        } else {
            target.push(format!("{}:{}", prefix, name));
            current = prefix;
        }
    }

    format!("-> {}", target.join("/"))
}

/// Type column contents for a node: the compacted target for leafrefs,
/// the literal type name otherwise, empty if the node carries no type.
pub fn type_label(node: &SchemaNode, fallback_prefix: &str) -> String {
    let type_spec = match &node.type_spec {
        Some(type_spec) => type_spec,
        None => return String::new(),
    };
    if type_spec.is_leafref() {
        if let Some(path) = &type_spec.path {
            let prefix = node
                .owner
                .as_ref()
                .map(|owner| owner.prefix.as_str())
                .unwrap_or(fallback_prefix);
            return compact_target(path, prefix);
        }
    }
    type_spec.name.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ModuleIdentity, NodeKind, TypeSpec};

    #[test]
    fn test_compact_prefix_boundaries() {
        assert_eq!(compact_target("/a:x/a:y/b:z/b:w", "a"), "-> x/y/b:z/w");
    }

    #[test]
    fn test_compact_is_idempotent() {
        // a path that is already compact comes back unchanged
        assert_eq!(compact_target("x/y/b:z/w", "a"), "-> x/y/b:z/w");
        assert_eq!(compact_target("x/y", "a"), "-> x/y");
    }

    #[test]
    fn test_compact_foreign_prefix_sticks() {
        // once the path crosses into b, bare segments stay local to b
        assert_eq!(compact_target("/b:z/w/a:q", "a"), "-> b:z/w/a:q");
    }

    #[test]
    fn test_type_label_plain_type() {
        let mut node = SchemaNode::new(NodeKind::Leaf, "mtu");
        node.type_spec = Some(TypeSpec::named("uint16"));
        assert_eq!(type_label(&node, "ex"), "uint16");
    }

    #[test]
    fn test_type_label_missing_type() {
        let node = SchemaNode::new(NodeKind::Leaf, "mtu");
        assert_eq!(type_label(&node, "ex"), "");
    }

    #[test]
    fn test_type_label_leafref_without_path() {
        let mut node = SchemaNode::new(NodeKind::Leaf, "ref");
        node.type_spec = Some(TypeSpec::named("leafref"));
        assert_eq!(type_label(&node, "ex"), "leafref");
    }

    #[test]
    fn test_type_label_uses_owner_prefix() {
        let mut node = SchemaNode::new(NodeKind::Leaf, "ref");
        node.owner = Some(ModuleIdentity {
            name: "other".to_string(),
            prefix: "o".to_string(),
        });
        node.type_spec = Some(TypeSpec::leafref("/o:sys/o:id"));
        assert_eq!(type_label(&node, "ex"), "-> sys/id");
    }
}
