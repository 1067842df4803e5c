use crate::models::{NodeKind, SchemaNode, Status};

/// Ambient context a node is rendered in. Decides the access flags of
/// everything below an rpc, notification or augment statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Data,
    Augment,
    Rpc,
    Input,
    Output,
    Notification,
}

/// Single-character lifecycle marker printed before the branch
pub fn status_marker(node: &SchemaNode) -> char {
    match node.status {
        None | Some(Status::Current) => '+',
        Some(Status::Deprecated) => 'x',
        Some(Status::Obsolete) => 'o',
        // unrecognized statuses were already degraded at load time;
        // treat like current
        Some(Status::Unknown) => '+',
    }
}

/// Two-character access flags printed after the branch
pub fn access_flags(node: &SchemaNode, mode: Mode) -> &'static str {
    if mode == Mode::Input {
        "-w"
    } else if matches!(node.kind, NodeKind::Rpc | NodeKind::Action) {
        "-x"
    } else if node.kind == NodeKind::Notification {
        "-n"
    } else if node.config == Some(true) {
        "rw"
    } else if node.config == Some(false) || mode == Mode::Output || mode == Mode::Notification {
        "ro"
    } else {
        "--"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NodeKind;

    fn leaf(config: Option<bool>) -> SchemaNode {
        let mut node = SchemaNode::new(NodeKind::Leaf, "l");
        node.config = config;
        node
    }

    #[test]
    fn test_status_marker_literals() {
        let mut node = SchemaNode::new(NodeKind::Leaf, "l");
        assert_eq!(status_marker(&node), '+');
        node.status = Some(Status::Current);
        assert_eq!(status_marker(&node), '+');
        node.status = Some(Status::Deprecated);
        assert_eq!(status_marker(&node), 'x');
        node.status = Some(Status::Obsolete);
        assert_eq!(status_marker(&node), 'o');
        node.status = Some(Status::Unknown);
        assert_eq!(status_marker(&node), '+');
    }

    #[test]
    fn test_input_mode_wins_over_everything() {
        assert_eq!(access_flags(&leaf(Some(true)), Mode::Input), "-w");
        let rpc = SchemaNode::new(NodeKind::Rpc, "r");
        assert_eq!(access_flags(&rpc, Mode::Input), "-w");
    }

    #[test]
    fn test_structural_kinds() {
        let rpc = SchemaNode::new(NodeKind::Rpc, "r");
        assert_eq!(access_flags(&rpc, Mode::Data), "-x");
        let action = SchemaNode::new(NodeKind::Action, "a");
        assert_eq!(access_flags(&action, Mode::Data), "-x");
        let notif = SchemaNode::new(NodeKind::Notification, "n");
        assert_eq!(access_flags(&notif, Mode::Data), "-n");
    }

    #[test]
    fn test_config_tristate() {
        assert_eq!(access_flags(&leaf(Some(true)), Mode::Data), "rw");
        assert_eq!(access_flags(&leaf(Some(false)), Mode::Data), "ro");
        assert_eq!(access_flags(&leaf(None), Mode::Data), "--");
    }

    #[test]
    fn test_output_and_notification_modes_force_ro() {
        assert_eq!(access_flags(&leaf(None), Mode::Output), "ro");
        assert_eq!(access_flags(&leaf(None), Mode::Notification), "ro");
        // explicit rw still wins inside output
        assert_eq!(access_flags(&leaf(Some(true)), Mode::Output), "rw");
    }

    #[test]
    fn test_flags_in_enumerated_set() {
        let all = ["-w", "-x", "-n", "rw", "ro", "--"];
        for mode in [
            Mode::Data,
            Mode::Augment,
            Mode::Rpc,
            Mode::Input,
            Mode::Output,
            Mode::Notification,
        ] {
            for config in [None, Some(true), Some(false)] {
                assert!(all.contains(&access_flags(&leaf(config), mode)));
            }
        }
    }
}
