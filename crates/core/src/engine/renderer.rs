use std::sync::OnceLock;

use regex::Regex;
use termcolor::Color;

use crate::config::RenderConfig;
use crate::engine::leafref::type_label;
use crate::engine::symbols::{access_flags, status_marker, Mode};
use crate::models::{Module, NodeKind, SchemaNode};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Renderer for producing the aligned tree listing of a set of modules
pub struct TreeRenderer {
    config: RenderConfig,
}

impl TreeRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render the modules as plain text
    pub fn render(&self, modules: &[Module]) -> String {
        self.render_with(modules, false)
    }

    /// Render the modules with ANSI color codes
    pub fn render_ansi(&self, modules: &[Module]) -> String {
        self.render_with(modules, true)
    }

    fn render_with(&self, modules: &[Module], ansi: bool) -> String {
        let mut out = String::with_capacity(4096);
        for module in modules {
            self.emit_module(&mut out, module, modules, ansi);
        }
        out
    }

    /// Emit one module: data nodes, externally-targeted augments, rpcs
    /// and notifications, each section narrowing the shared path
    /// cursor and printing the module header lazily.
    fn emit_module(&self, out: &mut String, module: &Module, render_set: &[Module], ansi: bool) {
        let depth = self.config.depth;
        let mut path: Option<&[String]> = self.config.path.as_deref();
        let mut header_done = false;

        // data nodes
        let mut chs: Vec<&SchemaNode> = module
            .children
            .iter()
            .filter(|ch| ch.kind.is_data_def())
            .collect();
        if let Some(p) = path {
            if let Some(first) = p.first() {
                chs.retain(|ch| ch.name == *first);
                path = Some(&p[1..]);
            }
        }
        if !chs.is_empty() {
            self.emit_header(out, module, &mut header_done, ansi);
            self.emit_children(out, &chs, module, "", path, Mode::Data, depth, 0, ansi);
        }

        // augments declared here (or in an included submodule) whose
        // target module is not part of this render set; targets inside
        // the set already carry the injected children
        let mut sources: Vec<&Module> = vec![module];
        sources.extend(module.submodules.iter());
        for &source in &sources {
            for augment in &source.augments {
                let visible = match &augment.target_module {
                    // unattributed target: assume already visible
                    None => true,
                    Some(target) => {
                        render_set.iter().any(|m| m.name == *target)
                            || module.submodules.iter().any(|m| m.name == *target)
                    }
                };
                if visible {
                    continue;
                }
                self.emit_header(out, module, &mut header_done, ansi);
                out.push_str("augment ");
                out.push_str(&augment.target);
                out.push_str(":\n");
                let chs: Vec<&SchemaNode> = augment.children.iter().collect();
                self.emit_children(out, &chs, source, "", path, Mode::Augment, depth, 0, ansi);
            }
        }

        // rpcs
        let mut rpcs: Vec<&SchemaNode> = module
            .children
            .iter()
            .filter(|ch| ch.kind == NodeKind::Rpc)
            .collect();
        if let Some(p) = path {
            match p.first() {
                Some(first) => {
                    rpcs.retain(|ch| ch.name == *first);
                    path = Some(&p[1..]);
                }
                None => rpcs.clear(),
            }
        }
        if !rpcs.is_empty() {
            self.emit_header(out, module, &mut header_done, ansi);
            out.push_str("rpcs:\n");
            self.emit_children(out, &rpcs, module, "", path, Mode::Rpc, depth, 0, ansi);
        }

        // notifications
        let mut notifs: Vec<&SchemaNode> = module
            .children
            .iter()
            .filter(|ch| ch.kind == NodeKind::Notification)
            .collect();
        if let Some(p) = path {
            match p.first() {
                Some(first) => {
                    notifs.retain(|ch| ch.name == *first);
                }
                None => notifs.clear(),
            }
        }
        if !notifs.is_empty() {
            self.emit_header(out, module, &mut header_done, ansi);
            out.push_str("notifications:\n");
            self.emit_children(out, &notifs, module, "", path, Mode::Notification, depth, 0, ansi);
        }
    }

    fn emit_header(&self, out: &mut String, module: &Module, header_done: &mut bool, ansi: bool) {
        if *header_done {
            return;
        }
        *header_done = true;
        let line = match &module.belongs_to {
            Some(parent) => format!(
                "{}: {} (belongs-to {})",
                module.kind.as_str(),
                module.name,
                parent
            ),
            None => format!("{}: {}", module.kind.as_str(), module.name),
        };
        if ansi {
            out.push_str(BOLD);
            out.push_str(&line);
            out.push_str(RESET);
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }

    /// Emit a sibling group: compute the shared name-column width,
    /// pick bar vs. blank continuation per child, honor the depth
    /// budget.
    #[allow(clippy::too_many_arguments)]
    fn emit_children(
        &self,
        out: &mut String,
        children: &[&SchemaNode],
        module: &Module,
        prefix: &str,
        path: Option<&[String]>,
        mode: Mode,
        depth: Option<usize>,
        width: usize,
        ansi: bool,
    ) {
        if depth == Some(0) {
            if !children.is_empty() {
                out.push_str(prefix);
                out.push_str("   ...\n");
            }
            return;
        }

        let width = if width == 0 {
            group_width(children, module)
        } else {
            width
        };

        // a trailing empty output never prints, so the node before it
        // already is the last visible sibling
        let last_is_empty_output = children
            .last()
            .is_some_and(|last| last.kind == NodeKind::Output && last.children.is_empty());

        for (i, &child) in children.iter().enumerate() {
            if matches!(child.kind, NodeKind::Input | NodeKind::Output)
                && child.children.is_empty()
            {
                continue;
            }
            let is_last = i == children.len() - 1 || last_is_empty_output;
            let newprefix = if is_last {
                format!("{}   ", prefix)
            } else {
                format!("{}  |", prefix)
            };
            let child_mode = match child.kind {
                NodeKind::Input => Mode::Input,
                NodeKind::Output => Mode::Output,
                _ => mode,
            };
            self.emit_node(out, child, module, &newprefix, path, child_mode, depth, width, ansi);
        }
    }

    /// Emit one node line, then recurse into its children subject to
    /// the depth budget and the path filter.
    #[allow(clippy::too_many_arguments)]
    fn emit_node(
        &self,
        out: &mut String,
        node: &SchemaNode,
        module: &Module,
        prefix: &str,
        path: Option<&[String]>,
        mode: Mode,
        depth: Option<usize>,
        width: usize,
        ansi: bool,
    ) {
        // the last continuation char of the prefix is replaced by the
        // status marker and branch
        out.push_str(&prefix[..prefix.len().saturating_sub(1)]);
        let marker = status_marker(node);
        if ansi {
            out.push_str(color_code(status_color(marker)));
            out.push(marker);
            out.push_str(RESET);
        } else {
            out.push(marker);
        }
        out.push_str("--");

        let flags = access_flags(node, mode);
        let mut name = qualified_name(node, module);
        match node.kind {
            NodeKind::List => {
                name.push('*');
                out.push_str(flags);
                out.push(' ');
                out.push_str(&name);
            }
            NodeKind::Container => {
                if node.presence.is_some() {
                    name.push('!');
                }
                out.push_str(flags);
                out.push(' ');
                out.push_str(&name);
            }
            NodeKind::Choice => {
                out.push_str(flags);
                if node.mandatory.unwrap_or(false) {
                    out.push_str(&format!(" ({})", node.name));
                } else {
                    out.push_str(&format!(" ({})?", node.name));
                }
            }
            NodeKind::Case => {
                out.push_str(&format!(":({})", node.name));
            }
            _ => {
                if node.kind == NodeKind::LeafList {
                    name.push('*');
                } else if node.kind == NodeKind::Leaf
                    && !node.is_key
                    && !node.mandatory.unwrap_or(false)
                {
                    name.push('?');
                }
                let label = type_label(node, &module.prefix);
                if label.is_empty() {
                    out.push_str(&format!("{} {}", flags, name));
                } else if ansi {
                    out.push_str(&format!(
                        "{} {:<w$}  {}{}{}",
                        flags,
                        name,
                        DIM,
                        label,
                        RESET,
                        w = width + 1
                    ));
                } else {
                    out.push_str(&format!("{} {:<w$}  {}", flags, name, label, w = width + 1));
                }
            }
        }

        if node.kind == NodeKind::List {
            if let Some(key) = &node.key {
                out.push_str(&format!(" [{}]", normalized_key(key)));
            }
        }

        if !node.if_features.is_empty() {
            let features = format!(" {{{}}}?", node.if_features.join(","));
            if ansi {
                out.push_str(DIM);
                out.push_str(&features);
                out.push_str(RESET);
            } else {
                out.push_str(&features);
            }
        }

        out.push('\n');

        if node.kind.has_child_body() {
            let depth = depth.map(|d| d.saturating_sub(1));
            let mut path = path;
            let chs: Vec<&SchemaNode> = match path {
                Some(p) if !p.is_empty() => {
                    let filtered = node.children.iter().filter(|ch| ch.name == p[0]).collect();
                    path = Some(&p[1..]);
                    filtered
                }
                _ => node.children.iter().collect(),
            };
            // choice and case children share the alignment scope of
            // the group the choice belongs to
            let width = if node.kind.is_transparent() { width } else { 0 };
            self.emit_children(out, &chs, module, prefix, path, mode, depth, width, ansi);
        }
    }
}

/// Name as printed: bare for local nodes, prefix-qualified for nodes
/// owned by another module
fn qualified_name(node: &SchemaNode, module: &Module) -> String {
    match &node.owner {
        Some(owner) if owner.name != module.name => format!("{}:{}", owner.prefix, node.name),
        _ => node.name.clone(),
    }
}

/// Max printable name width in a sibling group, looking through
/// transparent choice/case wrappers
fn group_width(children: &[&SchemaNode], module: &Module) -> usize {
    let mut width = 0;
    for &child in children {
        if child.kind.is_transparent() {
            let nested: Vec<&SchemaNode> = child.children.iter().collect();
            width = width.max(group_width(&nested, module));
        } else {
            width = width.max(qualified_name(child, module).chars().count());
        }
    }
    width
}

/// Key statement arguments are whitespace-normalized for display
fn normalized_key(key: &str) -> String {
    static WS: OnceLock<Regex> = OnceLock::new();
    let ws = WS.get_or_init(|| Regex::new(r"\s+").unwrap());
    ws.replace_all(key, " ").into_owned()
}

fn status_color(marker: char) -> Color {
    match marker {
        'x' => Color::Yellow,
        'o' => Color::Red,
        _ => Color::Green,
    }
}

fn color_code(color: Color) -> &'static str {
    match color {
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Red => "\x1b[31m",
        Color::Cyan => "\x1b[36m",
        _ => "\x1b[90m",
    }
}
