use std::io::{self, Write};

use crate::config::RenderConfig;
use crate::engine::TreeRenderer;
use crate::models::Module;

/// Render the modules and write the listing to a sink
pub fn write_tree(
    out: &mut dyn Write,
    modules: &[Module],
    config: &RenderConfig,
    ansi: bool,
) -> io::Result<()> {
    let renderer = TreeRenderer::new(config.clone());
    let text = if ansi {
        renderer.render_ansi(modules)
    } else {
        renderer.render(modules)
    };
    out.write_all(text.as_bytes())
}

/// Reference block describing the tree symbols
pub fn legend() -> &'static str {
    LEGEND
}

const LEGEND: &str = r#"
Each node is printed as:

<status> <flags> <name> <opts> <type> <if-features>

  <status> is one of:
    +  for current
    x  for deprecated
    o  for obsolete

  <flags> is one of:
    rw  for configuration data
    ro  for non-configuration data
    -x  for rpcs
    -n  for notifications

  <name> is the name of the node
    (<name>) means that the node is a choice node
   :(<name>) means that the node is a case node

   If the node is augmented into the tree from another module, its
   name is printed as <prefix>:<name>.

  <opts> is one of:
    ?  for an optional leaf or choice
    !  for a presence container
    *  for a leaf-list or list
    [<keys>] for a list's keys

  <type> is the name of the type for leafs and leaf-lists

    If the type is a leafref, the type is printed as "-> TARGET", where
    TARGET is the leafref path, with prefixes removed if possible.

  <if-features> is the list of features this node depends on, printed
    within curly brackets and a question mark "{...}?"
"#;
