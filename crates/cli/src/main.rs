use clap::Parser;
use std::fs;
use std::path::PathBuf;
use yangtree_core::{legend, ModuleLoader, RenderConfig, TreeRenderer};

#[derive(Parser)]
#[command(name = "yangtree")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print YANG schema module trees")]
#[command(long_about = "Renders pre-resolved YANG schema module documents as compact, \
    aligned ASCII trees, one line per schema node:\n\n\
    - Data nodes with status, access flags, cardinality and type\n\
    - List keys and feature conditions\n\
    - Augments targeting modules outside the rendered set\n\
    - Rpcs and notifications in their own sections\n\n\
    Module documents are JSON or YAML files produced by a schema\n\
    compiler; included submodules are resolved by name over the\n\
    module search path.")]
pub struct Args {
    /// Module documents to render, in order (.json, .yaml)
    #[arg(required_unless_present = "legend")]
    pub files: Vec<PathBuf>,

    /// Number of tree levels to print
    #[arg(short, long, value_name = "N")]
    pub depth: Option<usize>,

    /// Print only the subtree rooted at this path (e.g. /interfaces/interface)
    #[arg(short, long, value_name = "PATH")]
    pub subtree: Option<String>,

    /// Additional directories to search for included submodules
    #[arg(short = 'p', long = "module-path", action = clap::ArgAction::Append)]
    pub module_path: Vec<PathBuf>,

    /// Print help on the tree symbols and exit
    #[arg(long)]
    pub legend: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Show verbose progress
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.legend {
        print!("{}", legend());
        return Ok(());
    }

    run_render(&args)
}

fn run_render(args: &Args) -> anyhow::Result<()> {
    let mut loader = ModuleLoader::new();
    for dir in &args.module_path {
        loader = loader.with_search_dir(dir.clone());
    }
    // includes also resolve against the directories the documents
    // themselves live in
    for file in &args.files {
        if let Some(parent) = file.parent() {
            loader = loader.with_search_dir(parent.to_path_buf());
        }
    }

    let modules = loader.load(&args.files)?;
    if args.verbose {
        eprintln!("Loaded {} module(s)", modules.len());
    }

    let mut config = RenderConfig::new();
    if let Some(depth) = args.depth {
        config = config.with_depth(depth);
    }
    if let Some(ref subtree) = args.subtree {
        config = config.with_path_expr(subtree);
    }

    let renderer = TreeRenderer::new(config);
    let rendered = if args.output.is_none() && !args.no_color && atty::is(atty::Stream::Stdout) {
        renderer.render_ansi(&modules)
    } else {
        renderer.render(&modules)
    };

    if let Some(ref path) = args.output {
        fs::write(path, &rendered)?;
        if args.verbose {
            eprintln!("Output written to: {}", path.display());
        }
    } else {
        print!("{}", rendered);
    }

    Ok(())
}
