//! Solve command - evaluate an explicit game tree

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};

use crate::{
    cli::output::{format_path, print_kv, print_section, print_stats},
    config::{Algorithm, SearchConfig},
    tree::{TreeNode, samples},
};

/// Built-in trees
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Sample {
    /// Depth-3 tree with labeled nodes A..G
    Textbook,
    /// Four-level binary tree over sixteen leaves
    SixteenLeaves,
}

#[derive(Parser, Debug)]
#[command(about = "Evaluate an explicit game tree")]
pub struct SolveArgs {
    /// JSON tree file (nodes with optional `id`, `value`, `children`)
    #[arg(conflicts_with = "sample")]
    pub tree: Option<PathBuf>,

    /// Use a built-in tree instead of a file
    #[arg(long, value_enum)]
    pub sample: Option<Sample>,

    /// Search algorithm (defaults to alpha-beta)
    #[arg(long, short = 'a', value_enum)]
    pub algorithm: Option<Algorithm>,

    /// Ply budget (defaults to the full height of the tree)
    #[arg(long, short = 'd')]
    pub depth: Option<usize>,

    /// The root is a minimizing node
    #[arg(long)]
    pub minimize: bool,

    /// Print the tree before searching it
    #[arg(long)]
    pub show_tree: bool,

    /// JSON search configuration; flags override its fields
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let tree = load_tree(&args)?;
    let depth = args.depth.unwrap_or_else(|| tree.depth());
    let maximizing = !args.minimize;

    if args.show_tree {
        print!("{tree}");
    }

    let (line, stats) = tree.search(config.algorithm, depth, maximizing);

    print_section("Search Result");
    print_kv("Algorithm", config.algorithm.as_str());
    print_kv("Depth", &depth.to_string());
    print_kv("Root", if maximizing { "max" } else { "min" });
    print_kv("Value", &line.value.to_string());
    print_kv("Path", &format_path(&line.path));
    print_stats(&stats);

    Ok(())
}

fn resolve_config(args: &SolveArgs) -> Result<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("loading search config {}", path.display()))?,
        None => SearchConfig::default(),
    };
    if let Some(algorithm) = args.algorithm {
        config = config.with_algorithm(algorithm);
    }
    Ok(config)
}

fn load_tree(args: &SolveArgs) -> Result<TreeNode> {
    match (&args.tree, args.sample) {
        (Some(path), _) => {
            TreeNode::load(path).with_context(|| format!("loading tree {}", path.display()))
        }
        (None, Some(Sample::Textbook)) => Ok(samples::textbook()),
        (None, Some(Sample::SixteenLeaves)) => Ok(samples::sixteen_leaves()),
        (None, None) => Err(anyhow!("Provide a tree file or --sample")),
    }
}
