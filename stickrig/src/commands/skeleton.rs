//! Skeleton inspection commands

use anyhow::Result;
use clap::Subcommand;

use super::RigArgs;
use crate::utils::{TreeOptions, bones_table, format_point, print_json, render_tree, skeleton_tree};

#[derive(Subcommand)]
pub enum SkeletonCommands {
    /// Display bones and their rest transforms
    Info {
        #[command(flatten)]
        rig: RigArgs,

        /// Show a table of every bone
        #[arg(short, long)]
        detailed: bool,
    },

    /// Display the bone hierarchy as a tree
    Tree {
        #[command(flatten)]
        rig: RigArgs,

        /// Maximum depth to display
        #[arg(short, long)]
        depth: Option<usize>,

        /// Show bone details inline
        #[arg(long)]
        compact: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Print the rest pose as JSON
    Export {
        #[command(flatten)]
        rig: RigArgs,
    },
}

pub fn execute(cmd: SkeletonCommands) -> Result<()> {
    match cmd {
        SkeletonCommands::Info { rig, detailed } => handle_info(&rig, detailed),
        SkeletonCommands::Tree {
            rig,
            depth,
            compact,
            no_color,
        } => handle_tree(&rig, depth, compact, no_color),
        SkeletonCommands::Export { rig } => handle_export(&rig),
    }
}

fn handle_info(rig: &RigArgs, detailed: bool) -> Result<()> {
    let skeleton = rig.load_skeleton()?;
    let export = skeleton.export();

    println!("=== Skeleton ===");
    println!("Bones: {}", skeleton.len());
    println!("Anchor: {}", format_point(export.root));

    let roots: Vec<String> = skeleton.root_bones().iter().map(|b| b.name.clone()).collect();
    println!("Root bones: {}", roots.join(", "));

    let deepest = skeleton
        .bone_ids()
        .into_iter()
        .map(|id| (id, skeleton.chain_ids(id).len()))
        .max_by_key(|&(id, depth)| (depth, std::cmp::Reverse(id)));
    if let Some((id, depth)) = deepest {
        let names: Vec<String> = skeleton.get_chain(id).iter().map(|b| b.name.clone()).collect();
        let reach: f64 = skeleton.get_chain(id).iter().map(|b| b.length).sum();
        println!("Longest chain: {} ({depth} bones, reach {reach:.4})", names.join(" -> "));
    }

    if detailed {
        println!();
        bones_table(&export).printstd();
    }

    Ok(())
}

fn handle_tree(rig: &RigArgs, depth: Option<usize>, compact: bool, no_color: bool) -> Result<()> {
    let skeleton = rig.load_skeleton()?;
    let title = rig
        .skeleton
        .as_ref()
        .map_or_else(|| "humanoid".to_string(), |path| path.display().to_string());

    let options = TreeOptions {
        max_depth: depth,
        no_color,
        show_metadata: true,
        compact,
    };
    print!("{}", render_tree(&skeleton_tree(&skeleton, &title), &options));
    Ok(())
}

fn handle_export(rig: &RigArgs) -> Result<()> {
    print_json(&rig.load_skeleton()?.export())
}
