//! FABRIK solve command

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use stickrig_core::{BoneExport, DVec2, IkConfig, export::round4};

use super::{OutputFormat, RigArgs, resolve_bone};
use crate::utils::{bones_table, format_point, parse_point, print_json};

#[derive(Args, Debug)]
pub struct IkArgs {
    #[command(flatten)]
    pub rig: RigArgs,

    /// End effector bone, by id or name
    pub bone: String,

    /// Target point as `x,y`
    #[arg(value_parser = parse_point, allow_hyphen_values = true)]
    pub target: DVec2,

    /// Maximum solver iterations
    #[arg(short, long, default_value_t = IkConfig::default().iterations)]
    pub iterations: u32,

    /// Tip-to-target distance accepted as converged
    #[arg(short, long, default_value_t = IkConfig::default().tolerance)]
    pub tolerance: f64,

    /// Pose the skeleton with this clip before solving
    #[arg(short, long)]
    pub pose: Option<String>,

    /// Clip time used with `--pose`, in seconds
    #[arg(long, default_value_t = 0.0)]
    pub time: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Solver outcome plus the solved chain, rounded for output
#[derive(Debug, Serialize)]
struct IkReport {
    converged: bool,
    distance: f64,
    iterations: u32,
    target: (f64, f64),
    tip: (f64, f64),
    chain: Vec<BoneExport>,
}

pub fn execute(args: &IkArgs) -> Result<()> {
    let mut animator = args.rig.animator()?;

    if let Some(clip) = &args.pose {
        animator
            .play(clip)
            .with_context(|| format!("Cannot pose with '{clip}'"))?;
        animator.update(args.time);
        animator.pause();
    }

    let end = resolve_bone(animator.skeleton(), &args.bone)?;
    let config = IkConfig::default()
        .with_iterations(args.iterations)
        .with_tolerance(args.tolerance);

    let result = animator.solve_ik(end, args.target, &config);
    log::info!(
        "IK solve for bone {end}: converged={} after {} iteration(s)",
        result.converged,
        result.iterations
    );

    let skeleton = animator.skeleton();
    let chain_ids = skeleton.chain_ids(end);
    let export = skeleton.export();
    // Root first, so the last entry is the end effector
    let chain: Vec<BoneExport> = chain_ids
        .iter()
        .filter_map(|&id| export.bone(id).cloned())
        .collect();
    let tip = chain.last().map_or((0.0, 0.0), |b| b.tip);

    let report = IkReport {
        converged: result.converged,
        distance: round4(result.distance),
        iterations: result.iterations,
        target: (round4(args.target.x), round4(args.target.y)),
        tip,
        chain,
    };

    match args.format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            println!("=== IK Solve ===");
            println!("Target: {}", format_point(report.target));
            println!("Tip: {}", format_point(report.tip));
            println!("Distance: {:.4}", report.distance);
            println!("Iterations: {}", report.iterations);
            println!(
                "Converged: {}",
                if report.converged { "yes" } else { "no (target out of reach or tolerance too tight)" }
            );
            println!();
            let chain_view = stickrig_core::SkeletonExport {
                root: export.root,
                bones: report.chain,
            };
            bones_table(&chain_view).printstd();
            Ok(())
        }
    }
}
