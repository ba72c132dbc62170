//! Clip inspection and sampling commands

use anyhow::{Context, Result};
use clap::Subcommand;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use stickrig_core::{BoneId, Clip, export::round4};

use super::{LoopModeArg, OutputFormat, RigArgs};
use crate::utils::{add_table_row, create_table, format_angle, print_json};

#[derive(Subcommand)]
pub enum ClipCommands {
    /// List available clips
    List {
        #[command(flatten)]
        rig: RigArgs,
    },

    /// Show a clip's settings and keyframes
    Info {
        #[command(flatten)]
        rig: RigArgs,

        /// Clip name
        name: String,

        /// List every keyframe
        #[arg(short, long)]
        detailed: bool,
    },

    /// Sample a clip's bone angles at the given times
    Sample {
        #[command(flatten)]
        rig: RigArgs,

        /// Clip name
        name: String,

        /// Sample times in seconds, comma separated
        #[arg(short, long, value_delimiter = ',', default_value = "0", allow_hyphen_values = true)]
        times: Vec<f64>,

        /// Override the clip's loop mode
        #[arg(short, long, value_enum)]
        loop_mode: Option<LoopModeArg>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

/// Sampled angles at one time, rounded for output
#[derive(Debug, Serialize)]
struct SampleRow {
    time: f64,
    angles: BTreeMap<BoneId, f64>,
}

pub fn execute(cmd: ClipCommands) -> Result<()> {
    match cmd {
        ClipCommands::List { rig } => handle_list(&rig),
        ClipCommands::Info {
            rig,
            name,
            detailed,
        } => handle_info(&rig, &name, detailed),
        ClipCommands::Sample {
            rig,
            name,
            times,
            loop_mode,
            format,
        } => handle_sample(&rig, &name, &times, loop_mode, format),
    }
}

fn find_clip(rig: &RigArgs, name: &str) -> Result<Clip> {
    let animator = rig.animator()?;
    animator
        .clip(name)
        .cloned()
        .with_context(|| {
            format!(
                "Clip not found: '{name}' (available: {})",
                animator.clip_names().join(", ")
            )
        })
}

fn handle_list(rig: &RigArgs) -> Result<()> {
    let animator = rig.animator()?;
    let mut table = create_table(&["Name", "Keyframes", "Duration", "Loop", "FPS"]);

    for name in animator.clip_names() {
        if let Some(clip) = animator.clip(name) {
            add_table_row(
                &mut table,
                vec![
                    clip.name.clone(),
                    clip.keyframes().len().to_string(),
                    format!("{:.4}s", clip.duration()),
                    clip.loop_mode.as_str().to_string(),
                    format!("{:.1}", clip.fps),
                ],
            );
        }
    }

    table.printstd();
    Ok(())
}

fn handle_info(rig: &RigArgs, name: &str, detailed: bool) -> Result<()> {
    let clip = find_clip(rig, name)?;

    let bones: BTreeSet<BoneId> = clip
        .keyframes()
        .iter()
        .flat_map(|k| k.bone_angles.keys().copied())
        .collect();
    let bone_list: Vec<String> = bones.iter().map(ToString::to_string).collect();

    println!("=== Clip: {} ===", clip.name);
    println!("Keyframes: {}", clip.keyframes().len());
    println!("Duration: {:.4}s", clip.duration());
    println!("Loop mode: {}", clip.loop_mode.as_str());
    println!("Looping: {}", clip.looping);
    println!("FPS: {:.1}", clip.fps);
    println!("Bones: {}", bone_list.join(", "));

    if detailed {
        println!();
        let mut table = create_table(&["Time", "Easing", "Angles"]);
        for keyframe in clip.keyframes() {
            let angles: Vec<String> = keyframe
                .bone_angles
                .iter()
                .map(|(id, angle)| format!("{id}={angle:.4}"))
                .collect();
            add_table_row(
                &mut table,
                vec![
                    format!("{:.4}", keyframe.time),
                    keyframe.easing.as_str().to_string(),
                    angles.join(" "),
                ],
            );
        }
        table.printstd();
    }

    Ok(())
}

fn handle_sample(
    rig: &RigArgs,
    name: &str,
    times: &[f64],
    loop_mode: Option<LoopModeArg>,
    format: OutputFormat,
) -> Result<()> {
    let mut clip = find_clip(rig, name)?;
    if let Some(mode) = loop_mode {
        clip.loop_mode = mode.into();
    }
    log::debug!(
        "Sampling '{}' ({}) at {} time(s)",
        clip.name,
        clip.loop_mode.as_str(),
        times.len()
    );

    let rows: Vec<SampleRow> = times
        .iter()
        .map(|&time| SampleRow {
            time,
            angles: clip.sample(time).iter().map(|(id, a)| (id, round4(a))).collect(),
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Text => {
            let mut table = create_table(&["Time", "Bone", "Angle"]);
            for row in &rows {
                for (id, angle) in &row.angles {
                    add_table_row(
                        &mut table,
                        vec![format!("{:.4}", row.time), id.to_string(), format_angle(*angle)],
                    );
                }
            }
            table.printstd();
            Ok(())
        }
    }
}
