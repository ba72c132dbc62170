//! Playback, blend and crossfade commands

use anyhow::{Context, Result};
use clap::Subcommand;
use stickrig_core::{Animator, DEFAULT_TRANSITION_SECONDS, FrameExport};

use super::{OutputFormat, RigArgs, frame_step};
use crate::utils::{bones_table, print_json};

#[derive(Subcommand)]
pub enum AnimateCommands {
    /// Play a clip and print the posed skeleton per frame
    Play {
        #[command(flatten)]
        rig: RigArgs,

        /// Clip name
        clip: String,

        /// Number of frames to advance
        #[arg(short = 'n', long, default_value_t = 24)]
        frames: u32,

        /// Playback rate in frames per second
        #[arg(long, default_value_t = 24.0)]
        fps: f64,

        /// Clock speed multiplier (negative plays backwards)
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        speed: f64,

        /// Print every Nth frame
        #[arg(short, long, default_value_t = 1)]
        every: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Mix two clips with a fixed weight at one point in time
    Blend {
        #[command(flatten)]
        rig: RigArgs,

        /// Base clip
        from: String,

        /// Clip blended in
        to: String,

        /// Weight of the second clip (0 = base only, 1 = second only)
        #[arg(short, long, default_value_t = 0.5)]
        alpha: f64,

        /// Playback time in seconds
        #[arg(short, long, default_value_t = 0.0)]
        time: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Crossfade from one clip to another and print each frame
    Transition {
        #[command(flatten)]
        rig: RigArgs,

        /// Clip playing first
        from: String,

        /// Clip faded in
        to: String,

        /// Crossfade length in seconds
        #[arg(short, long, default_value_t = DEFAULT_TRANSITION_SECONDS)]
        duration: f64,

        /// Seconds of the first clip before the crossfade starts
        #[arg(long, default_value_t = 0.0)]
        lead_in: f64,

        /// Number of frames to advance after the crossfade starts
        #[arg(short = 'n', long, default_value_t = 12)]
        frames: u32,

        /// Playback rate in frames per second
        #[arg(long, default_value_t = 24.0)]
        fps: f64,

        /// Print every Nth frame
        #[arg(short, long, default_value_t = 1)]
        every: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

pub fn execute(cmd: AnimateCommands) -> Result<()> {
    match cmd {
        AnimateCommands::Play {
            rig,
            clip,
            frames,
            fps,
            speed,
            every,
            format,
        } => handle_play(&rig, &clip, frames, fps, speed, every, format),
        AnimateCommands::Blend {
            rig,
            from,
            to,
            alpha,
            time,
            format,
        } => handle_blend(&rig, &from, &to, alpha, time, format),
        AnimateCommands::Transition {
            rig,
            from,
            to,
            duration,
            lead_in,
            frames,
            fps,
            every,
            format,
        } => handle_transition(
            &rig, &from, &to, duration, lead_in, frames, fps, every, format,
        ),
    }
}

/// Advance `frames` steps, keeping every Nth frame and always the last one
fn run_frames(animator: &mut Animator, frames: u32, dt: f64, every: u32) -> Vec<FrameExport> {
    let every = every.max(1);
    (1..=frames)
        .filter_map(|frame| {
            animator.update(dt);
            (frame % every == 0 || frame == frames).then(|| animator.export_frame())
        })
        .collect()
}

fn print_frames(frames: &[FrameExport], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(frames),
        OutputFormat::Text => {
            for frame in frames {
                println!(
                    "t={:.4}s clip={} state={} alpha={:.4}",
                    frame.time,
                    frame.clip.as_deref().unwrap_or("-"),
                    frame.state,
                    frame.blend_alpha
                );
                bones_table(&frame.skeleton).printstd();
                println!();
            }
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_play(
    rig: &RigArgs,
    clip: &str,
    frames: u32,
    fps: f64,
    speed: f64,
    every: u32,
    format: OutputFormat,
) -> Result<()> {
    let dt = frame_step(fps)?;
    let mut animator = rig.animator()?;
    animator
        .play_with(clip, true, speed)
        .with_context(|| format!("Cannot play '{clip}'"))?;

    log::info!("Playing '{clip}' for {frames} frames at {fps} fps (speed {speed})");
    print_frames(&run_frames(&mut animator, frames, dt, every), format)
}

fn handle_blend(
    rig: &RigArgs,
    from: &str,
    to: &str,
    alpha: f64,
    time: f64,
    format: OutputFormat,
) -> Result<()> {
    let mut animator = rig.animator()?;
    animator
        .blend(from, to, alpha)
        .with_context(|| format!("Cannot blend '{from}' with '{to}'"))?;
    animator.update(time);

    let frame = animator.export_frame();
    match format {
        OutputFormat::Json => print_json(&frame),
        OutputFormat::Text => print_frames(std::slice::from_ref(&frame), format),
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_transition(
    rig: &RigArgs,
    from: &str,
    to: &str,
    duration: f64,
    lead_in: f64,
    frames: u32,
    fps: f64,
    every: u32,
    format: OutputFormat,
) -> Result<()> {
    let dt = frame_step(fps)?;
    let mut animator = rig.animator()?;
    animator
        .play(from)
        .with_context(|| format!("Cannot play '{from}'"))?;
    animator.update(lead_in);
    animator
        .transition_to(to, duration)
        .with_context(|| format!("Cannot transition to '{to}'"))?;

    log::info!("Crossfading '{from}' -> '{to}' over {duration}s");
    print_frames(&run_frames(&mut animator, frames, dt, every), format)
}
