//! Root CLI structure for stickrig

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stickrig")]
#[command(about = "Pose, animate and solve 2D stick-figure skeletons", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Skeleton inspection
    Skeleton {
        #[command(subcommand)]
        command: crate::commands::skeleton::SkeletonCommands,
    },

    /// Clip inspection and sampling
    Clip {
        #[command(subcommand)]
        command: crate::commands::clip::ClipCommands,
    },

    /// Playback, blending and crossfades
    Animate {
        #[command(subcommand)]
        command: crate::commands::animate::AnimateCommands,
    },

    /// Solve a bone chain towards a target point with FABRIK
    Ik(crate::commands::ik::IkArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
