//! Skeleton and clip file loading

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use stickrig_core::{Bone, Clip, Skeleton, forward_kinematics};

/// On-disk skeleton layout: `{"root": [x, y], "bones": [...]}`
#[derive(Debug, Deserialize)]
pub struct SkeletonFile {
    #[serde(default)]
    pub root: (f64, f64),
    pub bones: Vec<Bone>,
}

impl SkeletonFile {
    /// Build the skeleton and compute its rest transforms
    pub fn into_skeleton(self) -> Skeleton {
        let mut skeleton = Skeleton::from_bones(self.bones).with_root(self.root.0, self.root.1);
        forward_kinematics(&mut skeleton);
        skeleton
    }
}

/// A clip file holds either one clip or a list of them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClipFile {
    Single(Clip),
    Many(Vec<Clip>),
}

/// Load a skeleton from a JSON file
pub fn load_skeleton(path: &Path) -> Result<Skeleton> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read skeleton file {}", path.display()))?;
    let file: SkeletonFile = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse skeleton file {}", path.display()))?;

    let skeleton = file.into_skeleton();
    log::info!(
        "Loaded {} bones from {}",
        skeleton.len(),
        path.display()
    );

    let orphans: Vec<String> = skeleton
        .bones()
        .filter(|b| b.parent_id.is_some_and(|p| !skeleton.contains(p)))
        .map(|b| format!("{} ({})", b.id, b.name))
        .collect();
    if !orphans.is_empty() {
        log::warn!(
            "Bones with unknown parents will not be posed: {}",
            orphans.join(", ")
        );
    }

    Ok(skeleton)
}

/// Load every clip from a JSON file
pub fn load_clips(path: &Path) -> Result<Vec<Clip>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read clip file {}", path.display()))?;
    let file: ClipFile = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse clip file {}", path.display()))?;
    let clips = match file {
        ClipFile::Single(clip) => vec![clip],
        ClipFile::Many(clips) => clips,
    };

    for clip in &clips {
        log::info!(
            "Loaded clip '{}' ({} keyframes, {:.3}s) from {}",
            clip.name,
            clip.keyframes().len(),
            clip.duration(),
            path.display()
        );
    }
    Ok(clips)
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
