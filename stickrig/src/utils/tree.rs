//! Bone hierarchy rendering

use super::format::{format_angle, format_point};
use console::Style;
use stickrig_core::{Bone, BoneId, Skeleton};

/// Represents a node in a tree structure
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub name: String,
    pub node_type: NodeType,
    pub children: Vec<TreeNode>,
    /// Key/value details, rendered in insertion order
    pub metadata: Vec<(String, String)>,
}

/// Types of nodes in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// The skeleton itself
    Root,
    /// Bone without a parent, attached to the root anchor
    RootBone,
    /// Bone with at least one child
    Joint,
    /// Bone without children
    Leaf,
    /// Bone whose parent id does not resolve
    Orphan,
}

/// Options for tree rendering
#[derive(Debug, Clone)]
pub struct TreeOptions {
    pub max_depth: Option<usize>,
    pub no_color: bool,
    pub show_metadata: bool,
    pub compact: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            no_color: false,
            show_metadata: true,
            compact: false,
        }
    }
}

impl TreeNode {
    /// Create a new tree node
    pub fn new(name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            name: name.into(),
            node_type,
            children: Vec::new(),
            metadata: Vec::new(),
        }
    }

    /// Add a child node
    pub fn add_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Add metadata
    pub fn with_metadata(mut self, key: &str, value: impl Into<String>) -> Self {
        self.metadata.push((key.to_string(), value.into()));
        self
    }
}

impl NodeType {
    /// Marker drawn before the node name
    pub fn icon(self) -> &'static str {
        match self {
            Self::Root => "◆",
            Self::RootBone => "●",
            Self::Joint => "○",
            Self::Leaf => "◦",
            Self::Orphan => "✗",
        }
    }

    /// Get color style for node type
    pub fn style(self, no_color: bool) -> Style {
        if no_color {
            Style::new()
        } else {
            match self {
                Self::Root => Style::new().bold().cyan(),
                Self::RootBone => Style::new().bold().yellow(),
                Self::Joint => Style::new().green(),
                Self::Leaf => Style::new().white(),
                Self::Orphan => Style::new().red(),
            }
        }
    }
}

/// Build a tree of the skeleton's hierarchy.
///
/// Bones are listed under their parents in insertion order. Bones with an
/// unknown parent are listed last, flagged as orphans, with their subtrees.
pub fn skeleton_tree(skeleton: &Skeleton, title: &str) -> TreeNode {
    let root = skeleton.root();
    let mut node = TreeNode::new(title, NodeType::Root)
        .with_metadata("bones", skeleton.len().to_string())
        .with_metadata("anchor", format_point((root.x, root.y)));

    for bone in skeleton.root_bones() {
        node = node.add_child(bone_node(skeleton, bone, NodeType::RootBone, &mut Vec::new()));
    }

    for bone in skeleton
        .bones()
        .filter(|b| b.parent_id.is_some_and(|p| !skeleton.contains(p)))
    {
        node = node.add_child(bone_node(skeleton, bone, NodeType::Orphan, &mut Vec::new()));
    }

    node
}

/// `path` holds the ids above this bone, so parent cycles stop instead of recursing forever
fn bone_node(skeleton: &Skeleton, bone: &Bone, kind: NodeType, path: &mut Vec<BoneId>) -> TreeNode {
    let children: Vec<&Bone> = skeleton
        .get_children(bone.id)
        .into_iter()
        .filter(|child| !path.contains(&child.id) && child.id != bone.id)
        .collect();

    let kind = match kind {
        NodeType::RootBone | NodeType::Orphan => kind,
        _ if children.is_empty() => NodeType::Leaf,
        _ => NodeType::Joint,
    };

    let mut node = TreeNode::new(format!("{} [{}]", bone.name, bone.id), kind)
        .with_metadata("length", format!("{:.4}", bone.length))
        .with_metadata("rest", format_angle(bone.rest_angle))
        .with_metadata("world", format_point((bone.world_x, bone.world_y)))
        .with_metadata("tip", format_point((bone.tip_x(), bone.tip_y())));
    if bone.current_angle != 0.0 {
        node = node.with_metadata("angle", format_angle(bone.current_angle));
    }

    path.push(bone.id);
    for child in children {
        node = node.add_child(bone_node(skeleton, child, NodeType::Joint, path));
    }
    path.pop();

    node
}

/// Render a tree structure to string
pub fn render_tree(root: &TreeNode, options: &TreeOptions) -> String {
    let mut output = String::new();
    render_node(root, &mut output, "", true, 0, options);
    output
}

/// Render a single node and its children
fn render_node(
    node: &TreeNode,
    output: &mut String,
    prefix: &str,
    is_last: bool,
    depth: usize,
    options: &TreeOptions,
) {
    if let Some(max_depth) = options.max_depth
        && depth > max_depth
    {
        return;
    }

    let icon = node.node_type.icon();
    let style = node.node_type.style(options.no_color);
    let connector = if depth == 0 {
        ""
    } else if is_last {
        "└── "
    } else {
        "├── "
    };

    output.push_str(&format!(
        "{}{}{} {}",
        prefix,
        connector,
        icon,
        style.apply_to(&node.name)
    ));

    if options.show_metadata && options.compact && !node.metadata.is_empty() {
        let meta_parts: Vec<String> = node
            .metadata
            .iter()
            .filter(|(key, _)| ["length", "bones", "angle"].contains(&key.as_str()))
            .map(|(key, value)| format!("{key}:{value}"))
            .collect();
        if !meta_parts.is_empty() {
            output.push_str(&format!(" [{}]", meta_parts.join(", ")));
        }
    }
    output.push('\n');

    let child_prefix = if depth == 0 {
        String::new()
    } else {
        format!("{}{}", prefix, if is_last { "    " } else { "│   " })
    };

    if options.show_metadata && !options.compact {
        let meta_style = if options.no_color {
            Style::new()
        } else {
            Style::new().dim()
        };
        for (key, value) in &node.metadata {
            output.push_str(&format!(
                "{}    {}: {}\n",
                child_prefix,
                meta_style.apply_to(key),
                value
            ));
        }
    }

    for (i, child) in node.children.iter().enumerate() {
        let is_last_child = i == node.children.len() - 1;
        render_node(
            child,
            output,
            &child_prefix,
            is_last_child,
            depth + 1,
            options,
        );
    }
}
