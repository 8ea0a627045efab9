//! In-memory scene model plus the asset-pack table the loader resolves
//! textures against.
//!
//! Components are plain optional slots on [`ObjectModel`] rather than a
//! dynamic capability query: later stages ask `node.origin` / `node.texture`
//! and get `Option`s back.

use serde::Deserialize;

/// Normalized anchor defaults; a node whose origin equals these emits no
/// `setOrigin` call.
pub const ORIGIN_X_DEFAULT: f64 = 0.5;
pub const ORIGIN_Y_DEFAULT: f64 = 0.5;

/// One node of the scene graph.
///
/// `variant` decides which construction call the generator emits; the
/// component slots are orthogonal to it (an `Unknown` node can still carry
/// an origin or a texture).
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectModel {
    /// Stable editor name, unique within the scene. Used as the capture
    /// variable when the generated object needs post-construction calls.
    pub editor_name: String,
    pub variant: ObjectVariant,
    pub transform: Option<Transform>,
    pub origin: Option<Origin>,
    pub texture: Option<FrameRef>,
    /// Ordered children; insertion order is preserved in generated code.
    pub children: Vec<ObjectModel>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectVariant {
    Sprite,
    TileSprite { width: f64, height: f64 },
    /// Anything the generator has no construction rule for. Kept so the
    /// "no construction call" path is reachable from real input.
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

impl Origin {
    /// True when either axis differs from the (0.5, 0.5) default.
    pub fn is_non_default(&self) -> bool {
        self.x != ORIGIN_X_DEFAULT || self.y != ORIGIN_Y_DEFAULT
    }
}

impl ObjectModel {
    pub fn new(editor_name: impl Into<String>, variant: ObjectVariant) -> Self {
        Self {
            editor_name: editor_name.into(),
            variant,
            transform: None,
            origin: None,
            texture: None,
            children: Vec::new(),
        }
    }

    /// Pre-order visit of this node and every descendant.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a ObjectModel)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }
}

// ─────────────────────────────────────────────────────
// Texture / asset-pack side
// ─────────────────────────────────────────────────────

/// A fully resolved texture reference: the owning asset plus which frame of
/// it. Single-image assets always use `FrameKey::Implicit`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRef {
    pub asset: AssetRef,
    pub frame: FrameKey,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameKey {
    /// Image assets have exactly one frame, referenced by asset key alone.
    Implicit,
    /// Spritesheet frames are addressed by numeric index.
    Index(i64),
    /// Atlas (and any other multi-frame) assets address frames by key.
    Key(String),
}

/// The slice of asset-pack metadata code generation needs: key, kind, and
/// where the pack entry lives (section + pack url).
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRef {
    pub key: String,
    pub kind: AssetKind,
    pub section_key: String,
    pub pack_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Spritesheet,
    Atlas,
}

/// One asset entry as declared in the scene file's pack table.
#[derive(Debug, Clone, Deserialize)]
pub struct PackEntry {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
}

/// Immediately-after-parse scene, handed to the generator.
#[derive(Debug, Clone)]
pub struct SceneModel {
    /// Synthetic root; its children are the display list.
    pub root: ObjectModel,
}
