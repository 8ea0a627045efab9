//! The scene-to-code compiler: walks the scene graph and fills a code-DOM
//! unit with a `preload` and a `create` method.
//!
//! The build is total — a well-formed model always produces a unit, and
//! re-running over the same model yields an identical one.

use indexmap::IndexMap;

use crate::codegen::codedom::{ClassDecl, Instr, MethodCall, MethodDecl, Unit};
use crate::model::{AssetKind, FrameKey, FrameRef, ObjectModel, ObjectVariant};

/// Superclass of every generated scene class.
pub const SCENE_SUPERCLASS: &str = "Phaser.Scene";

pub struct SceneCodeBuilder {
    class_name: String,
}

impl SceneCodeBuilder {
    /// `class_name` is derived by the caller from the target file's base
    /// name (extension stripped).
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
        }
    }

    pub fn build(&self, root: &ObjectModel) -> Unit {
        let mut unit = Unit::new();

        let mut cls = ClassDecl::new(self.class_name.clone());
        cls.superclass = Some(SCENE_SUPERCLASS.to_string());

        cls.members.push(build_preload_method(root));
        cls.members.push(build_create_method(root));

        unit.elements.push(cls);
        unit
    }
}

/// One `this.load.pack(...)` line per distinct (section, pack) pair found
/// anywhere in the tree. The map is order-preserving so the output follows
/// discovery order and is stable across runs.
fn build_preload_method(root: &ObjectModel) -> MethodDecl {
    let mut method = MethodDecl::new("preload");

    let mut pack_sections: IndexMap<String, (String, String)> = IndexMap::new();

    root.visit(&mut |node| {
        if let Some(frame) = &node.texture {
            let section = frame.asset.section_key.clone();
            let pack = frame.asset.pack_url.clone();
            pack_sections.insert(format!("{section}-{pack}"), (section, pack));
        }
    });

    for (section, pack) in pack_sections.values() {
        method
            .instructions
            .push(Instr::Raw(format!("this.load.pack('{section}', '{pack}');")));
    }

    method
}

/// Per-node outcome of the decision pass: the construction call (if the
/// variant has a rule) and whether a non-default origin follows it. Capture
/// is decided here, before anything is appended to the method.
struct NodePlan {
    construct: Option<MethodCall>,
    set_origin: Option<(f64, f64)>,
}

fn build_create_method(root: &ObjectModel) -> MethodDecl {
    let mut method = MethodDecl::new("create");

    for child in &root.children {
        let plan = plan_node(child);
        materialize(&mut method, child, plan);
    }

    method
}

/// Decision pass: no instructions are emitted here.
fn plan_node(node: &ObjectModel) -> NodePlan {
    let construct = match &node.variant {
        ObjectVariant::Sprite => Some(plan_sprite(node)),
        ObjectVariant::TileSprite { width, height } => {
            Some(plan_tile_sprite(node, *width, *height))
        }
        // No construction rule for this variant.
        ObjectVariant::Unknown(_) => None,
    };

    let set_origin = node
        .origin
        .filter(|o| o.is_non_default())
        .map(|o| (o.x, o.y));

    NodePlan {
        construct,
        set_origin,
    }
}

/// Materialize pass: append the planned instructions in order. The capture
/// variable is set iff an origin adjustment follows, and the origin call is
/// dropped when there is no construction to name a variable for.
fn materialize(method: &mut MethodDecl, node: &ObjectModel, plan: NodePlan) {
    let Some(mut construct) = plan.construct else {
        return;
    };

    if let Some((ox, oy)) = plan.set_origin {
        construct.return_to_var = Some(node.editor_name.clone());
        method.instructions.push(Instr::Call(construct));

        let mut origin = MethodCall::new("setOrigin", node.editor_name.clone());
        origin.arg_float(ox);
        origin.arg_float(oy);
        method.instructions.push(Instr::Call(origin));
    } else {
        method.instructions.push(Instr::Call(construct));
    }
}

fn plan_sprite(node: &ObjectModel) -> MethodCall {
    let mut call = MethodCall::new("sprite", "this.add");

    let (x, y) = position_of(node);
    call.arg_int(x);
    call.arg_int(y);

    if let Some(frame) = &node.texture {
        push_texture_arguments(&mut call, frame);
    }

    call
}

fn plan_tile_sprite(node: &ObjectModel, width: f64, height: f64) -> MethodCall {
    let mut call = MethodCall::new("tileSprite", "this.add");

    let (x, y) = position_of(node);
    call.arg_int(x);
    call.arg_int(y);
    call.arg_int(width as i64);
    call.arg_int(height as i64);

    if let Some(frame) = &node.texture {
        push_texture_arguments(&mut call, frame);
    }

    call
}

/// Coordinates are truncated toward zero; the runtime works in integer
/// pixels and fractional positions are intentionally dropped.
fn position_of(node: &ObjectModel) -> (i64, i64) {
    match node.transform {
        Some(t) => (t.x as i64, t.y as i64),
        None => (0, 0),
    }
}

/// Image assets: key only. Multi-frame assets: key plus either the numeric
/// spritesheet index or the atlas frame key.
fn push_texture_arguments(call: &mut MethodCall, frame: &FrameRef) {
    call.arg_literal(frame.asset.key.clone());

    if frame.asset.kind == AssetKind::Image {
        return;
    }

    match &frame.frame {
        FrameKey::Index(idx) => call.arg_int(*idx),
        FrameKey::Key(key) => call.arg_literal(key.clone()),
        // Multi-frame asset referenced without a frame: key alone.
        FrameKey::Implicit => {}
    }
}
