use anyhow::{Result, anyhow};
use serde_json::Value;
use std::collections::HashMap;

use crate::model::{
    AssetKind, AssetRef, FrameKey, FrameRef, ORIGIN_X_DEFAULT, ORIGIN_Y_DEFAULT, ObjectModel,
    ObjectVariant, Origin, PackEntry, SceneModel, Transform,
};

/// Parse the whole scene JSON string into a `SceneModel`.
///
/// The file is expected to contain a top-level `pack` object (the asset
/// table textures are resolved against) and a top-level `displayList`
/// array. Texture keys that appear in no pack section are reported as
/// errors here, so the generator never sees an unresolved reference.
pub fn load_from_json(json: &str) -> Result<SceneModel> {
    let root: Value = serde_json::from_str(json)?;

    let index = build_asset_index(&root)?;

    let display_list = root
        .get("displayList")
        .and_then(|v| v.as_array())
        .ok_or_else(|| anyhow!("file has no `displayList` array"))?;

    println!("Found {} display objects", display_list.len());

    let mut world = ObjectModel::new("world", ObjectVariant::Unknown("World".into()));
    for (i, obj) in display_list.iter().enumerate() {
        world.children.push(parse_object(obj, &index, i)?);
    }

    Ok(SceneModel { root: world })
}

/// Everything the generator needs to know about one pack asset.
struct IndexedAsset {
    kind: AssetKind,
    section_key: String,
    pack_url: String,
}

type AssetIndex = HashMap<String, IndexedAsset>;

/// Flatten the `pack` table into a key → asset lookup. This plays the role
/// of the asset-pack resolution service: given a texture key it answers
/// kind, section and pack url.
fn build_asset_index(root: &Value) -> Result<AssetIndex> {
    let pack = root
        .get("pack")
        .ok_or_else(|| anyhow!("file has no `pack` object"))?;

    let url = pack
        .get("url")
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow!("`pack` missing `url`"))?;

    let sections = pack
        .get("sections")
        .and_then(|v| v.as_object())
        .ok_or_else(|| anyhow!("`pack` missing `sections` object"))?;

    let mut index = AssetIndex::new();

    for (section_key, entries) in sections {
        let entries: Vec<PackEntry> = serde_json::from_value(entries.clone())
            .map_err(|e| anyhow!("section `{section_key}` malformed: {e}"))?;

        for entry in entries {
            index.insert(
                entry.key.clone(),
                IndexedAsset {
                    kind: entry.kind,
                    section_key: section_key.clone(),
                    pack_url: url.to_string(),
                },
            );
        }
    }

    println!("Indexed {} pack assets", index.len());
    Ok(index)
}

fn parse_object(obj: &Value, index: &AssetIndex, i: usize) -> Result<ObjectModel> {
    let name = obj
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow!("object {} missing `name`", i))?;

    let type_name = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow!("object `{name}` missing `type`"))?;

    let variant = match type_name {
        "Sprite" => ObjectVariant::Sprite,
        "TileSprite" => ObjectVariant::TileSprite {
            width: f64_field(obj, "width").unwrap_or(0.0),
            height: f64_field(obj, "height").unwrap_or(0.0),
        },
        other => ObjectVariant::Unknown(other.to_string()),
    };

    let mut node = ObjectModel::new(name, variant);

    if f64_field(obj, "x").is_some() || f64_field(obj, "y").is_some() {
        node.transform = Some(Transform {
            x: f64_field(obj, "x").unwrap_or(0.0),
            y: f64_field(obj, "y").unwrap_or(0.0),
        });
    }

    if f64_field(obj, "originX").is_some() || f64_field(obj, "originY").is_some() {
        node.origin = Some(Origin {
            x: f64_field(obj, "originX").unwrap_or(ORIGIN_X_DEFAULT),
            y: f64_field(obj, "originY").unwrap_or(ORIGIN_Y_DEFAULT),
        });
    }

    if let Some(texture) = obj.get("texture").filter(|v| !v.is_null()) {
        node.texture = Some(resolve_texture(texture, index, name)?);
    }

    if let Some(children) = obj.get("children").and_then(|v| v.as_array()) {
        for (j, child) in children.iter().enumerate() {
            node.children.push(parse_object(child, index, j)?);
        }
    }

    Ok(node)
}

fn f64_field(obj: &Value, field: &str) -> Option<f64> {
    obj.get(field).and_then(|v| v.as_f64())
}

/// Turn a `{ "key": ..., "frame": ... }` texture reference into a resolved
/// `FrameRef` via the asset index. The frame field must agree with the
/// asset kind: numeric for spritesheets, string for atlases, absent for
/// plain images.
fn resolve_texture(texture: &Value, index: &AssetIndex, owner: &str) -> Result<FrameRef> {
    let key = texture
        .get("key")
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow!("object `{owner}` texture missing `key`"))?;

    let asset = index
        .get(key)
        .ok_or_else(|| anyhow!("object `{owner}` references unknown asset `{key}`"))?;

    let frame = match (asset.kind, texture.get("frame")) {
        (AssetKind::Image, _) => FrameKey::Implicit,
        (_, None) | (_, Some(Value::Null)) => FrameKey::Implicit,
        (AssetKind::Spritesheet, Some(v)) => {
            let idx = v
                .as_i64()
                .ok_or_else(|| anyhow!("object `{owner}`: spritesheet frame must be a number"))?;
            FrameKey::Index(idx)
        }
        (AssetKind::Atlas, Some(v)) => {
            let frame_key = v
                .as_str()
                .ok_or_else(|| anyhow!("object `{owner}`: atlas frame must be a string"))?;
            FrameKey::Key(frame_key.to_string())
        }
    };

    Ok(FrameRef {
        asset: AssetRef {
            key: key.to_string(),
            kind: asset.kind,
            section_key: asset.section_key.clone(),
            pack_url: asset.pack_url.clone(),
        },
        frame,
    })
}
