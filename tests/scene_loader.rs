use std::fs;
use std::path::Path;

use scenegen_rust::codegen;
use scenegen_rust::model::{FrameKey, ObjectVariant};
use scenegen_rust::parser::load_from_json;
use scenegen_rust::writer::js;

#[test]
fn parses_display_objects() {
    let json = fs::read_to_string("tests/example_scene.json").unwrap();
    let scene = load_from_json(&json).expect("valid json");

    // sample file has three display objects
    assert_eq!(scene.root.children.len(), 3);

    let logo = &scene.root.children[0];
    assert_eq!(logo.editor_name, "logo1");
    assert_eq!(logo.variant, ObjectVariant::Sprite);
    let frame = logo.texture.as_ref().expect("texture resolved");
    assert_eq!(frame.asset.key, "logo");
    assert_eq!(frame.asset.section_key, "level");
    assert_eq!(frame.asset.pack_url, "assets/pack.json");
    assert_eq!(frame.frame, FrameKey::Implicit);

    let floor = &scene.root.children[1];
    assert!(matches!(floor.variant, ObjectVariant::TileSprite { .. }));
    assert_eq!(
        floor.texture.as_ref().unwrap().frame,
        FrameKey::Key("ground/0".into())
    );

    // unrecognized type survives the loader as-is
    assert_eq!(
        scene.root.children[2].variant,
        ObjectVariant::Unknown("Text".into())
    );
}

#[test]
fn unknown_texture_key_is_a_loader_error() {
    let json = r#"{
        "pack": { "url": "p.json", "sections": { "s": [] } },
        "displayList": [
            { "type": "Sprite", "name": "s1", "x": 0, "y": 0,
              "texture": { "key": "nope" } }
        ]
    }"#;

    let err = load_from_json(json).unwrap_err();
    assert!(err.to_string().contains("unknown asset `nope`"));
}

#[test]
fn full_pipeline_renders_scene_class() {
    let json = fs::read_to_string("tests/example_scene.json").unwrap();
    let scene = load_from_json(&json).expect("valid json");

    let unit = codegen::run(&scene, Path::new("tests/Example.scene"));
    let text = js::render(&unit);

    let expected = "\
class Example extends Phaser.Scene {
    preload() {
        this.load.pack('level', 'assets/pack.json');
    }

    create() {
        this.add.sprite(400, 300, 'logo');
        var floor = this.add.tileSprite(0, 550, 800, 50, 'hero', 'ground/0');
        floor.setOrigin(0, 0);
    }
}
";
    assert_eq!(text, expected);
}
