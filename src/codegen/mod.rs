//! Component 3 – the functional core.
//!
//! Turns a parsed scene model into a code-DOM unit ready for the writer.

pub mod builder;
pub mod codedom;

use crate::model::SceneModel;
use builder::SceneCodeBuilder;
use codedom::Unit;
use std::path::Path;

/// Build the compilation unit for `scene`. The target file contributes only
/// its base name, which becomes the generated class name.
pub fn run(scene: &SceneModel, target_file: &Path) -> Unit {
    let class_name = class_name_of(target_file);
    SceneCodeBuilder::new(class_name).build(&scene.root)
}

/// Base name with the extension stripped; falls back to "Scene" for paths
/// without a usable stem.
pub fn class_name_of(file: &Path) -> String {
    file.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Scene")
        .to_string()
}
