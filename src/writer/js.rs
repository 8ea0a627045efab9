//! Render a code-DOM unit as a JavaScript class file without using
//! external crates.

use crate::codegen::codedom::{CallArg, ClassDecl, Instr, MethodCall, MethodDecl, Unit};
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

const INDENT: &str = "    ";

/// Write one `<ClassName>.js` per class declaration in the unit.
pub fn emit(unit: &Unit, out_dir: &Path) -> io::Result<()> {
    for cls in &unit.elements {
        let path = out_dir.join(format!("{}.js", cls.name));
        fs::write(&path, render_class(cls))?;
    }
    Ok(())
}

/// Full textual rendering; kept separate from `emit` so tests can assert on
/// the text without touching the filesystem.
pub fn render(unit: &Unit) -> String {
    let mut out = String::new();
    for cls in &unit.elements {
        out.push_str(&render_class(cls));
    }
    out
}

fn render_class(cls: &ClassDecl) -> String {
    let mut out = String::new();

    match &cls.superclass {
        Some(sup) => {
            let _ = writeln!(out, "class {} extends {} {{", cls.name, sup);
        }
        None => {
            let _ = writeln!(out, "class {} {{", cls.name);
        }
    }

    for (i, method) in cls.members.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_method(&mut out, method);
    }

    out.push_str("}\n");
    out
}

fn render_method(out: &mut String, method: &MethodDecl) {
    let _ = writeln!(out, "{INDENT}{}() {{", method.name);

    for instr in &method.instructions {
        match instr {
            Instr::Raw(line) => {
                let _ = writeln!(out, "{INDENT}{INDENT}{line}");
            }
            Instr::Call(call) => {
                let _ = writeln!(out, "{INDENT}{INDENT}{}", render_call(call));
            }
        }
    }

    let _ = writeln!(out, "{INDENT}}}");
}

fn render_call(call: &MethodCall) -> String {
    let args: Vec<String> = call.args.iter().map(render_arg).collect();
    let invocation = format!("{}.{}({});", call.target, call.method, args.join(", "));

    match &call.return_to_var {
        Some(var) => format!("var {var} = {invocation}"),
        None => invocation,
    }
}

fn render_arg(arg: &CallArg) -> String {
    match arg {
        CallArg::Int(v) => v.to_string(),
        // Display on f64 drops a zero fraction, so 0.5 prints "0.5" and
        // 1.0 prints "1".
        CallArg::Float(v) => v.to_string(),
        CallArg::Str(s) => format!("'{s}'"),
    }
}
