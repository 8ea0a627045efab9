//! Minimal code-DOM the generator emits *before* it is rendered to text.
//!
//! Pure value objects: a unit owns class declarations, a class owns method
//! declarations, a method owns an ordered instruction list. Built once,
//! printed once, then discarded.

/// Top-level container of declarations; one per generated file.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub elements: Vec<ClassDecl>,
}

impl Unit {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: String,
    pub superclass: Option<String>,
    pub members: Vec<MethodDecl>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            superclass: None,
            members: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub name: String,
    pub instructions: Vec<Instr>,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Instr {
    /// Opaque literal line, printed verbatim.
    Raw(String),
    Call(MethodCall),
}

/// `target.method(args…)`, optionally captured into `var <name> = …`.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub method: String,
    pub target: String,
    pub args: Vec<CallArg>,
    pub return_to_var: Option<String>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            target: target.into(),
            args: Vec::new(),
            return_to_var: None,
        }
    }

    /// Append a plain numeric argument.
    pub fn arg_int(&mut self, v: i64) {
        self.args.push(CallArg::Int(v));
    }

    pub fn arg_float(&mut self, v: f64) {
        self.args.push(CallArg::Float(v));
    }

    /// Append a string-literal argument; the printer adds the quotes.
    pub fn arg_literal(&mut self, v: impl Into<String>) {
        self.args.push(CallArg::Str(v.into()));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CallArg {
    Int(i64),
    Float(f64),
    /// Unquoted text; rendered inside single quotes.
    Str(String),
}
