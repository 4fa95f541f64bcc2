use std::fmt::Display;

const INDENT: &str = "    ";

/// Line writer for FortiGate CLI scripts.
///
/// `config ... end` and `edit ... next` blocks are opened and closed by the
/// same call, so every block is balanced no matter which settings its body
/// writes. Nested blocks are indented four spaces per level.
#[derive(Debug, Default)]
pub struct CliScript {
    out: String,
    depth: usize,
}

impl CliScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// `config <path>` ... `end`
    pub fn config(&mut self, path: &str, body: impl FnOnce(&mut Self)) {
        self.line(format_args!("config {path}"));
        self.nested(body);
        self.line("end");
    }

    /// `edit <key>` ... `next`
    pub fn edit(&mut self, key: impl Display, body: impl FnOnce(&mut Self)) {
        self.line(format_args!("edit {key}"));
        self.nested(body);
        self.line("next");
    }

    /// `edit "<key>"` ... `next`
    pub fn edit_quoted(&mut self, key: &str, body: impl FnOnce(&mut Self)) {
        self.edit(format_args!("\"{key}\""), body);
    }

    /// `set <key> <value>`
    pub fn set(&mut self, key: &str, value: impl Display) {
        self.line(format_args!("set {key} {value}"));
    }

    /// `set <key> "<value>"`, without escaping `value`.
    pub fn set_quoted(&mut self, key: &str, value: &str) {
        self.line(format_args!("set {key} \"{value}\""));
    }

    /// An empty line, never indented.
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn nested(&mut self, body: impl FnOnce(&mut Self)) {
        self.depth += 1;
        body(self);
        self.depth -= 1;
    }

    fn line(&mut self, text: impl Display) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(&text.to_string());
        self.out.push('\n');
    }
}
