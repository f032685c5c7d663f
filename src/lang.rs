// src/lang.rs
use tree_sitter::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Rust,
    Python,
    TypeScript,
}

impl Lang {
    #[must_use]
    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext {
            "rs" => Some(Self::Rust),
            "py" => Some(Self::Python),
            "ts" | "tsx" | "js" | "jsx" => Some(Self::TypeScript),
            _ => None,
        }
    }

    #[must_use]
    pub fn grammar(self) -> Language {
        match self {
            Self::Rust => tree_sitter_rust::language(),
            Self::Python => tree_sitter_python::language(),
            Self::TypeScript => tree_sitter_typescript::language_typescript(),
        }
    }

    /// Language tag carried on graph nodes.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Python => "python",
            Self::TypeScript => "typescript",
        }
    }

    /// Tree-sitter query capturing import statements.
    #[must_use]
    pub fn import_query(self) -> &'static str {
        match self {
            Self::Rust => RUST_IMPORTS,
            Self::Python => PYTHON_IMPORTS,
            Self::TypeScript => TS_IMPORTS,
        }
    }
}

const RUST_IMPORTS: &str = r"
    (use_declaration argument: (_) @import)
    (mod_item name: (identifier) @mod)
";

const PYTHON_IMPORTS: &str = r"
    (import_statement name: (dotted_name) @import)
    (aliased_import name: (dotted_name) @import)
    (import_from_statement module_name: (dotted_name) @import)
";

const TS_IMPORTS: &str = r#"
    (import_statement source: (string) @import)
    (export_statement source: (string) @import)
    (call_expression
      function: (identifier) @func
      arguments: (arguments (string) @import)
      (#eq? @func "require"))
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ext() {
        assert_eq!(Lang::from_ext("rs"), Some(Lang::Rust));
        assert_eq!(Lang::from_ext("tsx"), Some(Lang::TypeScript));
        assert_eq!(Lang::from_ext("md"), None);
    }
}
