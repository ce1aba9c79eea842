//! Import statement rewriting.
//!
//! Finds `import { A, B } from '@element-plus/icons-vue'` statements and
//! splits each one in two: names still served by the package stay in a
//! (shorter) named import, names present in the replacement table become
//! default imports of their virtual modules.
//!
//! ```text
//! import { ArrowRight, Close } from '@element-plus/icons-vue'
//!   -> import { Close } from '@element-plus/icons-vue'
//!      import ArrowRight from 'virtual:ep-icons-replace/ArrowRight'
//! ```
//!
//! This is pattern matching over text, not a parse. Default or namespace
//! imports of the package and `export { .. } from` re-exports do not match
//! and are left alone.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::config::TARGET_PACKAGE;
use crate::replacement::ReplacementTable;
use crate::virtual_id::virtual_id;

static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+\{([^}]+)\}\s+from\s+['"]@element-plus/icons-vue['"]"#)
        .expect("import pattern is valid")
});

static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)//[^\n]*|/\*.*?\*/").expect("comment pattern is valid")
});

/// One entry of a braced import list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Specifier<'a> {
    /// Source text of the entry, trimmed.
    text: &'a str,
    /// Name exported by the package.
    imported: &'a str,
    /// Local binding (differs from `imported` for `A as B`).
    local: &'a str,
}

impl<'a> Specifier<'a> {
    fn parse(text: &'a str) -> Self {
        let parts: Vec<&str> = text.split_whitespace().collect();
        match parts.as_slice() {
            [imported, "as", local] => Self {
                text,
                imported: *imported,
                local: *local,
            },
            _ => Self {
                text,
                imported: text,
                local: text,
            },
        }
    }
}

/// Drop `//` and `/* */` comments so they cannot leak into a one-line import.
fn strip_comments(list: &str) -> Cow<'_, str> {
    COMMENT_RE.replace_all(list, " ")
}

/// Split a braced import list into specifiers, in source order.
fn parse_specifiers(list: &str) -> Vec<Specifier<'_>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Specifier::parse)
        .collect()
}

/// Replacement text for one matched statement and the number of redirected
/// names, or `None` if no name in it has a replacement.
fn rewrite_statement(list: &str, table: &ReplacementTable) -> Option<(String, usize)> {
    let list = strip_comments(list);
    let (replaced, remaining): (Vec<_>, Vec<_>) = parse_specifiers(&list)
        .into_iter()
        .partition(|spec| table.contains(spec.imported));

    if replaced.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(replaced.len() + 1);
    if !remaining.is_empty() {
        let names: Vec<&str> = remaining.iter().map(|spec| spec.text).collect();
        lines.push(format!(
            "import {{ {} }} from '{}'",
            names.join(", "),
            TARGET_PACKAGE
        ));
    }
    for spec in &replaced {
        lines.push(format!(
            "import {} from '{}'",
            spec.local,
            virtual_id(spec.imported)
        ));
    }

    Some((lines.join("\n"), replaced.len()))
}

/// Result of rewriting a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub code: String,
    /// Number of import statements that were split.
    pub statements: usize,
    /// Number of names redirected to virtual modules.
    pub redirected: usize,
}

/// Rewrite every matching import statement in `code`.
///
/// Returns `None` when nothing changed: no matching statement, or none of
/// the matched statements imports a replaced name.
pub fn rewrite_imports(code: &str, table: &ReplacementTable) -> Option<Rewritten> {
    if table.is_empty() || !code.contains(TARGET_PACKAGE) {
        return None;
    }

    let mut statements = 0;
    let mut redirected = 0;

    let code = IMPORT_RE.replace_all(code, |caps: &Captures<'_>| {
        let list = &caps[1];
        match rewrite_statement(list, table) {
            Some((text, count)) => {
                statements += 1;
                redirected += count;
                text
            }
            None => caps[0].to_string(),
        }
    });

    if statements == 0 {
        return None;
    }

    Some(Rewritten {
        code: code.into_owned(),
        statements,
        redirected,
    })
}
