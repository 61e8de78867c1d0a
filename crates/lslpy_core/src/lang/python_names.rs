//! Python names user identifiers must not shadow (for codegen identifier escaping).

use std::borrow::Cow;

use super::operators;
use crate::runtime;

/// Hard keywords in Python 3.
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del",
    "elif", "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal",
    "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

/// Builtins the generated code calls or annotates with.
pub const PYTHON_BUILTINS: &[&str] = &["self", "super", "int", "float", "str", "list", "print", "locals"];

/// Check whether an identifier is a Python keyword.
pub fn is_keyword(name: &str) -> bool {
    PYTHON_KEYWORDS.contains(&name)
}

/// Check whether a user identifier would clash with Python syntax or with a name generated code relies on.
pub fn is_reserved(name: &str) -> bool {
    is_keyword(name)
        || PYTHON_BUILTINS.contains(&name)
        || runtime::RUNTIME_NAMES.contains(&name)
        || operators::dispatch_names().any(|n| n == name)
}

/// Rewrite a user identifier so it is safe to emit.
///
/// - A name with a leading `__` gets a trailing `__`, so Python never mangles it inside the class body and the
///   quoted spelling passed to `assign`/`preincr`/... names the same slot as `self.<name>`.
/// - A name whose stem (trailing `_` removed) is reserved gets one more `_`: `pass` -> `pass_`, `pass_` ->
///   `pass__`.
///
/// The mapping is injective over LSL identifiers: rewritten names either start with `__` or have a reserved
/// stem, and no name left as-is has either property.
pub fn escape_identifier(name: &str) -> Cow<'_, str> {
    if name.starts_with("__") {
        Cow::Owned(format!("{name}__"))
    } else if is_reserved(name.trim_end_matches('_')) {
        Cow::Owned(format!("{name}_"))
    } else {
        Cow::Borrowed(name)
    }
}
