//! The `search-index.js` script form.
//!
//! Documentation sites ship the index as a small script:
//!
//! ```text
//! var searchIndex = {};
//! searchIndex['certitude'] = {"items":[...],"paths":[...]};
//! initSearch(searchIndex);
//! ```
//!
//! [`parse`] accepts exactly this shape and [`render`] produces it.

use crate::error::{IndexError, Result};
use crate::index::{RawRecord, RawSymbolIndex, SymbolIndex};
use regex::Regex;
use std::sync::LazyLock;

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^var\s+searchIndex\s*=\s*\{\s*\}\s*;$").expect("valid declaration regex")
});

static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^searchIndex\[('[^'\\]*'|"(?:[^"\\]|\\.)*")\]\s*=\s*(\{.*\})\s*;$"#)
        .expect("valid assignment regex")
});

static INIT_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^initSearch\(\s*searchIndex\s*\)\s*;$").expect("valid init regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectDeclaration,
    Assignments,
    Initialized,
}

/// Parses a search index script into a validated [`SymbolIndex`].
pub fn parse(script: &str) -> Result<SymbolIndex> {
    let mut state = State::ExpectDeclaration;
    let mut namespaces: Vec<(String, RawRecord)> = Vec::new();

    for (number, line) in script.lines().enumerate() {
        let line_no = number + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match state {
            State::ExpectDeclaration => {
                if !DECLARATION.is_match(line) {
                    return Err(IndexError::script(
                        line_no,
                        "expected `var searchIndex = {};`",
                    ));
                }
                state = State::Assignments;
            }
            State::Assignments => {
                if INIT_CALL.is_match(line) {
                    state = State::Initialized;
                    continue;
                }
                let Some(captures) = ASSIGNMENT.captures(line) else {
                    return Err(IndexError::script(
                        line_no,
                        "expected `searchIndex['<key>'] = {...};` or `initSearch(searchIndex);`",
                    ));
                };
                let key = unquote_key(&captures[1])
                    .ok_or_else(|| IndexError::script(line_no, "invalid namespace key"))?;
                if namespaces.iter().any(|(existing, _)| *existing == key) {
                    return Err(IndexError::DuplicateNamespace(key));
                }
                let record: RawRecord =
                    serde_json::from_str(&captures[2]).map_err(|source| IndexError::Json {
                        namespace: Some(key.clone()),
                        source,
                    })?;
                namespaces.push((key, record));
            }
            State::Initialized => {
                return Err(IndexError::script(
                    line_no,
                    "unexpected statement after `initSearch(searchIndex);`",
                ));
            }
        }
    }

    match state {
        State::ExpectDeclaration => Err(IndexError::script(
            1,
            "missing `var searchIndex = {};` declaration",
        )),
        State::Assignments => Err(IndexError::script(
            script.lines().count(),
            "missing `initSearch(searchIndex);` call",
        )),
        State::Initialized => SymbolIndex::from_raw(RawSymbolIndex { namespaces }),
    }
}

/// Renders an index as a search index script. `parse(&render(x)?)` yields `x`.
pub fn render(index: &SymbolIndex) -> Result<String> {
    let mut output = String::from("var searchIndex = {};\n");

    for (key, record) in index.to_raw().namespaces {
        let record = serde_json::to_string(&record).map_err(IndexError::json)?;
        output.push_str(&format!("searchIndex[{}] = {};\n", quote_key(&key)?, record));
    }

    output.push_str("initSearch(searchIndex);\n");
    Ok(output)
}

fn unquote_key(quoted: &str) -> Option<String> {
    if let Some(inner) = quoted
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
    {
        Some(inner.to_string())
    } else {
        serde_json::from_str(quoted).ok()
    }
}

/// Single quotes for plain keys, a JSON string literal otherwise.
///
/// Control characters must be escaped: a raw line break would split the
/// assignment across two lines.
fn quote_key(key: &str) -> Result<String> {
    if key.contains(['\'', '\\']) || key.chars().any(char::is_control) {
        serde_json::to_string(key).map_err(IndexError::json)
    } else {
        Ok(format!("'{}'", key))
    }
}
