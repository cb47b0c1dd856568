//! Guard that keeps ad-hoc Cypher read-only.
//!
//! Clause keywords are matched on the query with string literals, backtick
//! identifiers and comments blanked out, so `WHERE t.name = 'Create'` passes
//! while `MATCH (n) DETACH DELETE n` does not. Procedure calls are checked by
//! name against a fixed list of read-only procedures.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{GatewayError, GatewayResult};

static WRITE_CLAUSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(CREATE|MERGE|DELETE|DETACH|SET|REMOVE|DROP|FOREACH|LOAD\s+CSV|IN\s+TRANSACTIONS)\b",
    )
    .expect("write clause pattern is valid")
});

static PROCEDURE_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bCALL\s+([A-Za-z_][\w$]*(?:\s*\.\s*[A-Za-z_][\w$]*)*)")
        .expect("procedure call pattern is valid")
});

/// Procedures that only read, compared case-insensitively.
const READ_ONLY_PROCEDURES: &[&str] = &[
    "db.labels",
    "db.relationshiptypes",
    "db.propertykeys",
    "db.indexes",
    "db.constraints",
    "db.info",
    "db.ping",
    "db.index.fulltext.querynodes",
    "db.index.fulltext.queryrelationships",
    "dbms.components",
];

const READ_ONLY_PREFIXES: &[&str] = &["db.schema."];

pub fn ensure_read_only(query: &str) -> GatewayResult<()> {
    let code = scan(query, false);

    if let Some(found) = WRITE_CLAUSE
        .find_iter(&code)
        .find(|m| !is_property_access(&code, m.start()))
    {
        return Err(GatewayError::Validation(format!(
            "`{}` is not allowed in a read-only query",
            normalize(found.as_str())
        )));
    }

    // Same byte offsets as `code`, but backtick identifiers keep their text
    // so `CALL `apoc.create.node`` reads as the procedure it names.
    let named = scan(query, true);
    for call in PROCEDURE_CALL.captures_iter(&named) {
        let (Some(keyword), Some(name)) = (call.get(0), call.get(1)) else {
            continue;
        };
        // A `CALL` that only exists inside an identifier is not a call.
        let start = keyword.start();
        if !code
            .get(start..start + 4)
            .is_some_and(|word| word.eq_ignore_ascii_case("CALL"))
        {
            continue;
        }

        let procedure: String = name.as_str().split_whitespace().collect();
        if !is_read_only_procedure(&procedure) {
            return Err(GatewayError::Validation(format!(
                "procedure `{procedure}` is not allowed in a read-only query"
            )));
        }
    }

    Ok(())
}

fn is_read_only_procedure(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    READ_ONLY_PROCEDURES.contains(&name.as_str())
        || READ_ONLY_PREFIXES
            .iter()
            .any(|prefix| name.starts_with(prefix) && name.len() > prefix.len())
}

/// `n.set` or `n. remove` is a property, not a clause.
fn is_property_access(code: &str, start: usize) -> bool {
    code[..start].trim_end().ends_with('.')
}

fn normalize(keyword: &str) -> String {
    keyword
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

#[derive(Clone, Copy, PartialEq)]
enum Scan {
    Code,
    Quoted(char),
    LineComment,
    BlockComment,
}

/// Replace everything inside quotes and comments with spaces, keeping byte
/// offsets. Backtick identifiers are blanked too unless `keep_identifiers`,
/// in which case only the backticks themselves become spaces.
fn scan(query: &str, keep_identifiers: bool) -> String {
    let mut out = String::with_capacity(query.len());
    let mut state = Scan::Code;
    let mut chars = query.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            Scan::Code => match c {
                '\'' | '"' | '`' => {
                    state = Scan::Quoted(c);
                    out.push(' ');
                }
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    state = Scan::LineComment;
                    out.push_str("  ");
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = Scan::BlockComment;
                    out.push_str("  ");
                }
                _ => out.push(c),
            },
            Scan::Quoted(quote) => {
                if c == '\\' && quote != '`' {
                    blank(&mut out, c);
                    if let Some(escaped) = chars.next() {
                        blank(&mut out, escaped);
                    }
                    continue;
                }
                if c == quote {
                    state = Scan::Code;
                    out.push(' ');
                } else if quote == '`' && keep_identifiers {
                    out.push(c);
                } else {
                    blank(&mut out, c);
                }
            }
            Scan::LineComment => {
                if c == '\n' {
                    state = Scan::Code;
                    out.push('\n');
                } else {
                    blank(&mut out, c);
                }
            }
            Scan::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = Scan::Code;
                    out.push_str("  ");
                } else {
                    blank(&mut out, c);
                }
            }
        }
    }

    out
}

fn blank(out: &mut String, c: char) {
    out.extend(std::iter::repeat(' ').take(c.len_utf8()));
}
