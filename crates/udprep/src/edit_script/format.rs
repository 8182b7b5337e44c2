//! # Canonical Script Strings
//!
//! ```terminaloutput
//! {DIR}[|{OP}]*
//! ```
//!
//! * `DIR` is `f` (forward) or `r` (reverse).
//! * `OP` is `={n}` (keep), `-{text}` (delete), or `+{text}` (insert).
//! * In `text`, `\` and `|` are written `\\` and `\|`.
//!
//! The identity script is just its direction marker.

use core::{fmt, str::FromStr};

use crate::{
    edit_script::{EditOp, EditScript, ScriptDirection},
    errors::UdprepError,
};

const SEPARATOR: char = '|';
const ESCAPE: char = '\\';

const KEEP_TAG: char = '=';
const DELETE_TAG: char = '-';
const INSERT_TAG: char = '+';

fn write_escaped(
    f: &mut fmt::Formatter<'_>,
    text: &str,
) -> fmt::Result {
    for c in text.chars() {
        if c == SEPARATOR || c == ESCAPE {
            write!(f, "{ESCAPE}")?;
        }
        write!(f, "{c}")?;
    }
    Ok(())
}

impl fmt::Display for EditScript {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.direction().marker())?;
        for op in self.ops() {
            write!(f, "{SEPARATOR}")?;
            match op {
                EditOp::Keep(n) => write!(f, "{KEEP_TAG}{n}")?,
                EditOp::Delete(text) => {
                    write!(f, "{DELETE_TAG}")?;
                    write_escaped(f, text)?;
                }
                EditOp::Insert(text) => {
                    write!(f, "{INSERT_TAG}")?;
                    write_escaped(f, text)?;
                }
            }
        }
        Ok(())
    }
}

/// Split on unescaped separators, resolving escapes.
fn split_fields(s: &str) -> Result<Vec<String>, UdprepError> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        match c {
            ESCAPE => match chars.next() {
                Some(e @ (ESCAPE | SEPARATOR)) => current.push(e),
                Some(e) => {
                    return Err(UdprepError::Parse(format!(
                        "invalid escape {ESCAPE}{e} in edit script {s:?}"
                    )));
                }
                None => {
                    return Err(UdprepError::Parse(format!(
                        "dangling escape in edit script {s:?}"
                    )));
                }
            },
            SEPARATOR => fields.push(core::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    Ok(fields)
}

fn parse_op(
    field: &str,
    script: &str,
) -> Result<EditOp, UdprepError> {
    let mut chars = field.chars();
    let tag = chars.next();
    let payload = chars.as_str();

    let invalid = |what: &str| UdprepError::Parse(format!("{what} {field:?} in edit script {script:?}"));

    match tag {
        Some(KEEP_TAG) => {
            let n: usize = payload.parse().map_err(|_| invalid("bad keep count"))?;
            if n == 0 || n.to_string() != payload {
                return Err(invalid("non-canonical keep count"));
            }
            Ok(EditOp::Keep(n))
        }
        Some(DELETE_TAG) | Some(INSERT_TAG) if payload.is_empty() => Err(invalid("empty text")),
        Some(DELETE_TAG) => Ok(EditOp::Delete(payload.to_string())),
        Some(INSERT_TAG) => Ok(EditOp::Insert(payload.to_string())),
        _ => Err(invalid("unknown op")),
    }
}

impl FromStr for EditScript {
    type Err = UdprepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = split_fields(s)?;
        let (head, rest) = fields
            .split_first()
            .ok_or_else(|| UdprepError::Parse("empty edit script".to_string()))?;

        let direction = ScriptDirection::from_marker(head).ok_or_else(|| {
            UdprepError::Parse(format!("unknown direction {head:?} in edit script {s:?}"))
        })?;

        let ops = rest
            .iter()
            .map(|field| parse_op(field, s))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(EditScript::from_ops(direction, ops))
    }
}
