//! # Edit Script Compute / Apply

use crate::edit_script::{EditOp, ScriptDirection};

/// A directional prefix/suffix edit script.
///
/// Built by [`EditScript::compute`]; replayed by [`EditScript::apply`].
///
/// The ops are replayed over the source (reversed, for
/// [`ScriptDirection::Reverse`]) with a cursor; whatever remains after the
/// last op is copied through unchanged. So the unchanged far side of the word
/// is never recorded, and every identity script has no ops at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EditScript {
    direction: ScriptDirection,
    ops: Vec<EditOp>,
}

impl EditScript {
    /// Build a script from raw parts.
    ///
    /// No minimality check is made; [`EditScript::compute`] is the canonical constructor.
    pub fn from_ops(
        direction: ScriptDirection,
        ops: Vec<EditOp>,
    ) -> Self {
        Self { direction, ops }
    }

    /// The identity script for `direction`.
    pub fn identity(direction: ScriptDirection) -> Self {
        Self::from_ops(direction, Vec::new())
    }

    /// Compute the minimal script turning `source` into `target`.
    ///
    /// The common prefix and common suffix are found independently (on the
    /// reversed strings for [`ScriptDirection::Reverse`]), with the suffix
    /// shortened so the two never overlap on the shorter string.
    ///
    /// Comparison is case-sensitive; callers normalize case first.
    pub fn compute(
        source: &str,
        target: &str,
        direction: ScriptDirection,
    ) -> Self {
        let (source, target): (Vec<char>, Vec<char>) = match direction {
            ScriptDirection::Forward => (source.chars().collect(), target.chars().collect()),
            ScriptDirection::Reverse => (source.chars().rev().collect(), target.chars().rev().collect()),
        };

        let prefix = source
            .iter()
            .zip(&target)
            .take_while(|(a, b)| a == b)
            .count();

        // Zipping the remainders caps the suffix at min(len) - prefix.
        let suffix = source[prefix..]
            .iter()
            .rev()
            .zip(target[prefix..].iter().rev())
            .take_while(|(a, b)| a == b)
            .count();

        let deleted = &source[prefix..source.len() - suffix];
        let inserted = &target[prefix..target.len() - suffix];

        let mut ops = Vec::with_capacity(3);
        if deleted.is_empty() && inserted.is_empty() {
            return Self::from_ops(direction, ops);
        }

        let to_text = |chars: &[char]| -> String {
            match direction {
                ScriptDirection::Forward => chars.iter().collect(),
                ScriptDirection::Reverse => chars.iter().rev().collect(),
            }
        };

        if prefix > 0 {
            ops.push(EditOp::Keep(prefix));
        }
        if !deleted.is_empty() {
            ops.push(EditOp::Delete(to_text(deleted)));
        }
        if !inserted.is_empty() {
            ops.push(EditOp::Insert(to_text(inserted)));
        }

        Self::from_ops(direction, ops)
    }

    /// Compute a [`ScriptDirection::Forward`] script.
    pub fn forward(
        source: &str,
        target: &str,
    ) -> Self {
        Self::compute(source, target, ScriptDirection::Forward)
    }

    /// Compute a [`ScriptDirection::Reverse`] script.
    pub fn reverse(
        source: &str,
        target: &str,
    ) -> Self {
        Self::compute(source, target, ScriptDirection::Reverse)
    }

    /// The anchoring direction.
    pub fn direction(&self) -> ScriptDirection {
        self.direction
    }

    /// The recorded operations.
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    /// Is this a no-op script?
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// Replay the script over `source`.
    ///
    /// Applied to the source it was computed from, this reproduces the target
    /// exactly. Applied to any other string it is best-effort and never fails:
    /// * `Keep(n)` copies at most the remaining chars;
    /// * `Delete(text)` skips at most the remaining chars, without checking
    ///   that they match `text`;
    /// * `Insert(text)` always emits `text`;
    /// * the rest of the source is copied through.
    pub fn apply(
        &self,
        source: &str,
    ) -> String {
        match self.direction {
            ScriptDirection::Forward => {
                let working: Vec<char> = source.chars().collect();
                self.replay(&working).into_iter().collect()
            }
            ScriptDirection::Reverse => {
                let working: Vec<char> = source.chars().rev().collect();
                self.replay(&working).into_iter().rev().collect()
            }
        }
    }

    fn replay(
        &self,
        working: &[char],
    ) -> Vec<char> {
        let reversed = self.direction == ScriptDirection::Reverse;
        let mut out = Vec::with_capacity(working.len() + 4);
        let mut cursor = 0;

        for op in &self.ops {
            match op {
                EditOp::Keep(n) => {
                    let end = (cursor + n).min(working.len());
                    out.extend_from_slice(&working[cursor..end]);
                    cursor = end;
                }
                EditOp::Delete(text) => {
                    let end = (cursor + op.consumed()).min(working.len());
                    if log::log_enabled!(log::Level::Trace) {
                        let skipped: String = if reversed {
                            working[cursor..end].iter().rev().collect()
                        } else {
                            working[cursor..end].iter().collect()
                        };
                        if &skipped != text {
                            log::trace!("edit script {self} deleted {skipped:?}, expected {text:?}");
                        }
                    }
                    cursor = end;
                }
                EditOp::Insert(text) => {
                    if reversed {
                        out.extend(text.chars().rev());
                    } else {
                        out.extend(text.chars());
                    }
                }
            }
        }

        out.extend_from_slice(&working[cursor..]);
        out
    }
}
