//! # Edit Scripts
//!
//! An [`EditScript`] is a minimal, reversible description of how to turn one
//! string into another: keep a common prefix, delete the differing middle of
//! the source, insert the differing middle of the target, keep the rest.
//!
//! Scripts come in two [`ScriptDirection`]s:
//! * [`ScriptDirection::Forward`] anchors positions at the start of the word;
//!   suited to prefixal morphology.
//! * [`ScriptDirection::Reverse`] anchors positions at the end of the word;
//!   suited to suffixal morphology.
//!
//! Every script has a canonical string form (see [`EditScript`]'s `Display`
//! and `FromStr`), which is what lemma-rule vocabularies store as labels.
//!
//! ```rust
//! use udprep::edit_script::{EditScript, ScriptDirection};
//!
//! let script = EditScript::compute("running", "run", ScriptDirection::Reverse);
//! assert_eq!(script.to_string(), "r|-ning");
//! assert_eq!(script.apply("running"), "run");
//!
//! // The same rule, applied to a novel form.
//! let rule: EditScript = "r|-ning".parse().unwrap();
//! assert_eq!(rule.apply("spinning"), "spin");
//! ```

mod direction;
mod edit_op;
mod format;
mod script;

#[doc(inline)]
pub use direction::ScriptDirection;
#[doc(inline)]
pub use edit_op::EditOp;
#[doc(inline)]
pub use script::EditScript;

/// Derive the lemma-rule label for a `(form, lemma)` pair.
///
/// Both sides are lower-cased before the script is computed.
pub fn lemma_rule(
    form: &str,
    lemma: &str,
    direction: ScriptDirection,
) -> String {
    EditScript::compute(&form.to_lowercase(), &lemma.to_lowercase(), direction).to_string()
}
