//! Modifier resolution for a single command.

use crate::definitions::{Command, Definitions};
use serde::Serialize;

/// A modifier whose placeholder was left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum UnresolvedModifier {
    /// The modifier references a group that does not exist
    MissingGroup {
        /// Position of the modifier in the command
        position: usize,
        /// Referenced group key
        group: String,
    },
    /// The effective argument is not an item of the group
    MissingItem {
        /// Position of the modifier in the command
        position: usize,
        /// Group key
        group: String,
        /// Argument token that failed to match
        arg: String,
    },
}

impl std::fmt::Display for UnresolvedModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingGroup { position, group } => {
                write!(f, "argument {} references unknown modifier group '{group}'", position + 1)
            }
            Self::MissingItem {
                position,
                group,
                arg,
            } => write!(
                f,
                "argument {} '{arg}' is not defined in modifier group '{group}'",
                position + 1
            ),
        }
    }
}

/// Output of resolving a command's modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Command content after substitution
    pub text: String,
    /// Modifiers that were skipped, in positional order
    pub unresolved: Vec<UnresolvedModifier>,
}

/// Substitutes every modifier of `command` into its content.
///
/// The modifier at position `i` binds to `tokens[i]`, or to its default
/// argument when the line provided fewer tokens. Surplus tokens are ignored.
/// A modifier whose group or item cannot be found is skipped and its
/// placeholder stays in the text.
pub fn resolve<S: AsRef<str>>(
    definitions: &Definitions,
    command: &Command,
    tokens: &[S],
) -> Resolution {
    let mut text = command.content.clone();
    let mut unresolved = Vec::new();

    for (position, modifier) in command.modifiers.iter().enumerate() {
        let arg = tokens
            .get(position)
            .map_or(modifier.default_arg.as_str(), AsRef::as_ref);

        let Some(group) = definitions.modifier_group(&modifier.group) else {
            unresolved.push(UnresolvedModifier::MissingGroup {
                position,
                group: modifier.group.clone(),
            });
            continue;
        };

        let Some(item) = group.item(arg) else {
            unresolved.push(UnresolvedModifier::MissingItem {
                position,
                group: group.key.clone(),
                arg: arg.to_string(),
            });
            continue;
        };

        let placeholder = format!("{{{}}}", modifier.placeholder_name(group));
        text = text.replace(&placeholder, &item.value);
    }

    Resolution { text, unresolved }
}
