//! Command selection sessions.
//!
//! A session tracks one interaction: the user picks a command, then picks an
//! item for each of its argument slots. Once every slot has a selection the
//! session completes with a script line ready to insert. Starting a new
//! session is the only way to pick another command, so no selection state
//! outlives the interaction that created it.

use crate::definitions::{Command, Definitions, ModifierGroup};
use thiserror::Error;

/// Errors raised by [`SelectionSession::choose`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The slot index is out of range
    #[error("command '{command}' has {count} argument slots, no slot {slot}")]
    NoSuchSlot {
        /// Command key
        command: String,
        /// Requested slot
        slot: usize,
        /// Number of slots
        count: usize,
    },
    /// The argument is not an item of the slot's group
    #[error("'{arg}' is not an argument of modifier group '{group}'")]
    NoSuchArgument {
        /// Group key
        group: String,
        /// Requested argument
        arg: String,
    },
}

/// One selectable argument of the command being composed.
#[derive(Debug, Clone)]
pub struct ArgumentSlot<'a> {
    /// Position of the modifier in the command
    pub position: usize,
    /// Group the choices come from
    pub group: &'a ModifierGroup,
    /// Index into `group.items` of the current selection
    pub selected: Option<usize>,
}

impl ArgumentSlot<'_> {
    /// Argument token of the current selection.
    #[must_use]
    pub fn selected_arg(&self) -> Option<&str> {
        self.selected
            .and_then(|idx| self.group.items.get(idx))
            .map(|item| item.arg.as_str())
    }
}

/// Result of starting a session.
#[derive(Debug)]
pub enum SessionStart<'a> {
    /// The command takes no arguments; holds the finished script line
    Complete(String),
    /// The command needs argument selections
    Pending(SelectionSession<'a>),
}

/// Result of a selection.
#[derive(Debug)]
pub enum SessionStep<'a> {
    /// Every slot is selected; holds the finished script line
    Complete(String),
    /// At least one slot still lacks a selection
    Pending(SelectionSession<'a>),
}

/// In-progress argument selection for one command.
#[derive(Debug, Clone)]
pub struct SelectionSession<'a> {
    command: &'a Command,
    slots: Vec<ArgumentSlot<'a>>,
}

impl<'a> SelectionSession<'a> {
    /// Starts composing a line for `command`.
    ///
    /// Each modifier whose group exists and has items becomes a slot,
    /// preselected with its default argument when that argument is an item of
    /// the group. Preselection alone never completes the session.
    pub fn begin(definitions: &'a Definitions, command: &'a Command) -> SessionStart<'a> {
        if command.modifiers.is_empty() {
            return SessionStart::Complete(format!("{}\n", command.command));
        }

        let slots = command
            .modifiers
            .iter()
            .enumerate()
            .filter_map(|(position, modifier)| {
                let Some(group) = definitions.modifier_group(&modifier.group) else {
                    tracing::debug!(
                        command = %command.command,
                        group = %modifier.group,
                        "skipping argument slot with unknown group"
                    );
                    return None;
                };
                if group.items.is_empty() {
                    return None;
                }
                Some(ArgumentSlot {
                    position,
                    group,
                    selected: group.item_index(&modifier.default_arg),
                })
            })
            .collect();

        SessionStart::Pending(Self { command, slots })
    }

    /// The command being composed.
    #[must_use]
    pub fn command(&self) -> &'a Command {
        self.command
    }

    /// Selectable slots in positional order.
    #[must_use]
    pub fn slots(&self) -> &[ArgumentSlot<'a>] {
        &self.slots
    }

    /// Selects `arg` in `slot`, replacing any previous selection there.
    ///
    /// Completes the session when every slot has a selection.
    pub fn choose(mut self, slot: usize, arg: &str) -> Result<SessionStep<'a>, SelectionError> {
        self.select(slot, arg)?;
        Ok(self.try_complete())
    }

    /// Selects `arg` in `slot` without attempting to complete.
    pub fn select(&mut self, slot: usize, arg: &str) -> Result<(), SelectionError> {
        let count = self.slots.len();
        let target = self.slots.get_mut(slot).ok_or_else(|| SelectionError::NoSuchSlot {
            command: self.command.command.clone(),
            slot,
            count,
        })?;

        let idx = target
            .group
            .item_index(arg)
            .ok_or_else(|| SelectionError::NoSuchArgument {
                group: target.group.key.clone(),
                arg: arg.to_string(),
            })?;
        target.selected = Some(idx);
        Ok(())
    }

    /// Completes the session if every slot has a selection.
    #[must_use]
    pub fn try_complete(self) -> SessionStep<'a> {
        if self.slots.iter().all(|slot| slot.selected.is_some()) {
            SessionStep::Complete(self.compose_line())
        } else {
            SessionStep::Pending(self)
        }
    }

    /// Abandons the session without producing a line.
    pub fn cancel(self) {
        tracing::debug!(command = %self.command.command, "selection cancelled");
    }

    /// Builds `"<command> <arg>...\n"`.
    ///
    /// Modifiers without a slot contribute their default argument so later
    /// tokens keep their positions.
    fn compose_line(&self) -> String {
        let mut tokens = vec![self.command.command.as_str()];
        for (position, modifier) in self.command.modifiers.iter().enumerate() {
            let selected = self
                .slots
                .iter()
                .find(|slot| slot.position == position)
                .and_then(ArgumentSlot::selected_arg);
            tokens.push(selected.unwrap_or(&modifier.default_arg));
        }
        format!("{}\n", tokens.join(" "))
    }
}
