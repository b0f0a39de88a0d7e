//! Document editor save/edit toggle.

use super::{fixed_table, Device};
use crate::builder::simple_transition;
use crate::machine::{StateMachine, TransitionError};
use crate::{operation_enum, state_enum};

pub const DOCUMENT_SAVED: &str = "Document saved successfully";
pub const EDITING_RESUMED: &str = "Editing resumed";

state_enum! {
    pub enum DocumentState {
        Editing => "Editing",
        Saved => "Saved",
    }
}

operation_enum! {
    pub enum DocumentOperation {
        Save => "save_document",
        Edit => "edit_document",
    }
}

/// A document is either being edited or saved. Saving is only legal while
/// editing, and editing only resumes from a saved document.
#[derive(Clone, Debug)]
pub struct DocumentEditingSystem {
    machine: StateMachine<DocumentState, DocumentOperation>,
}

impl DocumentEditingSystem {
    pub fn new() -> Self {
        Self::in_state(DocumentState::Editing)
    }

    pub fn save_document(&mut self) -> Result<&'static str, TransitionError> {
        self.machine.apply(DocumentOperation::Save)
    }

    pub fn edit_document(&mut self) -> Result<&'static str, TransitionError> {
        self.machine.apply(DocumentOperation::Edit)
    }
}

impl Default for DocumentEditingSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for DocumentEditingSystem {
    type State = DocumentState;
    type Operation = DocumentOperation;

    fn in_state(state: DocumentState) -> Self {
        let table = fixed_table(
            DocumentState::Editing,
            vec![
                simple_transition(
                    DocumentOperation::Save,
                    DocumentState::Editing,
                    DocumentState::Saved,
                    DOCUMENT_SAVED,
                ),
                simple_transition(
                    DocumentOperation::Edit,
                    DocumentState::Saved,
                    DocumentState::Editing,
                    EDITING_RESUMED,
                ),
            ],
        );
        Self {
            machine: table.with_current(state),
        }
    }

    fn machine(&self) -> &StateMachine<DocumentState, DocumentOperation> {
        &self.machine
    }

    fn machine_mut(&mut self) -> &mut StateMachine<DocumentState, DocumentOperation> {
        &mut self.machine
    }
}
