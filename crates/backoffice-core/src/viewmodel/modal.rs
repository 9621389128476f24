//! Modal dialog state machine
//!
//! Every modal moves independently through `Closed -> Open -> (Submitting) -> Closed`.

use std::fmt;

use crate::domain::MenuItem;
use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Add,
    Edit,
    View,
    Delete,
}

impl fmt::Display for ModalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ModalKind::Add => "Add",
            ModalKind::Edit => "Edit",
            ModalKind::View => "View",
            ModalKind::Delete => "Delete",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
    /// Controls disabled while the operation is in flight
    Submitting,
}

/// One modal and the item it was opened for (none for Add)
#[derive(Debug, Clone, Default)]
pub(crate) struct ModalSlot {
    pub(crate) state: ModalState,
    pub(crate) target: Option<MenuItem>,
}

impl ModalSlot {
    pub(crate) fn open(&mut self, target: Option<MenuItem>) {
        self.state = ModalState::Open;
        self.target = target;
    }

    pub(crate) fn close(&mut self, kind: ModalKind) -> Result<(), DomainError> {
        if self.state == ModalState::Submitting {
            return Err(DomainError::SubmissionInFlight(kind));
        }
        self.state = ModalState::Closed;
        self.target = None;
        Ok(())
    }

    pub(crate) fn begin_submit(&mut self, kind: ModalKind) -> Result<(), DomainError> {
        match self.state {
            ModalState::Open => {
                self.state = ModalState::Submitting;
                Ok(())
            }
            ModalState::Submitting => Err(DomainError::SubmissionInFlight(kind)),
            ModalState::Closed => Err(DomainError::ModalNotOpen(kind)),
        }
    }

    /// Success closes the modal, failure hands it back to the user.
    pub(crate) fn finish_submit(&mut self, succeeded: bool) {
        if succeeded {
            self.state = ModalState::Closed;
            self.target = None;
        } else {
            self.state = ModalState::Open;
        }
    }
}
