//! The delete confirmation pipeline
//!
//! Deleting is destructive, so the id to delete is only ever handed out by
//! [`DeleteFlow::confirm`], after the confirmation prompt was answered. The
//! book screen then calls the delete endpoint and refreshes the catalog only
//! when that call succeeded.

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum DeleteFlow {
    #[default]
    Idle,
    /// Waiting for the user to answer the confirmation prompt
    Confirming { id: String },
}
impl DeleteFlow {
    /// Ask for confirmation before deleting this record
    pub fn request(&mut self, id: String) {
        *self = Self::Confirming { id };
    }

    /// Dismiss the prompt; no call is issued
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// The id the prompt is currently asking about
    pub fn pending(&self) -> Option<&str> {
        match self {
            Self::Confirming { id } => Some(id),
            Self::Idle => None,
        }
    }

    /// Hand out the confirmed id, exactly once
    pub fn confirm(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Confirming { id } => Some(id),
            Self::Idle => None,
        }
    }
}
