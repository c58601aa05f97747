//! The state machine behind the add/edit form
//!
//! A session is either `Closed` or `Open`. An open session knows whether it is
//! creating a new record or editing an existing one, and carries a [`BookDraft`]:
//! the raw field values as the user typed them. The draft only touches the
//! network when [`EditSession::begin_submit`] trims it, validates it and hands
//! out a [`SubmitRequest`]. Nothing in here performs IO; the book screen drives
//! the machine from its event handlers.

use crate::shared::{Book, BookFields};

/// Which editable field of the draft a form input writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Description,
    Genre,
}

/// The in-progress, untrimmed field values of an open session
///
/// Free text until submission, so half-typed invalid input never has to be
/// rejected while the user is still working.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
}
impl BookDraft {
    /// Copy the editable fields out of an existing record
    fn from_record(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            description: book.description.clone(),
            genre: book.genre.clone(),
        }
    }

    fn trimmed(&self) -> BookFields {
        BookFields {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            description: self.description.trim().to_string(),
            genre: self.genre.trim().to_string(),
        }
    }
}

/// Whether an open form creates a new record or edits the record with this id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Edit(String),
}

/// A validated submission, ready to go over the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub mode: EditMode,
    pub fields: BookFields,
}

/// A single rule the draft violated
///
/// Checked in field order; the first violated rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    TitleRequired,
    TitleTooShort,
    AuthorRequired,
    AuthorTooShort,
    DescriptionRequired,
    DescriptionTooShort,
    GenreRequired,
}
impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::TitleRequired => {
                write!(f, "Title is required")
            }
            Self::TitleTooShort => {
                write!(f, "Title must be at least 3 characters")
            }
            Self::AuthorRequired => {
                write!(f, "Author is required")
            }
            Self::AuthorTooShort => {
                write!(f, "Author must be at least 3 characters")
            }
            Self::DescriptionRequired => {
                write!(f, "Description is required")
            }
            Self::DescriptionTooShort => {
                write!(f, "Description must be at least 10 characters")
            }
            Self::GenreRequired => {
                write!(f, "Genre is required")
            }
        }
    }
}
impl std::error::Error for ValidationError {}

/// The reasons a submit attempt does not go out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// the draft violated a validation rule
    Invalid(ValidationError),
    /// an earlier submission of this session is still in flight
    InFlight,
    /// the session is not open
    ///
    /// Unreachable through the form, which only renders while the session is
    /// open.
    NotOpen,
}
impl core::fmt::Display for SubmitBlocked {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Invalid(e) => {
                write!(f, "{e}")
            }
            Self::InFlight => {
                write!(f, "A save is already in progress")
            }
            Self::NotOpen => {
                write!(f, "The form is not open")
            }
        }
    }
}
impl std::error::Error for SubmitBlocked {}

/// Check the trimmed fields against the form rules
pub fn validate(fields: &BookFields) -> Result<(), ValidationError> {
    if fields.title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if fields.title.chars().count() < 3 {
        return Err(ValidationError::TitleTooShort);
    }
    if fields.author.is_empty() {
        return Err(ValidationError::AuthorRequired);
    }
    if fields.author.chars().count() < 3 {
        return Err(ValidationError::AuthorTooShort);
    }
    if fields.description.is_empty() {
        return Err(ValidationError::DescriptionRequired);
    }
    if fields.description.chars().count() < 10 {
        return Err(ValidationError::DescriptionTooShort);
    }
    if fields.genre.is_empty() {
        return Err(ValidationError::GenreRequired);
    }
    Ok(())
}

/// One add-or-edit form instance
///
/// Created closed when the book screen mounts and discarded with it; a session
/// never outlives its screen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Closed,
    Open {
        mode: EditMode,
        draft: BookDraft,
        submitting: bool,
    },
}
impl EditSession {
    /// Open the form with a blank draft to create a new record
    pub fn open_create(&mut self) {
        *self = Self::Open {
            mode: EditMode::Create,
            draft: BookDraft::default(),
            submitting: false,
        };
    }

    /// Open the form on an existing record
    ///
    /// The draft is a copy bound at this moment; editing it never touches the
    /// catalog until a submission succeeds.
    pub fn open_edit(&mut self, book: &Book) {
        *self = Self::Open {
            mode: EditMode::Edit(book.id.clone()),
            draft: BookDraft::from_record(book),
            submitting: false,
        };
    }

    /// Close the form and discard the draft without any network call
    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// True iff the open form edits an existing record
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            Self::Open {
                mode: EditMode::Edit(_),
                ..
            }
        )
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Open { submitting: true, .. })
    }

    pub fn draft(&self) -> Option<&BookDraft> {
        match self {
            Self::Open { draft, .. } => Some(draft),
            Self::Closed => None,
        }
    }

    /// Current draft value of one field, for rendering the form inputs
    pub fn field(&self, field: Field) -> String {
        let Self::Open { draft, .. } = self else {
            return String::new();
        };
        match field {
            Field::Title => draft.title.clone(),
            Field::Author => draft.author.clone(),
            Field::Description => draft.description.clone(),
            Field::Genre => draft.genre.clone(),
        }
    }

    /// Overwrite one draft field with user input
    ///
    /// Pure draft mutation, no side effect. A no-op on a closed session.
    pub fn set_field(&mut self, field: Field, value: String) {
        let Self::Open { draft, .. } = self else {
            return;
        };
        match field {
            Field::Title => draft.title = value,
            Field::Author => draft.author = value,
            Field::Description => draft.description = value,
            Field::Genre => draft.genre = value,
        }
    }

    /// Trim and validate the draft; mark the session in flight when it passes
    ///
    /// While a submission is in flight all further attempts are refused, so
    /// rapid double-clicks cannot issue duplicate create calls.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, SubmitBlocked> {
        let Self::Open {
            mode,
            draft,
            submitting,
        } = self
        else {
            return Err(SubmitBlocked::NotOpen);
        };
        if *submitting {
            return Err(SubmitBlocked::InFlight);
        }
        let fields = draft.trimmed();
        validate(&fields).map_err(SubmitBlocked::Invalid)?;
        *submitting = true;
        Ok(SubmitRequest {
            mode: mode.clone(),
            fields,
        })
    }

    /// Record the outcome of the in-flight submission
    ///
    /// Success closes the session; failure keeps it open with the draft intact
    /// so the user can correct and retry.
    pub fn finish_submit(&mut self, ok: bool) {
        if ok {
            *self = Self::Closed;
        } else if let Self::Open { submitting, .. } = self {
            *submitting = false;
        }
    }
}
