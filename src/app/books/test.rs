use super::catalog::CatalogStore;
use super::delete::DeleteFlow;
use super::session::{EditMode, EditSession, Field, SubmitBlocked, ValidationError};
use crate::app::notice::NoticeLevel;
use crate::shared::{Book, BookFields};

fn book(id: &str, title: &str, author: &str, description: &str, genre: &str) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        description: description.to_string(),
        genre: genre.to_string(),
    }
}

fn open_create_with(title: &str, author: &str, description: &str, genre: &str) -> EditSession {
    let mut session = EditSession::default();
    session.open_create();
    session.set_field(Field::Title, title.to_string());
    session.set_field(Field::Author, author.to_string());
    session.set_field(Field::Description, description.to_string());
    session.set_field(Field::Genre, genre.to_string());
    session
}

#[test]
fn short_title_blocks_submission_and_keeps_the_draft() {
    let mut session = open_create_with("Hi", "Jane Doe", "A story about adventure", "Fantasy");
    let draft_before = session.draft().unwrap().clone();

    let blocked = session.begin_submit();
    assert_eq!(
        blocked,
        Err(SubmitBlocked::Invalid(ValidationError::TitleTooShort))
    );
    assert!(session.is_open());
    assert_eq!(session.draft().unwrap(), &draft_before);
    assert!(!session.is_submitting());
}

#[test]
fn every_rule_blocks_in_field_order() {
    let cases = [
        (("", "Jane Doe", "A story about adventure", "Fantasy"), ValidationError::TitleRequired),
        (("  \t ", "Jane Doe", "A story about adventure", "Fantasy"), ValidationError::TitleRequired),
        (("Hi", "Jane Doe", "A story about adventure", "Fantasy"), ValidationError::TitleTooShort),
        (("Hello World", "", "A story about adventure", "Fantasy"), ValidationError::AuthorRequired),
        (("Hello World", "Jo", "A story about adventure", "Fantasy"), ValidationError::AuthorTooShort),
        (("Hello World", "Jane Doe", "", "Fantasy"), ValidationError::DescriptionRequired),
        (("Hello World", "Jane Doe", "too short", "Fantasy"), ValidationError::DescriptionTooShort),
        (("Hello World", "Jane Doe", "A story about adventure", "   "), ValidationError::GenreRequired),
    ];
    for ((title, author, description, genre), expected) in cases {
        let mut session = open_create_with(title, author, description, genre);
        assert_eq!(
            session.begin_submit(),
            Err(SubmitBlocked::Invalid(expected)),
            "draft ({title:?}, {author:?}, {description:?}, {genre:?})"
        );
        assert!(session.is_open());
    }
}

#[test]
fn valid_draft_submits_trimmed_fields_and_closes_on_success() {
    let mut session = open_create_with(
        "  Hello World ",
        " Jane Doe",
        "A story about adventure  ",
        " Fantasy ",
    );

    let request = session.begin_submit().unwrap();
    assert_eq!(request.mode, EditMode::Create);
    assert_eq!(
        request.fields,
        BookFields {
            title: "Hello World".to_string(),
            author: "Jane Doe".to_string(),
            description: "A story about adventure".to_string(),
            genre: "Fantasy".to_string(),
        }
    );
    assert!(session.is_submitting());

    session.finish_submit(true);
    assert_eq!(session, EditSession::Closed);
}

#[test]
fn edit_submits_an_update_for_the_target_id() {
    // note "Ann", not "A": the author rule also applies to records edited in place
    let target = book("42", "Old", "Ann", "Short desc text", "Drama");
    let mut session = EditSession::default();
    session.open_edit(&target);
    session.set_field(Field::Title, "New Title".to_string());

    let request = session.begin_submit().unwrap();
    assert_eq!(request.mode, EditMode::Edit("42".to_string()));
    assert_eq!(
        request.fields,
        BookFields {
            title: "New Title".to_string(),
            author: "Ann".to_string(),
            description: "Short desc text".to_string(),
            genre: "Drama".to_string(),
        }
    );
}

#[test]
fn open_edit_then_cancel_changes_nothing() {
    let mut store = CatalogStore::new();
    store.begin_refresh();
    let notice =
        store.finish_refresh(Ok(vec![book("42", "Old", "Ann", "Short desc text", "Drama")]));
    assert!(notice.is_none());
    let books_before = store.books().to_vec();

    let mut session = EditSession::default();
    session.open_edit(&books_before[0]);
    session.cancel();

    // no request was produced, the record and the store are untouched
    assert_eq!(session, EditSession::Closed);
    assert_eq!(store.books(), &books_before[..]);
}

#[test]
fn a_second_submit_is_blocked_while_one_is_in_flight() {
    let mut session = open_create_with("Hello World", "Jane Doe", "A story about adventure", "Fantasy");

    assert!(session.begin_submit().is_ok());
    assert_eq!(session.begin_submit(), Err(SubmitBlocked::InFlight));

    // after a failure the session reopens for another attempt
    session.finish_submit(false);
    assert!(session.is_open());
    assert!(session.begin_submit().is_ok());
}

#[test]
fn submit_failure_keeps_the_session_open_with_the_draft_intact() {
    let mut session = open_create_with("Hello World", "Jane Doe", "A story about adventure", "Fantasy");
    let draft_before = session.draft().unwrap().clone();

    session.begin_submit().unwrap();
    session.finish_submit(false);

    assert!(session.is_open());
    assert!(!session.is_submitting());
    assert_eq!(session.draft().unwrap(), &draft_before);
}

#[test]
fn submit_on_a_closed_session_is_refused() {
    let mut session = EditSession::default();
    assert_eq!(session.begin_submit(), Err(SubmitBlocked::NotOpen));
}

#[test]
fn delete_hands_out_the_id_only_after_confirmation() {
    let mut flow = DeleteFlow::default();

    // before any request, confirming yields nothing
    assert_eq!(flow.confirm(), None);

    flow.request("42".to_string());
    assert_eq!(flow.pending(), Some("42"));
    assert_eq!(flow.confirm(), Some("42".to_string()));
    // exactly once
    assert_eq!(flow.confirm(), None);
}

#[test]
fn cancelling_the_confirmation_issues_zero_calls() {
    let mut flow = DeleteFlow::default();
    flow.request("42".to_string());
    flow.cancel();
    assert_eq!(flow.pending(), None);
    assert_eq!(flow.confirm(), None);
}

#[test]
fn failed_refresh_keeps_the_previous_collection() {
    let mut store = CatalogStore::new();
    store.begin_refresh();
    store.finish_refresh(Ok(vec![book("1", "Hello World", "Jane Doe", "A story about adventure", "Fantasy")]));

    store.begin_refresh();
    assert!(store.is_loading());
    let notice = store.finish_refresh(Err("connection reset".to_string()));

    assert!(!store.is_loading());
    assert_eq!(store.books().len(), 1);
    assert_eq!(store.books()[0].id, "1");
    let notice = notice.expect("a failed refresh must surface a notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("connection reset"));
}

#[test]
fn failed_refresh_on_an_empty_store_stays_empty() {
    let mut store = CatalogStore::new();
    store.begin_refresh();
    let notice = store.finish_refresh(Err(String::new()));
    assert!(!store.is_loading());
    assert!(store.is_empty());
    // a blank error still produces a readable notice
    assert_eq!(notice.unwrap().message, "Failed to fetch books");
}

#[test]
fn refresh_replaces_the_collection_wholesale() {
    let mut store = CatalogStore::new();
    store.begin_refresh();
    store.finish_refresh(Ok(vec![
        book("1", "Hello World", "Jane Doe", "A story about adventure", "Fantasy"),
        book("2", "Second", "John Roe", "Another long description", "Horror"),
    ]));

    store.begin_refresh();
    store.finish_refresh(Ok(vec![book("3", "Third", "Jane Doe", "Yet another description", "Sci-Fi")]));

    assert_eq!(store.books().len(), 1);
    assert_eq!(store.books()[0].id, "3");
    assert_eq!(store.find("1"), None);
    assert!(store.find("3").is_some());
}

#[test]
fn create_round_trip_yields_exactly_the_trimmed_draft() {
    let mut session = open_create_with("Hello World", "Jane Doe", "A story about adventure", "Fantasy");
    let request = session.begin_submit().unwrap();

    // the service assigns an id and the follow-up refresh returns the record
    let created = Book {
        id: "7".to_string(),
        title: request.fields.title.clone(),
        author: request.fields.author.clone(),
        description: request.fields.description.clone(),
        genre: request.fields.genre.clone(),
    };
    session.finish_submit(true);
    assert_eq!(session, EditSession::Closed);

    let mut store = CatalogStore::new();
    store.begin_refresh();
    store.finish_refresh(Ok(vec![created]));

    assert_eq!(store.books().len(), 1);
    let record = &store.books()[0];
    assert_eq!(record.title, "Hello World");
    assert_eq!(record.author, "Jane Doe");
    assert_eq!(record.description, "A story about adventure");
    assert_eq!(record.genre, "Fantasy");
}
