use super::{ApiError, Envelope};
use crate::shared::{Book, BookDetail};

#[test]
fn envelope_with_payload_unwraps() {
    let envelope: Envelope<Vec<Book>> = serde_json::from_str(
        r#"{"data": [{"_id": "1", "title": "Hello World", "author": "Jane Doe",
            "description": "A story about adventure", "genre": "Fantasy"}]}"#,
    )
    .unwrap();
    let books = envelope.into_data().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, "1");
    assert_eq!(books[0].title, "Hello World");
}

#[test]
fn envelope_with_null_data_is_a_failure() {
    let envelope: Envelope<Book> = serde_json::from_str(r#"{"data": null}"#).unwrap();
    assert!(matches!(
        envelope.into_data(),
        Err(ApiError::MissingPayload)
    ));
}

#[test]
fn envelope_without_data_key_is_a_failure() {
    // a malformed 200 that carries no payload at all
    let envelope: Envelope<Book> = serde_json::from_str(r#"{}"#).unwrap();
    assert!(matches!(
        envelope.into_data(),
        Err(ApiError::MissingPayload)
    ));
}

#[test]
fn detail_record_reads_the_wire_names() {
    let detail: BookDetail = serde_json::from_str(
        r#"{"id": "42", "title": "Old", "author": "Ann", "description": "Short desc text",
            "genre": "Drama", "coverImage": "https://example.com/cover.png",
            "publishedYear": 1998}"#,
    )
    .unwrap();
    assert_eq!(detail.cover_image, "https://example.com/cover.png");
    assert_eq!(detail.published_year, 1998);
}
