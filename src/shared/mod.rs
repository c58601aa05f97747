//! Types and functions shared by App and Server

use serde::{Deserialize, Serialize};

/// A single catalog record as returned by the list endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Book {
    /// server-assigned identifier, unique within the catalog
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
}

/// The richer record behind the detail endpoint
///
/// Carries the extended attributes that are absent from list records.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct BookDetail {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
    #[serde(rename = "coverImage")]
    pub cover_image: String,
    #[serde(rename = "publishedYear")]
    pub published_year: i64,
}

/// The trimmed four-field payload sent to the create and update endpoints
///
/// Only ever built through validation, so the values never carry
/// leading or trailing whitespace.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
}

/// Read-only account information shown on the profile screen
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub name: String,
}
