//! Communication with the remote book service
//!
//! One function per upstream operation. Mutating endpoints answer with their
//! payload wrapped in a `{ "data": ... }` envelope; a 2xx answer without that
//! payload counts as a failure just like a transport error does.

use serde::Deserialize;

use super::config::Config;
use crate::shared::{Book, BookDetail, BookFields, UserProfile};

// include tests
#[cfg(test)]
mod test;

#[derive(Debug)]
pub enum ApiError {
    /// transport-level failure talking to the book service
    Request(reqwest::Error),
    /// the book service answered with a non-success status
    Status(reqwest::StatusCode),
    /// the book service answered with a body we cannot interpret
    Decode(reqwest::Error),
    /// the book service answered 2xx, but without the expected data payload
    MissingPayload,
}
impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Request(e) => {
                write!(f, "Unable to reach the book service: {e}")
            }
            Self::Status(s) => {
                write!(f, "The book service answered with status {s}")
            }
            Self::Decode(e) => {
                write!(f, "Unable to interpret the answer from the book service: {e}")
            }
            Self::MissingPayload => {
                write!(f, "The book service answered without a data payload")
            }
        }
    }
}
impl std::error::Error for ApiError {}

/// The `{ "data": ... }` wrapper around every book payload
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub(crate) data: Option<T>,
}
impl<T> Envelope<T> {
    /// Unwrap the payload; an empty envelope is a failure
    pub(crate) fn into_data(self) -> Result<T, ApiError> {
        self.data.ok_or(ApiError::MissingPayload)
    }
}

fn check_status(res: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if res.status().is_success() {
        Ok(res)
    } else {
        Err(ApiError::Status(res.status()))
    }
}

pub async fn list_books(config: &Config) -> Result<Vec<Book>, ApiError> {
    let res = config
        .client
        .get(format!("{}/books", config.upstream_url))
        .send()
        .await
        .map_err(ApiError::Request)?;
    check_status(res)?
        .json::<Envelope<Vec<Book>>>()
        .await
        .map_err(ApiError::Decode)?
        .into_data()
}

/// Fetch the detailed record for one book
///
/// A missing book is not an error; the detail screen renders it as not-found.
pub async fn get_book(config: &Config, id: &str) -> Result<Option<BookDetail>, ApiError> {
    let res = config
        .client
        .get(format!("{}/books/{id}", config.upstream_url))
        .send()
        .await
        .map_err(ApiError::Request)?;
    if res.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }
    let envelope = check_status(res)?
        .json::<Envelope<BookDetail>>()
        .await
        .map_err(ApiError::Decode)?;
    Ok(envelope.data)
}

pub async fn create_book(config: &Config, fields: &BookFields) -> Result<Book, ApiError> {
    let res = config
        .client
        .post(format!("{}/books", config.upstream_url))
        .json(fields)
        .send()
        .await
        .map_err(ApiError::Request)?;
    check_status(res)?
        .json::<Envelope<Book>>()
        .await
        .map_err(ApiError::Decode)?
        .into_data()
}

pub async fn update_book(config: &Config, id: &str, fields: &BookFields) -> Result<Book, ApiError> {
    let res = config
        .client
        .put(format!("{}/books/{id}", config.upstream_url))
        .json(fields)
        .send()
        .await
        .map_err(ApiError::Request)?;
    check_status(res)?
        .json::<Envelope<Book>>()
        .await
        .map_err(ApiError::Decode)?
        .into_data()
}

pub async fn delete_book(config: &Config, id: &str) -> Result<(), ApiError> {
    let res = config
        .client
        .delete(format!("{}/books/{id}", config.upstream_url))
        .send()
        .await
        .map_err(ApiError::Request)?;
    check_status(res)?;
    Ok(())
}

pub async fn get_user_profile(config: &Config) -> Result<UserProfile, ApiError> {
    let res = config
        .client
        .get(format!("{}/users/profile", config.upstream_url))
        .send()
        .await
        .map_err(ApiError::Request)?;
    check_status(res)?
        .json::<UserProfile>()
        .await
        .map_err(ApiError::Decode)
}
