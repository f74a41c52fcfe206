//! Book entity with boundary validation.

use entity_store::{Entity, EntityId};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    BlankTitle,
    NoAuthors,
}

impl fmt::Display for BookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookError::BlankTitle => write!(f, "title cannot be blank"),
            BookError::NoAuthors => write!(f, "authors cannot be empty"),
        }
    }
}

impl std::error::Error for BookError {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Entity)]
#[entity(collection = "books")]
pub struct Book {
    pub id: Option<EntityId>,
    pub title: String,
    pub authors: Vec<String>,
    pub isbn: String,
    pub published_year: Option<i32>,
}

impl Book {
    /// Build an unsaved book, rejecting a blank title or an empty author list.
    pub fn new(
        title: &str,
        authors: &[&str],
        isbn: &str,
        published_year: Option<i32>,
    ) -> Result<Self, BookError> {
        if title.trim().is_empty() {
            return Err(BookError::BlankTitle);
        }
        if authors.is_empty() {
            return Err(BookError::NoAuthors);
        }
        Ok(Self {
            id: None,
            title: title.to_string(),
            authors: authors.iter().map(|a| a.to_string()).collect(),
            isbn: isbn.to_string(),
            published_year,
        })
    }

    pub fn by(title: &str, author: &str, isbn: &str, published_year: i32) -> Self {
        Self::new(title, &[author], isbn, Some(published_year))
            .expect("sample books are valid")
    }
}
