//! Integration tests for a book catalogue backed by the entity store.

mod book;

use book::{Book, BookError};
use entity_store::{
    all_of, at_least, contains_ignore_case, Entity, EntityId, EntityStore, InMemoryEntityStore,
    Predicate,
};
use repository::BookRepository;

fn ids(books: &[Book]) -> Vec<u64> {
    let mut ids: Vec<u64> = books.iter().filter_map(|b| b.id).map(u64::from).collect();
    ids.sort();
    ids
}

#[test]
fn derive_sets_collection_and_id_field() {
    assert_eq!(Book::COLLECTION, "books");

    let mut book = Book::by("Clean Code", "Robert C. Martin", "978-0132350884", 2008);
    assert_eq!(Entity::id(&book), None);

    book.set_id(EntityId::new(5));
    assert_eq!(book.id, Some(EntityId::new(5)));
}

#[test]
fn sample_data_gets_sequential_ids() {
    let repo = BookRepository::with_sample_data();
    assert_eq!(ids(&repo.find_all()), vec![1, 2, 3, 4, 5, 6, 7]);

    let clean_code = repo.find_by_id(EntityId::new(2)).unwrap();
    assert_eq!(clean_code.title, "Clean Code");
}

#[test]
fn search_by_title_ignores_case() {
    let repo = BookRepository::new();
    repo.save(Book::by("Clean Code", "Robert C. Martin", "978-0132350884", 2008));
    repo.save(Book::by("Clean Architecture", "Robert C. Martin", "978-0134494166", 2017));
    repo.save(Book::by("Refactoring", "Martin Fowler", "978-0134757599", 2018));

    let found = repo.find_by_title_containing_ignore_case("clean");
    assert_eq!(ids(&found), vec![1, 2]);

    assert!(repo.find_by_title_containing_ignore_case("kotlin").is_empty());
}

#[test]
fn find_by_author_substring() {
    let repo = BookRepository::with_sample_data();

    let martin = repo.find_by_author_containing_ignore_case("martin");
    // Robert C. Martin twice, Martin Fowler once.
    assert_eq!(ids(&martin), vec![2, 5, 6]);

    let vega = repo.find_by_author_containing_ignore_case("VEGA");
    assert_eq!(vega.len(), 1);
    assert_eq!(vega[0].authors, vec!["Nathaniel Schutta", "Dan Vega"]);
}

#[test]
fn find_recent_books() {
    let repo = BookRepository::with_sample_data();

    let since_2018 = repo.find_by_published_year_greater_than_equal(2018);
    assert_eq!(ids(&since_2018), vec![1, 3, 6, 7]);

    assert!(repo.find_by_published_year_greater_than_equal(2030).is_empty());
}

#[test]
fn undated_books_are_not_recent() {
    let repo = BookRepository::new();
    repo.save(Book::new("Undated Notes", &["Anon"], "n/a", None).unwrap());

    assert!(repo.find_by_published_year_greater_than_equal(0).is_empty());
    assert_eq!(repo.find_by_title_containing_ignore_case("notes").len(), 1);
}

#[test]
fn combined_query() {
    let repo = BookRepository::with_sample_data();

    let clean_and_recent = contains_ignore_case(|b: &Book| b.title.as_str(), "clean")
        .and(at_least(|b: &Book| b.published_year, 2010));
    let found = repo.store().find_by(&clean_and_recent);
    assert_eq!(ids(&found), vec![5]);

    let not_clean = contains_ignore_case(|b: &Book| b.title.as_str(), "clean").not();
    assert_eq!(repo.store().count_by(&not_clean), 5);
}

#[test]
fn query_built_from_optional_parameters() {
    let repo = BookRepository::with_sample_data();

    let title: Option<&str> = Some("the");
    let since: Option<i32> = None;

    let mut filters: Vec<Box<dyn Predicate<Book>>> = Vec::new();
    if let Some(title) = title {
        filters.push(contains_ignore_case(|b: &Book| b.title.as_str(), title).boxed());
    }
    if let Some(since) = since {
        filters.push(at_least(|b: &Book| b.published_year, since).boxed());
    }

    let found = repo.store().find_by(&all_of(filters));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "The Pragmatic Programmer");
}

#[test]
fn create_then_delete() {
    let repo = BookRepository::with_sample_data();

    let book = Book::new(
        "Designing Data-Intensive Applications",
        &["Martin Kleppmann"],
        "978-1449373320",
        Some(2017),
    )
    .unwrap();
    let created = repo.save(book);
    let id = created.id.unwrap();
    assert_eq!(id, EntityId::new(8));
    assert!(repo.exists_by_id(id));

    repo.delete_by_id(id);
    assert!(!repo.exists_by_id(id));
    assert!(repo.find_by_id(id).is_none());

    // Deleting again is harmless; callers map the absence to "not found".
    repo.delete_by_id(id);
    assert_eq!(repo.find_all().len(), 7);
}

#[test]
fn update_replaces_every_field() {
    let repo = BookRepository::with_sample_data();

    let mut edited = Book::new(
        "Clean Code (2nd Edition)",
        &["Robert C. Martin", "Guest Author"],
        "978-0135398579",
        None,
    )
    .unwrap();
    edited.id = Some(EntityId::new(2));
    repo.save(edited.clone());

    let stored = repo.find_by_id(EntityId::new(2)).unwrap();
    assert_eq!(stored, edited);
    assert_eq!(stored.published_year, None);
    assert_eq!(stored.isbn, "978-0135398579");
    assert_eq!(repo.find_all().len(), 7);
}

#[test]
fn validation_happens_before_save() {
    assert_eq!(
        Book::new("   ", &["Someone"], "isbn", None).unwrap_err(),
        BookError::BlankTitle
    );
    assert_eq!(
        Book::new("Title", &[], "isbn", None).unwrap_err(),
        BookError::NoAuthors
    );
    assert_eq!(BookError::BlankTitle.to_string(), "title cannot be blank");
}

#[test]
fn seed_from_json() {
    let store = InMemoryEntityStore::<Book>::new();
    let seeded = store
        .seed_json(
            r#"[
                {
                    "id": null,
                    "title": "Effective Java",
                    "authors": ["Joshua Bloch"],
                    "isbn": "978-0134685991",
                    "published_year": 2018
                },
                {
                    "id": null,
                    "title": "Domain-Driven Design",
                    "authors": ["Eric Evans"],
                    "isbn": "978-0321125217",
                    "published_year": null
                }
            ]"#,
        )
        .unwrap();

    assert_eq!(ids(&seeded), vec![1, 2]);
    assert_eq!(store.find_by_id(EntityId::new(2)).unwrap().title, "Domain-Driven Design");
}
