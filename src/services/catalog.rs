use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, Result},
    models::book::Book,
};

/// In-memory book catalog shared across requests.
///
/// Cloning is cheap; every clone points at the same list. The lock
/// keeps `create`'s read-highest-id-then-append step atomic, so
/// concurrent creates cannot hand out duplicate ids.
#[derive(Clone)]
pub struct Bookshelf {
    books: Arc<RwLock<Vec<Book>>>,
}

impl Bookshelf {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            books: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Creates a catalog pre-loaded with the starter library.
    pub fn seeded() -> Self {
        Self {
            books: Arc::new(RwLock::new(starter_library())),
        }
    }

    /// Returns all books in insertion order.
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// Finds a book by id.
    ///
    /// # Arguments
    ///
    /// * `book_id` - The id of the book.
    ///
    /// # Returns
    ///
    /// The matching `Book`, or `None` if absent.
    pub async fn find(&self, book_id: i32) -> Option<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.id == book_id)
            .cloned()
    }

    /// Returns every book with the given rating.
    ///
    /// # Arguments
    ///
    /// * `rating` - The rating to match exactly.
    ///
    /// # Returns
    ///
    /// A `Vec<Book>` of matches, possibly empty.
    pub async fn find_by_rating(&self, rating: i32) -> Vec<Book> {
        self.books
            .read()
            .await
            .iter()
            .filter(|book| book.rating == rating)
            .cloned()
            .collect()
    }

    /// Returns every book published in the given year.
    ///
    /// # Arguments
    ///
    /// * `published_date` - The release year to match exactly.
    ///
    /// # Returns
    ///
    /// A `Vec<Book>` of matches, possibly empty.
    pub async fn find_by_published_date(&self, published_date: i32) -> Vec<Book> {
        self.books
            .read()
            .await
            .iter()
            .filter(|book| book.published_date == Some(published_date))
            .cloned()
            .collect()
    }

    /// Adds a book, assigning it the next free id.
    ///
    /// Ids count up from the highest id currently on the shelf, or
    /// start at 1 when the shelf is empty.
    ///
    /// # Arguments
    ///
    /// * `title` - The book's title.
    /// * `author` - The book's author.
    /// * `description` - The book's description.
    /// * `rating` - The book's rating.
    /// * `published_date` - The book's release year, if known.
    ///
    /// # Returns
    ///
    /// The stored `Book` with its assigned id.
    pub async fn create(
        &self,
        title: String,
        author: String,
        description: String,
        rating: i32,
        published_date: Option<i32>,
    ) -> Book {
        let mut books = self.books.write().await;

        let id = books.iter().map(|book| book.id).max().unwrap_or(0) + 1;
        let book = Book {
            id,
            title,
            author,
            description,
            rating,
            published_date,
        };

        books.push(book.clone());
        tracing::info!("📚 Book {} added to the catalog", book.id);
        book
    }

    /// Replaces the book with the same id as `book`.
    ///
    /// # Arguments
    ///
    /// * `book` - The replacement record, matched on its id.
    ///
    /// # Returns
    ///
    /// A `Result<()>`, `NotFound` if no book has that id.
    pub async fn update(&self, book: Book) -> Result<()> {
        let mut books = self.books.write().await;

        match books.iter_mut().find(|existing| existing.id == book.id) {
            Some(existing) => {
                *existing = book;
                Ok(())
            }
            None => Err(AppError::NotFound),
        }
    }

    /// Removes the book with the given id. Does nothing if absent.
    ///
    /// # Arguments
    ///
    /// * `book_id` - The id of the book to remove.
    pub async fn delete(&self, book_id: i32) {
        let mut books = self.books.write().await;

        if let Some(index) = books.iter().position(|book| book.id == book_id) {
            books.remove(index);
            tracing::info!("📚 Book {} removed from the catalog", book_id);
        }
    }
}

impl Default for Bookshelf {
    fn default() -> Self {
        Self::new()
    }
}

/// The ten classics every fresh catalog starts with.
fn starter_library() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            title: "To Kill a Mockingbird".to_string(),
            author: "Harper Lee".to_string(),
            description: "A novel set in the American South during the 1930s, focusing on the Finch family and the moral challenges they face.".to_string(),
            rating: 5,
            published_date: None,
        },
        Book {
            id: 2,
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            description: "A dystopian novel exploring themes of totalitarianism, surveillance, and individual freedom.".to_string(),
            rating: 5,
            published_date: None,
        },
        Book {
            id: 3,
            title: "The Great Gatsby".to_string(),
            author: "F. Scott Fitzgerald".to_string(),
            description: "A story about the mysterious millionaire Jay Gatsby and his obsession with Daisy Buchanan during the Roaring Twenties.".to_string(),
            rating: 4,
            published_date: None,
        },
        Book {
            id: 4,
            title: "Moby-Dick".to_string(),
            author: "Herman Melville".to_string(),
            description: "A tale of obsession and revenge as Captain Ahab pursues the elusive white whale, Moby-Dick.".to_string(),
            rating: 4,
            published_date: None,
        },
        Book {
            id: 5,
            title: "Pride and Prejudice".to_string(),
            author: "Jane Austen".to_string(),
            description: "A romantic novel that deals with issues of class, marriage, and social expectations in 19th-century England.".to_string(),
            rating: 3,
            published_date: None,
        },
        Book {
            id: 6,
            title: "The Catcher in the Rye".to_string(),
            author: "J.D. Salinger".to_string(),
            description: "The story of Holden Caulfield, a teenager dealing with themes of alienation, rebellion, and identity.".to_string(),
            rating: 4,
            published_date: None,
        },
        Book {
            id: 7,
            title: "The Hobbit".to_string(),
            author: "J.R.R. Tolkien".to_string(),
            description: "A fantasy novel that follows Bilbo Baggins on an adventure to help a group of dwarves reclaim their treasure from a dragon.".to_string(),
            rating: 5,
            published_date: None,
        },
        Book {
            id: 8,
            title: "Brave New World".to_string(),
            author: "Aldous Huxley".to_string(),
            description: "A dystopian novel set in a future world where technology controls every aspect of life, and individualism is discouraged.".to_string(),
            rating: 4,
            published_date: None,
        },
        Book {
            id: 9,
            title: "War and Peace".to_string(),
            author: "Leo Tolstoy".to_string(),
            description: "An epic novel that explores Russian society during the Napoleonic Wars, with a focus on love, fate, and family.".to_string(),
            rating: 5,
            published_date: None,
        },
        Book {
            id: 10,
            title: "The Brothers Karamazov".to_string(),
            author: "Fyodor Dostoevsky".to_string(),
            description: "A philosophical and psychological novel that delves into themes of faith, doubt, and morality.".to_string(),
            rating: 5,
            published_date: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book(id: i32) -> Book {
        Book {
            id,
            title: "Sample".to_string(),
            author: "Somebody".to_string(),
            description: "A sample book.".to_string(),
            rating: 3,
            published_date: Some(2020),
        }
    }

    #[tokio::test]
    async fn seeded_shelf_holds_the_starter_library() {
        let shelf = Bookshelf::seeded();
        let books = shelf.list().await;

        assert_eq!(books.len(), 10);
        assert_eq!(books[0].id, 1);
        assert_eq!(books[0].title, "To Kill a Mockingbird");
        assert_eq!(books[9].id, 10);
    }

    #[tokio::test]
    async fn create_on_empty_shelf_starts_at_one() {
        let shelf = Bookshelf::new();
        let book = shelf
            .create(
                "First".to_string(),
                "Author".to_string(),
                "Desc".to_string(),
                5,
                None,
            )
            .await;

        assert_eq!(book.id, 1);
        assert_eq!(shelf.list().await.len(), 1);
    }

    #[tokio::test]
    async fn create_assigns_one_past_the_highest_id() {
        let shelf = Bookshelf::seeded();
        let book = shelf
            .create(
                "Eleventh".to_string(),
                "Author".to_string(),
                "Desc".to_string(),
                2,
                Some(2021),
            )
            .await;

        assert_eq!(book.id, 11);
    }

    #[tokio::test]
    async fn deleting_the_highest_id_frees_it_for_reuse() {
        let shelf = Bookshelf::seeded();
        shelf.delete(10).await;

        let book = shelf
            .create(
                "Replacement".to_string(),
                "Author".to_string(),
                "Desc".to_string(),
                1,
                None,
            )
            .await;

        assert_eq!(book.id, 10);
    }

    #[tokio::test]
    async fn find_returns_none_for_unknown_id() {
        let shelf = Bookshelf::seeded();

        assert!(shelf.find(99).await.is_none());
        assert_eq!(shelf.find(2).await.map(|b| b.title), Some("1984".to_string()));
    }

    #[tokio::test]
    async fn find_by_rating_filters_exact_matches() {
        let shelf = Bookshelf::seeded();
        let top_rated = shelf.find_by_rating(5).await;

        assert_eq!(top_rated.len(), 5);
        assert!(top_rated.iter().all(|b| b.rating == 5));
    }

    #[tokio::test]
    async fn find_by_published_date_matches_the_year() {
        let shelf = Bookshelf::new();
        shelf
            .create(
                "Dated".to_string(),
                "Author".to_string(),
                "Desc".to_string(),
                4,
                Some(1999),
            )
            .await;

        assert_eq!(shelf.find_by_published_date(1999).await.len(), 1);
        assert!(shelf.find_by_published_date(2000).await.is_empty());
    }

    #[tokio::test]
    async fn update_replaces_the_matching_book() {
        let shelf = Bookshelf::seeded();
        let mut replacement = sample_book(3);
        replacement.title = "Gatsby, Revised".to_string();

        shelf.update(replacement).await.unwrap();

        assert_eq!(
            shelf.find(3).await.map(|b| b.title),
            Some("Gatsby, Revised".to_string())
        );
        assert_eq!(shelf.list().await.len(), 10);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_refused() {
        let shelf = Bookshelf::seeded();

        assert!(matches!(
            shelf.update(sample_book(99)).await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn delete_removes_the_book() {
        let shelf = Bookshelf::seeded();
        shelf.delete(4).await;

        assert_eq!(shelf.list().await.len(), 9);
        assert!(shelf.find(4).await.is_none());
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_a_no_op() {
        let shelf = Bookshelf::seeded();
        shelf.delete(99).await;

        assert_eq!(shelf.list().await.len(), 10);
    }
}
