//! SQLite implementation of the post storage.

use std::time::Duration;

use sqlx::Sqlite;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use super::models::{NewPost, Post};
use crate::error::StorageError;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS manage_post (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title_post TEXT,
    content_post TEXT,
    url_image_post TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)";

const SELECT_ALL: &str = "SELECT id, title_post, content_post, url_image_post, created_at \
                          FROM manage_post ORDER BY id DESC";

const SELECT_BY_ID: &str = "SELECT id, title_post, content_post, url_image_post, created_at \
                            FROM manage_post WHERE id = ?";

/// SQLite-backed post repository using `sqlx::SqlitePool`.
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: SqlitePool,
}

impl PostRepository {
    /// Creates a repository over an existing connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool for `url`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the database cannot be opened.
    pub async fn connect(
        url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, StorageError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .acquire_timeout(acquire_timeout)
            .connect(url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Opens a private in-memory database.
    ///
    /// The pool holds exactly one connection that is never recycled, since
    /// an in-memory database lives only as long as its connection.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if SQLite cannot be opened.
    pub async fn connect_in_memory() -> Result<Self, StorageError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Ok(Self::new(pool))
    }

    /// Ensures the `manage_post` table exists. Safe to call on every start.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] on database failure.
    pub async fn init(&self) -> Result<(), StorageError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        tracing::debug!("manage_post table ready");
        Ok(())
    }

    /// Checks a connection out of the pool for the duration of one request.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if no connection becomes available
    /// within the pool's acquire timeout.
    pub async fn acquire(&self) -> Result<PostConnection, StorageError> {
        let conn = self.pool.acquire().await?;
        Ok(PostConnection { conn })
    }

    /// Closes the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// A pooled connection scoped to one request.
///
/// Dropping it hands the connection back to the pool.
#[derive(Debug)]
pub struct PostConnection {
    conn: PoolConnection<Sqlite>,
}

impl PostConnection {
    /// Appends a post and returns its server-assigned ID.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] on constraint or I/O failure.
    pub async fn insert(&mut self, post: &NewPost) -> Result<i64, StorageError> {
        let result = sqlx::query(
            "INSERT INTO manage_post (title_post, content_post, url_image_post) VALUES (?, ?, ?)",
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.image_url)
        .execute(&mut *self.conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Returns every post, newest (highest ID) first.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] on database failure.
    pub async fn list_all(&mut self) -> Result<Vec<Post>, StorageError> {
        let posts = sqlx::query_as::<_, Post>(SELECT_ALL)
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(posts)
    }

    /// Looks up a single post. A missing row is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] on database failure.
    pub async fn get_by_id(&mut self, id: i64) -> Result<Option<Post>, StorageError> {
        let post = sqlx::query_as::<_, Post>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(post)
    }
}
