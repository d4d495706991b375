use crate::db::models::{AdminUser, NewsRow, QuestionRow};
use crate::db::schema::SQLITE_INIT;
use crate::error::ApiError;
use crate::types::news::NewsPatch;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// All persistence for the service behind one pool. Every method is a
/// single statement (or a statement plus the id fetch), mirroring the
/// one-table-per-entity data model.
#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

/// Connect (creating the file if needed), run the DDL, return the storage.
pub async fn spawn(database_url: &str) -> Result<Storage, ApiError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)
        .map_err(sqlx::Error::from)?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    let storage = Storage::new(pool);
    storage.init_schema().await?;
    Ok(storage)
}

impl Storage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), ApiError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    // ===== news =====

    pub async fn list_news(&self) -> Result<Vec<NewsRow>, ApiError> {
        let rows = sqlx::query(
            r#"SELECT id, title, body, image_url, created_at, updated_at
               FROM news ORDER BY id DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_news).collect()
    }

    pub async fn get_news(&self, id: i64) -> Result<Option<NewsRow>, ApiError> {
        let row = sqlx::query(
            r#"SELECT id, title, body, image_url, created_at, updated_at
               FROM news WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_news).transpose()
    }

    pub async fn create_news(
        &self,
        title: &str,
        body: Option<&str>,
        image_url: Option<&str>,
    ) -> Result<i64, ApiError> {
        let now = Utc::now().to_rfc3339();
        let result = sqlx::query(
            r#"INSERT INTO news (title, body, image_url, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(title)
        .bind(body)
        .bind(image_url)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Partial update of the supplied fields. Returns false when the id is
    /// absent or the patch carries no fields at all.
    pub async fn update_news(&self, id: i64, patch: &NewsPatch) -> Result<bool, ApiError> {
        let mut sets: Vec<&str> = Vec::new();
        if patch.title.is_some() {
            sets.push("title = ?");
        }
        if patch.body.is_some() {
            sets.push("body = ?");
        }
        if patch.image_url.is_some() {
            sets.push("image_url = ?");
        }
        if sets.is_empty() {
            return Ok(false);
        }
        sets.push("updated_at = ?");
        let sql = format!("UPDATE news SET {} WHERE id = ?", sets.join(", "));

        let mut query = sqlx::query(&sql);
        if let Some(title) = patch.title.as_deref() {
            query = query.bind(title);
        }
        if let Some(body) = patch.body.as_deref() {
            query = query.bind(body);
        }
        if let Some(image_url) = patch.image_url.as_deref() {
            query = query.bind(image_url);
        }
        let result = query
            .bind(Utc::now().to_rfc3339())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_news(&self, id: i64) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM news WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ===== cms content / theme =====

    /// All `(section, content)` pairs; content is the raw stored text.
    pub async fn all_content(&self) -> Result<Vec<(String, Option<String>)>, ApiError> {
        let rows = sqlx::query("SELECT section, content FROM cms_content")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter()
            .map(|row| {
                let section: String = row.try_get("section")?;
                let content: Option<String> = row.try_get("content")?;
                Ok((section, content))
            })
            .collect()
    }

    /// Upsert by section key. Uses SQLite `INSERT ... ON CONFLICT(section) DO UPDATE`.
    pub async fn upsert_section(&self, section: &str, content: &str) -> Result<(), ApiError> {
        sqlx::query(
            r#"INSERT INTO cms_content (section, content) VALUES (?, ?)
               ON CONFLICT(section) DO UPDATE SET content = excluded.content"#,
        )
        .bind(section)
        .bind(content)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn get_theme(&self) -> Result<Option<String>, ApiError> {
        let row = sqlx::query("SELECT theme_json FROM theme WHERE id = 1 LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(row.try_get("theme_json").map_err(ApiError::from)?),
            None => Ok(None),
        }
    }

    /// Upsert the singleton theme row (id = 1).
    pub async fn upsert_theme(&self, theme_json: &str) -> Result<(), ApiError> {
        sqlx::query(
            r#"INSERT INTO theme (id, theme_json) VALUES (1, ?)
               ON CONFLICT(id) DO UPDATE SET theme_json = excluded.theme_json"#,
        )
        .bind(theme_json)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    // ===== questions =====

    pub async fn create_question(&self, question: &str) -> Result<i64, ApiError> {
        let result = sqlx::query(
            "INSERT INTO questions (question, answered, created_at) VALUES (?, 0, ?)",
        )
        .bind(question)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn list_questions(&self) -> Result<Vec<QuestionRow>, ApiError> {
        let rows = sqlx::query(
            r#"SELECT id, question, answer, answered, created_at
               FROM questions ORDER BY id DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_question).collect()
    }

    pub async fn list_answered(&self) -> Result<Vec<QuestionRow>, ApiError> {
        let rows = sqlx::query(
            r#"SELECT id, question, answer, answered, created_at
               FROM questions WHERE answered = 1 ORDER BY id DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_question).collect()
    }

    pub async fn answer_question(&self, id: i64, answer: &str) -> Result<bool, ApiError> {
        let result = sqlx::query("UPDATE questions SET answer = ?, answered = 1 WHERE id = ?")
            .bind(answer)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_question(&self, id: i64) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ===== users =====

    /// Upsert by unique username, used to seed the admin account at startup.
    pub async fn upsert_user(&self, username: &str, password: &str) -> Result<(), ApiError> {
        sqlx::query(
            r#"INSERT INTO users (username, password) VALUES (?, ?)
               ON CONFLICT(username) DO UPDATE SET password = excluded.password"#,
        )
        .bind(username)
        .bind(password)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn find_user(&self, username: &str) -> Result<Option<AdminUser>, ApiError> {
        let row = sqlx::query("SELECT id, username, password FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|row| {
            Ok(AdminUser {
                id: row.try_get("id")?,
                username: row.try_get("username")?,
                password: row.try_get("password")?,
            })
        })
        .transpose()
        .map_err(|e: sqlx::Error| e.into())
    }

    fn row_to_news(row: SqliteRow) -> Result<NewsRow, ApiError> {
        Ok(NewsRow {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            body: row.try_get("body")?,
            image_url: row.try_get("image_url")?,
            created_at: Self::parse_timestamp(row.try_get("created_at")?)?,
            updated_at: Self::parse_timestamp(row.try_get("updated_at")?)?,
        })
    }

    fn row_to_question(row: SqliteRow) -> Result<QuestionRow, ApiError> {
        let answered: i64 = row.try_get("answered")?;
        Ok(QuestionRow {
            id: row.try_get("id")?,
            question: row.try_get("question")?,
            answer: row.try_get("answer")?,
            answered: answered != 0,
            created_at: Self::parse_timestamp(row.try_get("created_at")?)?,
        })
    }

    fn parse_timestamp(raw: String) -> Result<DateTime<Utc>, ApiError> {
        let parsed = DateTime::parse_from_rfc3339(&raw)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        Ok(parsed.with_timezone(&Utc))
    }
}
