//! SQL DDL for initializing the application tables.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema:
/// - `news`: articles, RFC3339 timestamps maintained by the storage layer
/// - `cms_content`: section name -> JSON blob, upsert by section
/// - `theme`: singleton row (id = 1) holding the UI theme JSON
/// - `questions`: visitor questions with an answered flag
/// - `users`: admin credentials, seeded from config at startup
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS news (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    body TEXT NULL,
    image_url TEXT NULL,
    created_at TEXT NOT NULL, -- RFC3339
    updated_at TEXT NOT NULL  -- RFC3339
);

CREATE TABLE IF NOT EXISTS cms_content (
    section TEXT PRIMARY KEY,
    content TEXT NULL -- JSON, serialized as text
);

CREATE TABLE IF NOT EXISTS theme (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    theme_json TEXT NULL
);

CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question TEXT NOT NULL,
    answer TEXT NULL,
    answered INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL -- RFC3339
);

CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
);
"#;
