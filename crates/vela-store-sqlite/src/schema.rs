//! SQL schema for the Vela SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS candles (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    owner_id    INTEGER NOT NULL,
    owner_name  TEXT NOT NULL,
    purpose     TEXT NOT NULL,
    created_at  TEXT NOT NULL,   -- RFC 3339 UTC, fixed nanosecond width
    media_url   TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS candles_created_idx ON candles(created_at);
CREATE INDEX IF NOT EXISTS candles_owner_idx   ON candles(owner_id);

PRAGMA user_version = 1;
";
