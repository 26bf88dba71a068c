//! Repository trait implementations for SqliteStore.

use super::SqliteStore;
use crate::domain::{Note, NoteId, NoteUpdate, SessionToken, UserId};
use crate::store::{AccountRepository, NoteRepository, StoreError, StoreResult, User};
use chrono::{DateTime, Utc};
use rusqlite::OptionalExtension;

fn parse_timestamp(field: &str, value: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::InvalidData(format!("invalid {} timestamp: {}", field, e)))
}

fn parse_user_id(value: &str) -> StoreResult<UserId> {
    value
        .parse()
        .map_err(|e| StoreError::InvalidData(format!("user id in database: {}", e)))
}

impl SqliteStore {
    fn user_exists(&self, id: &UserId) -> StoreResult<bool> {
        let found = self
            .conn
            .query_row("SELECT 1 FROM users WHERE id = ?", [id.as_str()], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }
}

impl NoteRepository for SqliteStore {
    fn create_note(&mut self, user_id: &UserId, title: &str, body: &str) -> StoreResult<Note> {
        if !self.user_exists(user_id)? {
            return Err(StoreError::UserNotFound {
                id: user_id.to_string(),
            });
        }

        let id = NoteId::new();
        let now = Utc::now();
        let now_str = now.to_rfc3339();

        self.conn.execute(
            "INSERT INTO notes (id, user_id, title, body, created, modified)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
            rusqlite::params![id.as_str(), user_id.as_str(), title, body, now_str],
        )?;

        Ok(Note::new(id, user_id.clone(), title, body, now, now))
    }

    fn get_note(&self, user_id: &UserId, id: &NoteId) -> StoreResult<Option<Note>> {
        let row = self
            .conn
            .query_row(
                "SELECT title, body, created, modified
                 FROM notes WHERE id = ?1 AND user_id = ?2",
                [id.as_str(), user_id.as_str()],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                    ))
                },
            )
            .optional()?;

        let Some((title, body, created_str, modified_str)) = row else {
            return Ok(None);
        };

        let created = parse_timestamp("created", &created_str)?;
        let modified = parse_timestamp("modified", &modified_str)?;

        Ok(Some(Note::new(
            id.clone(),
            user_id.clone(),
            title,
            body,
            created,
            modified,
        )))
    }

    fn update_note(&mut self, update: &NoteUpdate) -> StoreResult<bool> {
        let changed = self.conn.execute(
            "UPDATE notes SET title = ?1, body = ?2, modified = ?3
             WHERE id = ?4 AND user_id = ?5",
            rusqlite::params![
                update.title(),
                update.body(),
                Utc::now().to_rfc3339(),
                update.id().as_str(),
                update.user_id().as_str(),
            ],
        )?;
        Ok(changed > 0)
    }
}

impl AccountRepository for SqliteStore {
    fn create_user(&mut self, email: &str) -> StoreResult<User> {
        let id = UserId::new();
        let created = Utc::now();

        // `users.email` is UNIQUE, so the insert itself detects a taken address.
        match self.conn.execute(
            "INSERT INTO users (id, email, created) VALUES (?1, ?2, ?3)",
            rusqlite::params![id.as_str(), email, created.to_rfc3339()],
        ) {
            Ok(_) => Ok(User::new(id, email, created)),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                Err(StoreError::DuplicateEmail {
                    email: email.to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    fn get_user(&self, id: &UserId) -> StoreResult<Option<User>> {
        let row = self
            .conn
            .query_row(
                "SELECT email, created FROM users WHERE id = ?",
                [id.as_str()],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        match row {
            Some((email, created_str)) => {
                let created = parse_timestamp("created", &created_str)?;
                Ok(Some(User::new(id.clone(), email, created)))
            }
            None => Ok(None),
        }
    }

    fn create_session(
        &mut self,
        user_id: &UserId,
        expires: DateTime<Utc>,
    ) -> StoreResult<SessionToken> {
        if !self.user_exists(user_id)? {
            return Err(StoreError::UserNotFound {
                id: user_id.to_string(),
            });
        }

        let token = SessionToken::generate();
        self.conn.execute(
            "INSERT INTO sessions (token, user_id, expires) VALUES (?1, ?2, ?3)",
            rusqlite::params![token.as_str(), user_id.as_str(), expires.to_rfc3339()],
        )?;
        Ok(token)
    }

    fn session_user(
        &self,
        token: &SessionToken,
        now: DateTime<Utc>,
    ) -> StoreResult<Option<UserId>> {
        let row = self
            .conn
            .query_row(
                "SELECT user_id, expires FROM sessions WHERE token = ?",
                [token.as_str()],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        let Some((user_id_str, expires_str)) = row else {
            return Ok(None);
        };

        if parse_timestamp("expires", &expires_str)? <= now {
            return Ok(None);
        }

        parse_user_id(&user_id_str).map(Some)
    }

    fn delete_session(&mut self, token: &SessionToken) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM sessions WHERE token = ?", [token.as_str()])?;
        Ok(())
    }
}
