use anyhow::Result;
use rusqlite::OptionalExtension;

use folio_types::User;

use crate::db::DbPool;

pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get an account by username
    pub fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare("SELECT id, username, password FROM users WHERE username = ?")?;

        let user = stmt
            .query_row([username], |row| {
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    password: row.get(2)?,
                })
            })
            .optional()?;

        Ok(user)
    }
}
