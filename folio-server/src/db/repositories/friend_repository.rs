use anyhow::{Context, Result};
use rusqlite::OptionalExtension;

use folio_types::{Friend, FriendPatch, NewFriend};

use crate::db::DbPool;

pub struct FriendRepository {
    pool: DbPool,
}

impl FriendRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// List all friends in display sequence
    ///
    /// The presented order is a dense 1..N rank computed at read time, so
    /// positions stay contiguous even after deletions leave gaps in the
    /// stored display_order column.
    pub fn list(&self) -> Result<Vec<Friend>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, description, image_url,
                    ROW_NUMBER() OVER (ORDER BY display_order, id) AS display_rank
             FROM friends
             ORDER BY display_order, id",
        )?;

        let friends = stmt
            .query_map([], |row| {
                Ok(Friend {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                    image_url: row.get(3)?,
                    order: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(friends)
    }

    /// Get a friend by ID, with its current display rank
    pub fn get(&self, id: i64) -> Result<Option<Friend>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, description, image_url, display_rank
             FROM (SELECT id, name, description, image_url,
                          ROW_NUMBER() OVER (ORDER BY display_order, id) AS display_rank
                   FROM friends)
             WHERE id = ?",
        )?;

        let friend = stmt
            .query_row([id], |row| {
                Ok(Friend {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                    image_url: row.get(3)?,
                    order: row.get(4)?,
                })
            })
            .optional()?;

        Ok(friend)
    }

    /// Create a friend at the end of the display sequence
    ///
    /// The stored display_order is assigned inside the INSERT as collection
    /// size + 1, so concurrent creates serialize on SQLite's write lock and
    /// never race the count.
    pub fn create(&self, new_friend: &NewFriend) -> Result<Friend> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO friends (name, description, image_url, display_order)
             VALUES (?, ?, ?, (SELECT COUNT(*) + 1 FROM friends))",
            (
                &new_friend.name,
                &new_friend.description,
                &new_friend.image_url,
            ),
        )
        .context("Failed to create friend")?;
        let id = conn.last_insert_rowid();

        // The in-memory pool holds a single connection; release it before
        // fetching the ranked row back.
        drop(conn);
        self.get(id)?.context("Friend row missing after insert")
    }

    /// Apply a partial update; `None` when the id does not exist.
    /// The display position and id never change through this path.
    pub fn update(&self, id: i64, patch: &FriendPatch) -> Result<Option<Friend>> {
        let mut friend = match self.get(id)? {
            Some(friend) => friend,
            None => return Ok(None),
        };
        patch.apply(&mut friend);

        let conn = self.pool.get()?;
        conn.execute(
            "UPDATE friends SET name = ?, description = ?, image_url = ? WHERE id = ?",
            (&friend.name, &friend.description, &friend.image_url, id),
        )
        .context("Failed to update friend")?;

        Ok(Some(friend))
    }

    /// Delete a friend; false when nothing matched. Remaining rows keep their
    /// stored display_order, the read-time rank closes the gap.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let conn = self.pool.get()?;
        let rows_affected = conn
            .execute("DELETE FROM friends WHERE id = ?", [id])
            .context("Failed to delete friend")?;
        Ok(rows_affected > 0)
    }
}
