use anyhow::{Context, Result};
use rusqlite::OptionalExtension;

use folio_types::{NewSocialMedia, SocialMedia, SocialMediaPatch};

use crate::db::DbPool;

pub struct SocialMediaRepository {
    pool: DbPool,
}

impl SocialMediaRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// List all social media links in display sequence, with dense 1..N ranks
    pub fn list(&self) -> Result<Vec<SocialMedia>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, username, url, icon_class,
                    ROW_NUMBER() OVER (ORDER BY display_order, id) AS display_rank
             FROM social_media
             ORDER BY display_order, id",
        )?;

        let links = stmt
            .query_map([], |row| {
                Ok(SocialMedia {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    username: row.get(2)?,
                    url: row.get(3)?,
                    icon_class: row.get(4)?,
                    order: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(links)
    }

    /// Get a social media link by ID, with its current display rank
    pub fn get(&self, id: i64) -> Result<Option<SocialMedia>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, username, url, icon_class, display_rank
             FROM (SELECT id, name, username, url, icon_class,
                          ROW_NUMBER() OVER (ORDER BY display_order, id) AS display_rank
                   FROM social_media)
             WHERE id = ?",
        )?;

        let link = stmt
            .query_row([id], |row| {
                Ok(SocialMedia {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    username: row.get(2)?,
                    url: row.get(3)?,
                    icon_class: row.get(4)?,
                    order: row.get(5)?,
                })
            })
            .optional()?;

        Ok(link)
    }

    /// Create a link at the end of the display sequence; the stored
    /// display_order is computed inside the INSERT as collection size + 1
    pub fn create(&self, new_link: &NewSocialMedia) -> Result<SocialMedia> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO social_media (name, username, url, icon_class, display_order)
             VALUES (?, ?, ?, ?, (SELECT COUNT(*) + 1 FROM social_media))",
            (
                &new_link.name,
                &new_link.username,
                &new_link.url,
                &new_link.icon_class,
            ),
        )
        .context("Failed to create social media link")?;
        let id = conn.last_insert_rowid();

        // Release before re-fetching; the in-memory pool has one connection
        drop(conn);
        self.get(id)?
            .context("Social media row missing after insert")
    }

    /// Apply a partial update; `None` when the id does not exist
    pub fn update(&self, id: i64, patch: &SocialMediaPatch) -> Result<Option<SocialMedia>> {
        let mut link = match self.get(id)? {
            Some(link) => link,
            None => return Ok(None),
        };
        patch.apply(&mut link);

        let conn = self.pool.get()?;
        conn.execute(
            "UPDATE social_media SET name = ?, username = ?, url = ?, icon_class = ?
             WHERE id = ?",
            (&link.name, &link.username, &link.url, &link.icon_class, id),
        )
        .context("Failed to update social media link")?;

        Ok(Some(link))
    }

    /// Delete a link; false when nothing matched
    pub fn delete(&self, id: i64) -> Result<bool> {
        let conn = self.pool.get()?;
        let rows_affected = conn
            .execute("DELETE FROM social_media WHERE id = ?", [id])
            .context("Failed to delete social media link")?;
        Ok(rows_affected > 0)
    }
}
