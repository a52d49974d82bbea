use anyhow::{Context, Result};
use rusqlite::Row;

use folio_types::{NewSettings, SiteSettings, StatusTexts};

use crate::db::DbPool;

/// The settings table holds exactly one row; the schema pins its id to 1
const SETTINGS_ID: i64 = 1;

pub struct SettingsRepository {
    pool: DbPool,
}

fn row_to_settings(row: &Row) -> rusqlite::Result<SiteSettings> {
    let status_json: String = row.get(6)?;
    let status_texts: StatusTexts = serde_json::from_str(&status_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(SiteSettings {
        id: row.get(0)?,
        profile_image_url: row.get(1)?,
        profile_name: row.get(2)?,
        profile_age: row.get(3)?,
        whatsapp_url: row.get(4)?,
        background_audio_url: row.get(5)?,
        status_texts,
    })
}

impl SettingsRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get the settings singleton. The row is seeded at initialization, so
    /// absence is a store fault rather than a caller error.
    pub fn get(&self) -> Result<SiteSettings> {
        let conn = self.pool.get()?;
        let settings = conn
            .query_row(
                "SELECT id, profile_image_url, profile_name, profile_age, whatsapp_url,
                        background_audio_url, status_texts
                 FROM settings
                 WHERE id = ?",
                [SETTINGS_ID],
                row_to_settings,
            )
            .context("Failed to load site settings")?;
        Ok(settings)
    }

    /// Replace the singleton wholesale; last write wins
    pub fn replace(&self, new_settings: &NewSettings) -> Result<SiteSettings> {
        let status_json = serde_json::to_string(&new_settings.status_texts)
            .context("Failed to encode status texts")?;

        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO settings (id, profile_image_url, profile_name, profile_age,
                                   whatsapp_url, background_audio_url, status_texts)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(id)
             DO UPDATE SET
                profile_image_url = excluded.profile_image_url,
                profile_name = excluded.profile_name,
                profile_age = excluded.profile_age,
                whatsapp_url = excluded.whatsapp_url,
                background_audio_url = excluded.background_audio_url,
                status_texts = excluded.status_texts",
            (
                SETTINGS_ID,
                &new_settings.profile_image_url,
                &new_settings.profile_name,
                new_settings.profile_age,
                &new_settings.whatsapp_url,
                &new_settings.background_audio_url,
                &status_json,
            ),
        )
        .context("Failed to replace site settings")?;

        // Release before re-reading; the in-memory pool has one connection
        drop(conn);
        self.get()
    }
}
