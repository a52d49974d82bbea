use anyhow::{Context, Result};
use rusqlite::OptionalExtension;

use folio_types::{NewProject, Project, ProjectPatch};

use crate::db::DbPool;

pub struct ProjectRepository {
    pool: DbPool,
}

impl ProjectRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// List all projects in display sequence, with dense 1..N ranks
    pub fn list(&self) -> Result<Vec<Project>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, description, image_url, project_url,
                    ROW_NUMBER() OVER (ORDER BY display_order, id) AS display_rank
             FROM projects
             ORDER BY display_order, id",
        )?;

        let projects = stmt
            .query_map([], |row| {
                Ok(Project {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                    image_url: row.get(3)?,
                    project_url: row.get(4)?,
                    order: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(projects)
    }

    /// Get a project by ID, with its current display rank
    pub fn get(&self, id: i64) -> Result<Option<Project>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, description, image_url, project_url, display_rank
             FROM (SELECT id, name, description, image_url, project_url,
                          ROW_NUMBER() OVER (ORDER BY display_order, id) AS display_rank
                   FROM projects)
             WHERE id = ?",
        )?;

        let project = stmt
            .query_row([id], |row| {
                Ok(Project {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                    image_url: row.get(3)?,
                    project_url: row.get(4)?,
                    order: row.get(5)?,
                })
            })
            .optional()?;

        Ok(project)
    }

    /// Create a project at the end of the display sequence; the stored
    /// display_order is computed inside the INSERT as collection size + 1
    pub fn create(&self, new_project: &NewProject) -> Result<Project> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO projects (name, description, image_url, project_url, display_order)
             VALUES (?, ?, ?, ?, (SELECT COUNT(*) + 1 FROM projects))",
            (
                &new_project.name,
                &new_project.description,
                &new_project.image_url,
                &new_project.project_url,
            ),
        )
        .context("Failed to create project")?;
        let id = conn.last_insert_rowid();

        // Release before re-fetching; the in-memory pool has one connection
        drop(conn);
        self.get(id)?.context("Project row missing after insert")
    }

    /// Apply a partial update; `None` when the id does not exist
    pub fn update(&self, id: i64, patch: &ProjectPatch) -> Result<Option<Project>> {
        let mut project = match self.get(id)? {
            Some(project) => project,
            None => return Ok(None),
        };
        patch.apply(&mut project);

        let conn = self.pool.get()?;
        conn.execute(
            "UPDATE projects SET name = ?, description = ?, image_url = ?, project_url = ?
             WHERE id = ?",
            (
                &project.name,
                &project.description,
                &project.image_url,
                &project.project_url,
                id,
            ),
        )
        .context("Failed to update project")?;

        Ok(Some(project))
    }

    /// Delete a project; false when nothing matched
    pub fn delete(&self, id: i64) -> Result<bool> {
        let conn = self.pool.get()?;
        let rows_affected = conn
            .execute("DELETE FROM projects WHERE id = ?", [id])
            .context("Failed to delete project")?;
        Ok(rows_affected > 0)
    }
}
