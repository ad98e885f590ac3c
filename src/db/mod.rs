//! Database module - SQLite storage for health profiles and saved plans

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use tokio::sync::Mutex;

use crate::profile::HealthProfile;
use crate::recommend::{PlanStore, SavedPlan};

/// Database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database at {}", path))?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let db = Self {
            conn: Connection::open_in_memory()?,
        };
        db.init_schema()?;
        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS health_profiles (
                user_id TEXT PRIMARY KEY,
                profile TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            -- One saved plan per user, replaced only after an explicit delete
            CREATE TABLE IF NOT EXISTS workout_plans (
                user_id TEXT PRIMARY KEY,
                recommendation TEXT NOT NULL,
                health_profile TEXT NOT NULL,
                created_at TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Insert or replace the user's health profile
    pub fn save_profile(&self, user_id: &str, profile: &HealthProfile) -> Result<()> {
        self.conn.execute(
            "INSERT INTO health_profiles (user_id, profile, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(user_id) DO UPDATE SET profile = excluded.profile, updated_at = excluded.updated_at",
            params![user_id, serde_json::to_string(profile)?, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    pub fn get_profile(&self, user_id: &str) -> Result<Option<HealthProfile>> {
        let json: Option<String> = self
            .conn
            .query_row(
                "SELECT profile FROM health_profiles WHERE user_id = ?1",
                params![user_id],
                |row| row.get(0),
            )
            .optional()?;

        json.map(|j| serde_json::from_str(&j).context("Corrupt health profile"))
            .transpose()
    }

    pub fn get_plan(&self, user_id: &str) -> Result<Option<SavedPlan>> {
        let row: Option<(String, String, String)> = self
            .conn
            .query_row(
                "SELECT recommendation, health_profile, created_at FROM workout_plans WHERE user_id = ?1",
                params![user_id],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        let Some((recommendation, health_profile, created_at)) = row else {
            return Ok(None);
        };

        Ok(Some(SavedPlan {
            recommendation: serde_json::from_str(&recommendation)
                .context("Corrupt saved recommendation")?,
            health_profile: serde_json::from_str(&health_profile)
                .context("Corrupt saved health profile")?,
            created_at: chrono::DateTime::parse_from_rfc3339(&created_at)
                .map(|d| d.with_timezone(&Utc))
                .context("Corrupt plan timestamp")?,
        }))
    }

    pub fn save_plan(&self, user_id: &str, plan: &SavedPlan) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO workout_plans (user_id, recommendation, health_profile, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                user_id,
                serde_json::to_string(&plan.recommendation)?,
                serde_json::to_string(&plan.health_profile)?,
                plan.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Returns true if a plan was removed
    pub fn delete_plan(&self, user_id: &str) -> Result<bool> {
        let n = self
            .conn
            .execute("DELETE FROM workout_plans WHERE user_id = ?1", params![user_id])?;
        Ok(n > 0)
    }
}

#[async_trait]
impl PlanStore for Mutex<Database> {
    async fn get_plan(&self, user_id: &str) -> Result<Option<SavedPlan>> {
        self.lock().await.get_plan(user_id)
    }

    async fn save_plan(&self, user_id: &str, plan: &SavedPlan) -> Result<()> {
        self.lock().await.save_plan(user_id, plan)
    }

    async fn delete_plan(&self, user_id: &str) -> Result<()> {
        self.lock().await.delete_plan(user_id).map(|_| ())
    }
}
