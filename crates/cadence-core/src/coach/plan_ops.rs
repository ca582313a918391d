//! Macro plan, profile, and feedback operations for the Coach.

use tokio::task;

use super::Coach;
use crate::{
    db::Database,
    error::{CoachError, Result},
    models::{Feedback, MacroPlan, UserProfile, UserStats},
    params::{SaveMacroPlan, SaveProfile, UserId},
};

impl Coach {
    /// Saves a new macro plan, deactivating the user's previous plans.
    pub async fn save_macro_plan(&self, params: &SaveMacroPlan) -> Result<MacroPlan> {
        let db_path = self.db_path.clone();
        let user_id = params.user_id.clone();
        let plan_text = params.plan_text.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.save_macro_plan(&user_id, &plan_text)
        })
        .await
        .map_err(|e| CoachError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves the user's currently active macro plan, if any.
    pub async fn active_macro_plan(&self, params: &UserId) -> Result<Option<MacroPlan>> {
        let db_path = self.db_path.clone();
        let user_id = params.user_id.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_active_macro_plan(&user_id)
        })
        .await
        .map_err(|e| CoachError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Saves (or replaces) the user's profile document.
    pub async fn save_profile(&self, params: &SaveProfile) -> Result<UserProfile> {
        let profile = params.validate()?;
        let db_path = self.db_path.clone();
        let user_id = params.user_id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.save_profile(&user_id, &profile)
        })
        .await
        .map_err(|e| CoachError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves the user's profile document, if any.
    pub async fn get_profile(&self, params: &UserId) -> Result<Option<UserProfile>> {
        let db_path = self.db_path.clone();
        let user_id = params.user_id.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_profile(&user_id)
        })
        .await
        .map_err(|e| CoachError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Records one feedback entry for a schedule.
    pub(crate) async fn insert_feedback(&self, feedback: Feedback) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.insert_feedback(&feedback)
        })
        .await
        .map_err(|e| CoachError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists a user's feedback entries, newest first.
    pub async fn list_feedback(&self, params: &UserId) -> Result<Vec<Feedback>> {
        let db_path = self.db_path.clone();
        let user_id = params.user_id.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_feedback(&user_id)
        })
        .await
        .map_err(|e| CoachError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Returns basic statistics about the data stored for a user.
    pub async fn user_stats(&self, params: &UserId) -> Result<UserStats> {
        let db_path = self.db_path.clone();
        let user_id = params.user_id.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.user_stats(&user_id)
        })
        .await
        .map_err(|e| CoachError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
