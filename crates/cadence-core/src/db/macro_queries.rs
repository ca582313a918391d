//! Macro plan CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{CoachError, DatabaseResultExt, Result},
    models::{MacroPlan, MacroPlanStatus},
};

const INSERT_MACRO_PLAN_SQL: &str = "INSERT INTO macro_plans (key, user_id, plan_id, status, created_at, plan_text) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const DEACTIVATE_MACRO_PLANS_SQL: &str =
    "UPDATE macro_plans SET status = ?1 WHERE user_id = ?2 AND status = ?3";
const SELECT_ACTIVE_MACRO_PLAN_SQL: &str = "SELECT user_id, plan_id, status, created_at, plan_text FROM macro_plans WHERE user_id = ?1 AND status = 'active' ORDER BY created_at DESC LIMIT 1";

impl super::Database {
    /// Saves a new macro plan for the user and makes it the active one.
    ///
    /// Any previously active plans are demoted to `inactive` in the same
    /// transaction, so a user has at most one active macro plan.
    pub fn save_macro_plan(&mut self, user_id: &str, plan_text: &str) -> Result<MacroPlan> {
        let now = Timestamp::now();
        let plan = MacroPlan {
            user_id: user_id.to_string(),
            plan_id: MacroPlan::new_plan_id(now),
            macro_plan: plan_text.to_string(),
            created_at: now,
            status: MacroPlanStatus::Active,
        };

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            DEACTIVATE_MACRO_PLANS_SQL,
            params![
                MacroPlanStatus::Inactive.as_str(),
                user_id,
                MacroPlanStatus::Active.as_str()
            ],
        )
        .map_err(|e| CoachError::database_error("Failed to deactivate macro plans", e))?;

        tx.execute(
            INSERT_MACRO_PLAN_SQL,
            params![
                plan.storage_key(),
                &plan.user_id,
                &plan.plan_id,
                plan.status.as_str(),
                plan.created_at.to_string(),
                &plan.macro_plan,
            ],
        )
        .map_err(|e| CoachError::database_error("Failed to insert macro plan", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(plan)
    }

    /// Retrieves the user's currently active macro plan, if any.
    pub fn get_active_macro_plan(&self, user_id: &str) -> Result<Option<MacroPlan>> {
        self.connection
            .query_row(SELECT_ACTIVE_MACRO_PLAN_SQL, params![user_id], |row| {
                let status_str: String = row.get(2)?;
                let status = status_str.parse::<MacroPlanStatus>().map_err(|_| {
                    rusqlite::Error::FromSqlConversionFailure(
                        2,
                        Type::Text,
                        Box::new(std::io::Error::new(
                            std::io::ErrorKind::InvalidData,
                            format!("Invalid macro plan status: {status_str}"),
                        )),
                    )
                })?;

                Ok(MacroPlan {
                    user_id: row.get(0)?,
                    plan_id: row.get(1)?,
                    status,
                    created_at: row.get::<_, String>(3)?.parse::<Timestamp>().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
                    })?,
                    macro_plan: row.get(4)?,
                })
            })
            .optional()
            .db_context("Failed to query active macro plan")
    }
}
