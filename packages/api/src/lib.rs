//! # API crate — shared fullstack server functions for WeightLog
//!
//! This crate is the backbone of the WeightLog fullstack architecture. It
//! defines every Dioxus server function the web frontend calls, along with
//! the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Email + password authentication: Argon2 hashing, session resolution |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) and migrations |
//! | [`models`] | — | Database models (`User`, view and profile rows) and their client-safe projections |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function,
//! annotated with `#[get(...)]` or `#[post(...)]` and compiled twice: once
//! with full server logic (behind `#[cfg(feature = "server")]`) and once as
//! a thin client stub that simply forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `register`, `login`, `logout`, `update_password`
//! - **Weights**: `list_weights`, `add_weight`, `update_weight`, `delete_weight`
//! - **Profile**: `get_user_details`, `update_user_details`, `list_bmi_categories`
//!
//! Weight reads go through the `weights_with_bmi` database view, so every
//! record already carries BMI, category, difference-from-previous and the
//! one-week rolling average. Mutations touch the raw `weights` table and
//! are always scoped to the session user.

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;

pub use models::{BmiCategoryInfo, UserDetailsInfo, UserInfo};
pub use store::WeightRecord;

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Register a new user with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Check if user already exists
    let existing: Option<(i64,)> =
        sqlx::query_as("SELECT 1::bigint AS n FROM users WHERE email = $1")
            .bind(&email)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    let password_hash = auth::hash_password(&password).map_err(|e| ServerFnError::new(e))?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING *",
    )
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid =
        auth::verify_password(&password, &user.password_hash).map_err(|e| ServerFnError::new(e))?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Set a new password for the authenticated user.
#[cfg(feature = "server")]
#[post("/api/auth/password", session: tower_sessions::Session)]
pub async fn update_password(new_password: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let user_id = auth::session_user_id(&session).await?;

    if new_password.len() < 8 {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }

    let password_hash = auth::hash_password(&new_password).map_err(|e| ServerFnError::new(e))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("UPDATE users SET password_hash = $1, updated_at = NOW() WHERE id = $2")
        .bind(&password_hash)
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/password")]
pub async fn update_password(new_password: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// The weight form accepts 0.1 to 999.9 kg; everything else is rejected
/// before it reaches the database.
#[cfg(feature = "server")]
fn validate_weight(weight: f64) -> Result<(), ServerFnError> {
    if !weight.is_finite() || weight <= 0.0 || weight >= 1000.0 {
        return Err(ServerFnError::new("Weight must be between 0 and 1000 kg"));
    }
    Ok(())
}

/// All weight entries for the current user, newest first, read through the
/// `weights_with_bmi` view.
#[cfg(feature = "server")]
#[get("/api/weights", session: tower_sessions::Session)]
pub async fn list_weights() -> Result<Vec<WeightRecord>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::WeightWithBmiRow;

    let user_id = auth::session_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<WeightWithBmiRow> = sqlx::query_as(
        "SELECT * FROM weights_with_bmi WHERE user_id = $1 ORDER BY created_on DESC, id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(|r| r.to_record()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/weights")]
pub async fn list_weights() -> Result<Vec<WeightRecord>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Record a new weight entry. `created_on` is an ISO date (`YYYY-MM-DD`)
/// and defaults to today. Returns the entry enriched by the view.
#[cfg(feature = "server")]
#[post("/api/weights", session: tower_sessions::Session)]
pub async fn add_weight(
    weight: f64,
    created_on: Option<String>,
) -> Result<WeightRecord, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::WeightWithBmiRow;

    let user_id = auth::session_user_id(&session).await?;
    validate_weight(weight)?;

    let created_on = match created_on {
        Some(raw) => chrono::NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|e| ServerFnError::new(format!("Invalid date: {e}")))?,
        None => chrono::Utc::now().date_naive(),
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO weights (user_id, weight, created_on) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(user_id)
    .bind(weight)
    .bind(created_on)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(%user_id, id, weight, "recorded weight entry");

    let row: WeightWithBmiRow = sqlx::query_as("SELECT * FROM weights_with_bmi WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_record())
}

#[cfg(not(feature = "server"))]
#[post("/api/weights")]
pub async fn add_weight(
    weight: f64,
    created_on: Option<String>,
) -> Result<WeightRecord, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Change the weight of an existing entry. Returns it re-enriched by the
/// view (difference and averages shift with the new value).
#[cfg(feature = "server")]
#[post("/api/weights/update", session: tower_sessions::Session)]
pub async fn update_weight(id: i64, weight: f64) -> Result<WeightRecord, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::WeightWithBmiRow;

    let user_id = auth::session_user_id(&session).await?;
    validate_weight(weight)?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let result = sqlx::query("UPDATE weights SET weight = $1 WHERE id = $2 AND user_id = $3")
        .bind(weight)
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ServerFnError::new("Weight entry not found"));
    }

    let row: WeightWithBmiRow = sqlx::query_as("SELECT * FROM weights_with_bmi WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_record())
}

#[cfg(not(feature = "server"))]
#[post("/api/weights/update")]
pub async fn update_weight(id: i64, weight: f64) -> Result<WeightRecord, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a weight entry owned by the current user.
#[cfg(feature = "server")]
#[post("/api/weights/delete", session: tower_sessions::Session)]
pub async fn delete_weight(id: i64) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let user_id = auth::session_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let result = sqlx::query("DELETE FROM weights WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ServerFnError::new("Weight entry not found"));
    }

    tracing::info!(%user_id, id, "deleted weight entry");

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/weights/delete")]
pub async fn delete_weight(id: i64) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Profile details for the current user, if they have been set.
#[cfg(feature = "server")]
#[get("/api/profile", session: tower_sessions::Session)]
pub async fn get_user_details() -> Result<Option<UserDetailsInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::UserDetailsRow;

    let user_id = auth::session_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<UserDetailsRow> =
        sqlx::query_as("SELECT * FROM user_details WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.map(|r| r.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/profile")]
pub async fn get_user_details() -> Result<Option<UserDetailsInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create or update the current user's profile details.
#[cfg(feature = "server")]
#[post("/api/profile", session: tower_sessions::Session)]
pub async fn update_user_details(
    first_name: Option<String>,
    last_name: Option<String>,
    height_cm: i32,
    target_weight: Option<f64>,
) -> Result<UserDetailsInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::UserDetailsRow;

    let user_id = auth::session_user_id(&session).await?;

    if !(1..300).contains(&height_cm) {
        return Err(ServerFnError::new("Height must be between 1 and 299 cm"));
    }
    if let Some(target) = target_weight {
        validate_weight(target)?;
    }

    let first_name = first_name.filter(|s| !s.trim().is_empty());
    let last_name = last_name.filter(|s| !s.trim().is_empty());

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: UserDetailsRow = sqlx::query_as(
        "INSERT INTO user_details (user_id, first_name, last_name, height_cm, target_weight, updated_at)
         VALUES ($1, $2, $3, $4, $5, NOW())
         ON CONFLICT (user_id) DO UPDATE SET
            first_name = $2,
            last_name = $3,
            height_cm = $4,
            target_weight = $5,
            updated_at = NOW()
         RETURNING *",
    )
    .bind(user_id)
    .bind(&first_name)
    .bind(&last_name)
    .bind(height_cm)
    .bind(target_weight)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/profile")]
pub async fn update_user_details(
    first_name: Option<String>,
    last_name: Option<String>,
    height_cm: i32,
    target_weight: Option<f64>,
) -> Result<UserDetailsInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// The BMI bands, ordered from underweight up. Reference data, no session
/// required.
#[cfg(feature = "server")]
#[get("/api/bmi-categories")]
pub async fn list_bmi_categories() -> Result<Vec<BmiCategoryInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::BmiCategoryRow;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<BmiCategoryRow> =
        sqlx::query_as("SELECT * FROM bmi_categories ORDER BY min_value")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(|r| r.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/bmi-categories")]
pub async fn list_bmi_categories() -> Result<Vec<BmiCategoryInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
