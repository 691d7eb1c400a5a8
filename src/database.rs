// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Database Management
//!
//! SQLite-backed storage for the MuscleUp backend. This module owns the schema
//! for all five entities and the conditional-insert operations the seeder is
//! built on: every table carries a UNIQUE constraint on its natural key, and
//! inserts use `ON CONFLICT ... DO NOTHING` so re-running a seed stage is a
//! no-op rather than an error. That pushes duplicate detection into the store
//! itself and removes the read-then-write race a lookup-first upsert would have.

use crate::models::{
    DifficultyLevel, Exercise, ExperienceLevel, FitnessGoal, Gender, NutritionLog, ProgressRecord,
    User, WorkoutLog,
};
use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use sqlx::{Pool, Row, Sqlite, SqlitePool};
use uuid::Uuid;

/// Row counts inserted by one activity batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityCounts {
    pub workout_logs: u64,
    pub nutrition_logs: u64,
    pub progress_records: u64,
}

/// Database manager for the MuscleUp store
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };

        // Run migrations
        db.migrate().await?;

        Ok(db)
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS exercises (
                id TEXT PRIMARY KEY,
                name TEXT UNIQUE NOT NULL,
                category TEXT NOT NULL,
                muscle_group TEXT NOT NULL,
                difficulty_level TEXT NOT NULL,
                description TEXT NOT NULL,
                instructions TEXT NOT NULL,
                default_sets INTEGER NOT NULL,
                default_reps INTEGER NOT NULL,
                default_rest_time INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                age INTEGER NOT NULL,
                gender TEXT NOT NULL,
                fitness_goal TEXT NOT NULL,
                experience_level TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS workout_logs (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id),
                exercise_id TEXT NOT NULL REFERENCES exercises(id),
                date TEXT NOT NULL,
                sets INTEGER NOT NULL,
                reps INTEGER NOT NULL,
                weight REAL NOT NULL,
                rest_time INTEGER NOT NULL,
                duration INTEGER NOT NULL,
                notes TEXT,
                UNIQUE(user_id, exercise_id, date)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS nutrition_logs (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id),
                date TEXT NOT NULL,
                calorie_target INTEGER NOT NULL,
                calories_consumed INTEGER NOT NULL,
                protein REAL NOT NULL,
                carbs REAL NOT NULL,
                fats REAL NOT NULL,
                fiber REAL NOT NULL,
                sugar REAL NOT NULL,
                sodium REAL NOT NULL,
                water_intake REAL NOT NULL,
                notes TEXT,
                UNIQUE(user_id, date)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS progress_records (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id),
                exercise_id TEXT NOT NULL REFERENCES exercises(id),
                date TEXT NOT NULL,
                personal_record REAL NOT NULL,
                body_weight REAL,
                body_fat_percentage REAL,
                muscle_mass REAL,
                chest_measurement REAL,
                waist_measurement REAL,
                arm_measurement REAL,
                thigh_measurement REAL,
                notes TEXT,
                UNIQUE(user_id, exercise_id, date)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Indexes for the lookups the application performs
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_exercises_name ON exercises(name)")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_workout_logs_user ON workout_logs(user_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert catalog exercises, skipping any whose name already exists
    ///
    /// The whole batch is committed in a single transaction. Returns the
    /// number of rows actually inserted.
    pub async fn insert_exercises(&self, exercises: &[Exercise]) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0u64;

        for exercise in exercises {
            let result = sqlx::query(
                r#"
                INSERT INTO exercises (id, name, category, muscle_group, difficulty_level,
                                       description, instructions, default_sets, default_reps,
                                       default_rest_time)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                ON CONFLICT(name) DO NOTHING
                "#,
            )
            .bind(exercise.id.to_string())
            .bind(&exercise.name)
            .bind(&exercise.category)
            .bind(&exercise.muscle_group)
            .bind(exercise.difficulty_level.as_str())
            .bind(&exercise.description)
            .bind(&exercise.instructions)
            .bind(exercise.default_sets)
            .bind(exercise.default_reps)
            .bind(exercise.default_rest_time)
            .execute(&mut *tx)
            .await?;

            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// Get an exercise by its unique name
    pub async fn get_exercise_by_name(&self, name: &str) -> Result<Option<Exercise>> {
        let row = sqlx::query("SELECT * FROM exercises WHERE name = ?1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_exercise(&row)?)),
            None => Ok(None),
        }
    }

    /// Create a new user
    ///
    /// Fails if the email is already taken; callers that want upsert behavior
    /// check [`Database::get_user_by_email`] first.
    pub async fn create_user(&self, user: &User) -> Result<Uuid> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, age, gender, fitness_goal,
                               experience_level, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.age)
        .bind(user.gender.as_str())
        .bind(user.fitness_goal.as_str())
        .bind(user.experience_level.as_str())
        .bind(user.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(user.id)
    }

    /// Get user by email
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE email = ?1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    /// Insert a batch of activity rows, skipping any whose natural key exists
    ///
    /// Workout logs, nutrition logs, and progress records are committed
    /// together in one transaction. Returns per-table insert counts.
    pub async fn insert_activity_records(
        &self,
        workout_logs: &[WorkoutLog],
        nutrition_logs: &[NutritionLog],
        progress_records: &[ProgressRecord],
    ) -> Result<ActivityCounts> {
        let mut tx = self.pool.begin().await?;
        let mut counts = ActivityCounts::default();

        for log in workout_logs {
            let result = sqlx::query(
                r#"
                INSERT INTO workout_logs (id, user_id, exercise_id, date, sets, reps, weight,
                                          rest_time, duration, notes)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                ON CONFLICT(user_id, exercise_id, date) DO NOTHING
                "#,
            )
            .bind(log.id.to_string())
            .bind(log.user_id.to_string())
            .bind(log.exercise_id.to_string())
            .bind(log.date.to_string())
            .bind(log.sets)
            .bind(log.reps)
            .bind(log.weight)
            .bind(log.rest_time)
            .bind(log.duration)
            .bind(&log.notes)
            .execute(&mut *tx)
            .await?;

            counts.workout_logs += result.rows_affected();
        }

        for log in nutrition_logs {
            let result = sqlx::query(
                r#"
                INSERT INTO nutrition_logs (id, user_id, date, calorie_target, calories_consumed,
                                            protein, carbs, fats, fiber, sugar, sodium,
                                            water_intake, notes)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
                ON CONFLICT(user_id, date) DO NOTHING
                "#,
            )
            .bind(log.id.to_string())
            .bind(log.user_id.to_string())
            .bind(log.date.to_string())
            .bind(log.calorie_target)
            .bind(log.calories_consumed)
            .bind(log.protein)
            .bind(log.carbs)
            .bind(log.fats)
            .bind(log.fiber)
            .bind(log.sugar)
            .bind(log.sodium)
            .bind(log.water_intake)
            .bind(&log.notes)
            .execute(&mut *tx)
            .await?;

            counts.nutrition_logs += result.rows_affected();
        }

        for record in progress_records {
            let result = sqlx::query(
                r#"
                INSERT INTO progress_records (id, user_id, exercise_id, date, personal_record,
                                              body_weight, body_fat_percentage, muscle_mass,
                                              chest_measurement, waist_measurement,
                                              arm_measurement, thigh_measurement, notes)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
                ON CONFLICT(user_id, exercise_id, date) DO NOTHING
                "#,
            )
            .bind(record.id.to_string())
            .bind(record.user_id.to_string())
            .bind(record.exercise_id.to_string())
            .bind(record.date.to_string())
            .bind(record.personal_record)
            .bind(record.body_weight)
            .bind(record.body_fat_percentage)
            .bind(record.muscle_mass)
            .bind(record.chest_measurement)
            .bind(record.waist_measurement)
            .bind(record.arm_measurement)
            .bind(record.thigh_measurement)
            .bind(&record.notes)
            .execute(&mut *tx)
            .await?;

            counts.progress_records += result.rows_affected();
        }

        tx.commit().await?;
        Ok(counts)
    }

    /// Count rows in the exercises table
    pub async fn count_exercises(&self) -> Result<i64> {
        self.count_table("exercises").await
    }

    /// Count rows in the users table
    pub async fn count_users(&self) -> Result<i64> {
        self.count_table("users").await
    }

    /// Count rows in the workout_logs table
    pub async fn count_workout_logs(&self) -> Result<i64> {
        self.count_table("workout_logs").await
    }

    /// Count rows in the nutrition_logs table
    pub async fn count_nutrition_logs(&self) -> Result<i64> {
        self.count_table("nutrition_logs").await
    }

    /// Count rows in the progress_records table
    pub async fn count_progress_records(&self) -> Result<i64> {
        self.count_table("progress_records").await
    }

    /// Cheap connectivity probe used by health checks
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn count_table(&self, table: &str) -> Result<i64> {
        // Table names come from the fixed set above, never from user input
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Convert database row to Exercise model
    fn row_to_exercise(row: &sqlx::sqlite::SqliteRow) -> Result<Exercise> {
        let id_str: String = row.try_get("id")?;
        let difficulty_str: String = row.try_get("difficulty_level")?;

        Ok(Exercise {
            id: Uuid::parse_str(&id_str)?,
            name: row.try_get("name")?,
            category: row.try_get("category")?,
            muscle_group: row.try_get("muscle_group")?,
            difficulty_level: DifficultyLevel::from_str(&difficulty_str)
                .ok_or_else(|| anyhow!("Unknown difficulty level: {difficulty_str}"))?,
            description: row.try_get("description")?,
            instructions: row.try_get("instructions")?,
            default_sets: row.try_get("default_sets")?,
            default_reps: row.try_get("default_reps")?,
            default_rest_time: row.try_get("default_rest_time")?,
        })
    }

    /// Convert database row to User model
    fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> Result<User> {
        let id_str: String = row.try_get("id")?;
        let gender_str: String = row.try_get("gender")?;
        let goal_str: String = row.try_get("fitness_goal")?;
        let experience_str: String = row.try_get("experience_level")?;
        let created_at_str: String = row.try_get("created_at")?;

        Ok(User {
            id: Uuid::parse_str(&id_str)?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            age: row.try_get("age")?,
            gender: Gender::from_str(&gender_str)
                .ok_or_else(|| anyhow!("Unknown gender: {gender_str}"))?,
            fitness_goal: FitnessGoal::from_str(&goal_str)
                .ok_or_else(|| anyhow!("Unknown fitness goal: {goal_str}"))?,
            experience_level: ExperienceLevel::from_str(&experience_str)
                .ok_or_else(|| anyhow!("Unknown experience level: {experience_str}"))?,
            created_at: DateTime::parse_from_rfc3339(&created_at_str)?.with_timezone(&Utc),
        })
    }
}
