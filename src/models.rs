// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Data Models
//!
//! Core data structures for the MuscleUp backend. These models map one-to-one
//! onto the SQLite tables created by [`crate::database::Database::migrate`] and
//! are shared between the seeder, the HTTP server, and the test suites.
//!
//! ## Design Principles
//!
//! - **Natural keys**: every entity carries the attributes that identify a
//!   logical record (exercise name, user email, log date tuples) independently
//!   of its surrogate `id`
//! - **Serializable**: all models support JSON serialization for the HTTP API
//! - **Type Safe**: closed value sets (difficulty, gender, goals) are enums,
//!   stored as snake_case strings
//!
//! ## Core Models
//!
//! - [`Exercise`]: one entry of the reference exercise catalog
//! - [`User`]: an application account
//! - [`WorkoutLog`]: a logged training session for one exercise on one day
//! - [`NutritionLog`]: a day's nutrition summary
//! - [`ProgressRecord`]: a personal record plus body measurements on one day

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Difficulty rating of a catalog exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    /// String form stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "beginner",
            DifficultyLevel::Intermediate => "intermediate",
            DifficultyLevel::Advanced => "advanced",
        }
    }

    /// Parse the stored string form
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "beginner" => Some(DifficultyLevel::Beginner),
            "intermediate" => Some(DifficultyLevel::Intermediate),
            "advanced" => Some(DifficultyLevel::Advanced),
            _ => None,
        }
    }
}

/// User gender as self-reported at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// Primary training goal selected by a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    LoseWeight,
    GainMuscle,
    Maintain,
    ImproveEndurance,
}

impl FitnessGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::LoseWeight => "lose_weight",
            FitnessGoal::GainMuscle => "gain_muscle",
            FitnessGoal::Maintain => "maintain",
            FitnessGoal::ImproveEndurance => "improve_endurance",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "lose_weight" => Some(FitnessGoal::LoseWeight),
            "gain_muscle" => Some(FitnessGoal::GainMuscle),
            "maintain" => Some(FitnessGoal::Maintain),
            "improve_endurance" => Some(FitnessGoal::ImproveEndurance),
            _ => None,
        }
    }
}

/// Self-assessed training experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "beginner" => Some(ExperienceLevel::Beginner),
            "intermediate" => Some(ExperienceLevel::Intermediate),
            "advanced" => Some(ExperienceLevel::Advanced),
            _ => None,
        }
    }
}

/// One entry of the reference exercise catalog
///
/// Exercises are identified by `name`; the catalog seeder relies on the
/// UNIQUE constraint on that column to stay idempotent across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Surrogate identifier
    pub id: Uuid,
    /// Unique exercise name ("Squat", "Deadlift", ...)
    pub name: String,
    /// Broad category ("Strength", "Cardio", ...)
    pub category: String,
    /// Primary muscle group trained
    pub muscle_group: String,
    /// Difficulty rating
    pub difficulty_level: DifficultyLevel,
    /// Short description of the movement
    pub description: String,
    /// How to perform the movement
    pub instructions: String,
    /// Suggested number of sets
    pub default_sets: i64,
    /// Suggested repetitions per set
    pub default_reps: i64,
    /// Suggested rest between sets in seconds
    pub default_rest_time: i64,
}

impl Exercise {
    /// Create a new catalog entry with a fresh surrogate id
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        category: &str,
        muscle_group: &str,
        difficulty_level: DifficultyLevel,
        description: &str,
        instructions: &str,
        default_sets: i64,
        default_reps: i64,
        default_rest_time: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
            muscle_group: muscle_group.to_string(),
            difficulty_level,
            description: description.to_string(),
            instructions: instructions.to_string(),
            default_sets,
            default_reps,
            default_rest_time,
        }
    }
}

/// An application user account
///
/// Identified by `email`. The password is stored as a bcrypt hash; the seeder
/// hashes the demo credentials before persisting them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Surrogate identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Unique email address
    pub email: String,
    /// Bcrypt password hash
    pub password_hash: String,
    /// Age in years
    pub age: i64,
    /// Self-reported gender
    pub gender: Gender,
    /// Primary training goal
    pub fitness_goal: FitnessGoal,
    /// Training experience level
    pub experience_level: ExperienceLevel,
    /// Account creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh surrogate id and creation timestamp
    pub fn new(
        name: &str,
        email: &str,
        password_hash: &str,
        age: i64,
        gender: Gender,
        fitness_goal: FitnessGoal,
        experience_level: ExperienceLevel,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            age,
            gender,
            fitness_goal,
            experience_level,
            created_at: Utc::now(),
        }
    }
}

/// A logged training session for one exercise on one day
///
/// A user logs at most one row per exercise per day; the
/// `(user_id, exercise_id, date)` tuple is the natural key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLog {
    /// Surrogate identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Exercise performed
    pub exercise_id: Uuid,
    /// Training day
    pub date: NaiveDate,
    /// Sets completed
    pub sets: i64,
    /// Repetitions per set
    pub reps: i64,
    /// Working weight in kilograms (0 for bodyweight movements)
    pub weight: f64,
    /// Rest between sets in seconds
    pub rest_time: i64,
    /// Session duration in minutes
    pub duration: i64,
    /// Free-form session notes
    pub notes: Option<String>,
}

/// A day's nutrition summary for one user
///
/// One row per user per day; `(user_id, date)` is the natural key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionLog {
    /// Surrogate identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Day covered by this summary
    pub date: NaiveDate,
    /// Calorie target for the day
    pub calorie_target: i64,
    /// Calories actually consumed
    pub calories_consumed: i64,
    /// Protein intake in grams
    pub protein: f64,
    /// Carbohydrate intake in grams
    pub carbs: f64,
    /// Fat intake in grams
    pub fats: f64,
    /// Fiber intake in grams
    pub fiber: f64,
    /// Sugar intake in grams
    pub sugar: f64,
    /// Sodium intake in milligrams
    pub sodium: f64,
    /// Water intake in liters
    pub water_intake: f64,
    /// Free-form notes for the day
    pub notes: Option<String>,
}

/// A personal record plus body measurements on one day
///
/// Tied to the exercise the record was set on; `(user_id, exercise_id, date)`
/// is the natural key. Measurement fields are optional because users rarely
/// record all of them at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Surrogate identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Exercise the record was set on
    pub exercise_id: Uuid,
    /// Day the record was set
    pub date: NaiveDate,
    /// Personal record weight in kilograms
    pub personal_record: f64,
    /// Body weight in kilograms
    pub body_weight: Option<f64>,
    /// Body fat percentage
    pub body_fat_percentage: Option<f64>,
    /// Muscle mass in kilograms
    pub muscle_mass: Option<f64>,
    /// Chest circumference in centimeters
    pub chest_measurement: Option<f64>,
    /// Waist circumference in centimeters
    pub waist_measurement: Option<f64>,
    /// Upper arm circumference in centimeters
    pub arm_measurement: Option<f64>,
    /// Thigh circumference in centimeters
    pub thigh_measurement: Option<f64>,
    /// Free-form notes
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    fn create_sample_exercise() -> Exercise {
        Exercise::new(
            "Squat",
            "Strength",
            "Legs",
            DifficultyLevel::Beginner,
            "Compound lower-body movement",
            "Stand with feet shoulder-width apart and squat down then up",
            3,
            12,
            60,
        )
    }

    fn create_sample_user() -> User {
        User::new(
            "Demo User",
            "demo@muscleup.com",
            "$2b$12$fakehashfortestsonly",
            25,
            Gender::Male,
            FitnessGoal::GainMuscle,
            ExperienceLevel::Intermediate,
        )
    }

    #[test]
    fn test_exercise_creation() {
        let exercise = create_sample_exercise();
        assert_eq!(exercise.name, "Squat");
        assert_eq!(exercise.muscle_group, "Legs");
        assert_eq!(exercise.difficulty_level, DifficultyLevel::Beginner);
        assert_eq!(exercise.default_sets, 3);
        assert_eq!(exercise.default_reps, 12);
    }

    #[test]
    fn test_exercise_serialization() {
        let exercise = create_sample_exercise();

        let json = serde_json::to_string(&exercise).expect("Failed to serialize exercise");
        assert!(json.contains("Squat"));
        assert!(json.contains("beginner")); // difficulty should be snake_case

        let deserialized: Exercise =
            serde_json::from_str(&json).expect("Failed to deserialize exercise");
        assert_eq!(deserialized.id, exercise.id);
        assert_eq!(deserialized.name, exercise.name);
        assert_eq!(deserialized.difficulty_level, DifficultyLevel::Beginner);
    }

    #[test]
    fn test_user_creation() {
        let user = create_sample_user();
        assert_eq!(user.email, "demo@muscleup.com");
        assert_eq!(user.age, 25);
        assert_eq!(user.gender, Gender::Male);
        assert_eq!(user.fitness_goal, FitnessGoal::GainMuscle);
        assert_eq!(user.experience_level, ExperienceLevel::Intermediate);
    }

    #[test]
    fn test_enum_round_trips() {
        assert_eq!(
            serde_json::to_string(&FitnessGoal::GainMuscle).unwrap(),
            "\"gain_muscle\""
        );
        assert_eq!(
            serde_json::to_string(&DifficultyLevel::Intermediate).unwrap(),
            "\"intermediate\""
        );

        for level in ["beginner", "intermediate", "advanced"] {
            let parsed = DifficultyLevel::from_str(level).unwrap();
            assert_eq!(parsed.as_str(), level);
        }
        assert!(DifficultyLevel::from_str("expert").is_none());

        for goal in ["lose_weight", "gain_muscle", "maintain", "improve_endurance"] {
            let parsed = FitnessGoal::from_str(goal).unwrap();
            assert_eq!(parsed.as_str(), goal);
        }
        assert!(Gender::from_str("").is_none());
    }

    #[test]
    fn test_progress_record_optional_fields() {
        let record = ProgressRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            exercise_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            personal_record: 100.0,
            body_weight: Some(75.0),
            body_fat_percentage: None,
            muscle_mass: None,
            chest_measurement: None,
            waist_measurement: None,
            arm_measurement: None,
            thigh_measurement: None,
            notes: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ProgressRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.personal_record, 100.0);
        assert_eq!(deserialized.body_weight, Some(75.0));
        assert_eq!(deserialized.body_fat_percentage, None);
    }
}
