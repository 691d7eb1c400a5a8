// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Database Seeder
//!
//! Populates a freshly migrated store with the reference exercise catalog, a
//! demo user, and a day of sample activity data. Every insert is keyed on the
//! entity's natural key, so the seeder is idempotent: re-running it (or
//! resuming after an interrupted run) skips rows that already exist and fills
//! in the rest. Each stage commits independently — exercises, then the demo
//! user, then the activity batch — and a failed activity precondition leaves
//! the earlier commits standing.

use crate::database::{ActivityCounts, Database};
use crate::models::{
    DifficultyLevel, Exercise, ExperienceLevel, FitnessGoal, Gender, NutritionLog, ProgressRecord,
    User, WorkoutLog,
};
use anyhow::Result;
use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

/// Email of the demo account created by the seeder
pub const DEMO_EMAIL: &str = "demo@muscleup.com";

/// Plaintext demo password; hashed with bcrypt before it is persisted
pub const DEMO_PASSWORD: &str = "demo123";

/// Catalog exercises the sample activity rows are built on
pub const SAMPLE_ACTIVITY_EXERCISES: [&str; 3] = ["Squat", "Push-up", "Deadlift"];

/// Errors surfaced by seeding operations
#[derive(Debug, Error)]
pub enum SeedError {
    /// The sample activity stage references exercises the store does not have.
    /// The stage is skipped; earlier stages remain committed.
    #[error("required exercises missing from the store: {0:?}")]
    MissingExercises(Vec<String>),
    /// Store-level failure; fatal for the whole run
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Result of the catalog stage
#[derive(Debug, Clone, Copy)]
pub struct CatalogSummary {
    /// Catalog entries processed (the full catalog, every run)
    pub processed: usize,
    /// Entries newly inserted this run
    pub inserted: u64,
}

/// How the sample activity stage ended
#[derive(Debug, Clone)]
pub enum ActivityOutcome {
    /// Activity rows staged and committed (counts may be zero on re-runs)
    Seeded(ActivityCounts),
    /// Stage skipped because these exercises were not found
    MissingExercises(Vec<String>),
}

/// Summary of a full seeding run
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub catalog: CatalogSummary,
    pub user: User,
    pub activity: ActivityOutcome,
}

/// The fixed reference catalog of strength movements
pub fn exercise_catalog() -> Vec<Exercise> {
    vec![
        // Core barbell compounds
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
        ),
        Exercise::new(
            "Deadlift",
            "Strength",
            "Back",
            DifficultyLevel::Intermediate,
            "Posterior chain compound",
            "Hinge at hips and lift bar to standing",
            4,
            5,
            120,
        ),
        Exercise::new(
            "Bench Press",
            "Strength",
            "Chest",
            DifficultyLevel::Intermediate,
            "Chest pressing movement",
            "Press barbell from chest to lockout",
            4,
            8,
            90,
        ),
        // Bodyweight staple; the sample workout data trains it
        Exercise::new(
            "Push-up",
            "Strength",
            "Chest",
            DifficultyLevel::Beginner,
            "Bodyweight horizontal press",
            "Lower chest to the floor and press back up",
            3,
            15,
            45,
        ),
        Exercise::new(
            "Pull-up",
            "Strength",
            "Back",
            DifficultyLevel::Intermediate,
            "Vertical pulling bodyweight",
            "Pull until chin clears bar",
            3,
            8,
            90,
        ),
        Exercise::new(
            "Overhead Press",
            "Strength",
            "Shoulders",
            DifficultyLevel::Intermediate,
            "Standing shoulder press",
            "Press bar overhead to full extension",
            3,
            8,
            75,
        ),
        // Accessory movements
        Exercise::new(
            "Incline Bench Press",
            "Strength",
            "Chest",
            DifficultyLevel::Intermediate,
            "Upper-chest pressing",
            "Press from an incline bench",
            4,
            8,
            90,
        ),
        Exercise::new(
            "Leg Curl",
            "Strength",
            "Hamstrings",
            DifficultyLevel::Beginner,
            "Hamstring isolation",
            "Curl pad toward glutes on machine",
            3,
            12,
            60,
        ),
        Exercise::new(
            "Lateral Raises",
            "Strength",
            "Shoulders",
            DifficultyLevel::Beginner,
            "Medial delt isolation",
            "Raise dumbbells to sides",
            3,
            12,
            60,
        ),
        Exercise::new(
            "Leg Press",
            "Strength",
            "Legs",
            DifficultyLevel::Beginner,
            "Sled leg press",
            "Press sled by extending knees",
            4,
            10,
            90,
        ),
        Exercise::new(
            "Tricep Pushdown",
            "Strength",
            "Triceps",
            DifficultyLevel::Beginner,
            "Cable triceps isolation",
            "Extend elbows with rope/bar attachment",
            3,
            12,
            60,
        ),
        Exercise::new(
            "Lat Pull Down",
            "Strength",
            "Back",
            DifficultyLevel::Beginner,
            "Vertical pulling on cable",
            "Pull bar to upper chest",
            3,
            10,
            75,
        ),
        Exercise::new(
            "Arnold Press",
            "Strength",
            "Shoulders",
            DifficultyLevel::Intermediate,
            "Rotational dumbbell press",
            "Rotate wrists during press",
            3,
            10,
            75,
        ),
        Exercise::new(
            "Face Pull",
            "Strength",
            "Rear Delts",
            DifficultyLevel::Beginner,
            "Rear delt cable pull",
            "Pull rope to face with elbows high",
            3,
            15,
            60,
        ),
        Exercise::new(
            "Shrugs",
            "Strength",
            "Traps",
            DifficultyLevel::Beginner,
            "Upper trap isolation",
            "Elevate shoulders while holding weight",
            3,
            12,
            60,
        ),
        Exercise::new(
            "Back Extension",
            "Strength",
            "Lower Back",
            DifficultyLevel::Beginner,
            "Hyperextension accessory",
            "Extend trunk over bench with neutral spine",
            3,
            12,
            60,
        ),
        Exercise::new(
            "Bent Over Row",
            "Strength",
            "Back",
            DifficultyLevel::Intermediate,
            "Horizontal barbell row",
            "Row bar to torso while hinged",
            4,
            8,
            90,
        ),
        Exercise::new(
            "Bicep Curl",
            "Strength",
            "Biceps",
            DifficultyLevel::Beginner,
            "Elbow flexion",
            "Curl barbell/dumbbells without swinging",
            3,
            12,
            60,
        ),
    ]
}

/// Seeds reference and demo data into an already-migrated store
pub struct Seeder<'a> {
    database: &'a Database,
}

impl<'a> Seeder<'a> {
    pub fn new(database: &'a Database) -> Self {
        Self { database }
    }

    /// Run all seeding stages in order
    ///
    /// A missing-exercise failure in the activity stage is reported and
    /// skipped; store errors abort the run.
    pub async fn run(&self) -> Result<SeedReport> {
        info!("Seeding MuscleUp reference and demo data");

        let catalog = self.seed_exercises().await?;
        let user = self.seed_demo_user().await?;

        let activity = match self.seed_sample_activity(&user).await {
            Ok(counts) => ActivityOutcome::Seeded(counts),
            Err(SeedError::MissingExercises(missing)) => {
                warn!(
                    "Sample activity data skipped; exercises not found: {}",
                    missing.join(", ")
                );
                ActivityOutcome::MissingExercises(missing)
            }
            Err(SeedError::Store(e)) => return Err(e),
        };

        Ok(SeedReport {
            catalog,
            user,
            activity,
        })
    }

    /// Insert the exercise catalog, one transaction for the whole group
    ///
    /// Entries whose name already exists are skipped; an all-skipped run is
    /// the normal steady state, not an error.
    pub async fn seed_exercises(&self) -> Result<CatalogSummary> {
        let catalog = exercise_catalog();
        let inserted = self.database.insert_exercises(&catalog).await?;

        info!(
            "Exercise catalog seeded: {} entries processed, {} newly inserted",
            catalog.len(),
            inserted
        );

        Ok(CatalogSummary {
            processed: catalog.len(),
            inserted,
        })
    }

    /// Create the demo account, or return the stored one unchanged
    pub async fn seed_demo_user(&self) -> Result<User> {
        if let Some(existing) = self.database.get_user_by_email(DEMO_EMAIL).await? {
            info!("Demo user already exists: {DEMO_EMAIL}");
            return Ok(existing);
        }

        let password_hash = bcrypt::hash(DEMO_PASSWORD, bcrypt::DEFAULT_COST)?;
        let user = User::new(
            "Demo User",
            DEMO_EMAIL,
            &password_hash,
            25,
            Gender::Male,
            FitnessGoal::GainMuscle,
            ExperienceLevel::Intermediate,
        );

        self.database.create_user(&user).await?;
        info!("Created demo user: {DEMO_EMAIL}");

        Ok(user)
    }

    /// Stage one day of sample workout, nutrition, and progress data
    ///
    /// Requires the exercises in [`SAMPLE_ACTIVITY_EXERCISES`] to exist;
    /// returns [`SeedError::MissingExercises`] listing any that don't. All
    /// rows commit together in one transaction, each guarded by its natural
    /// key.
    pub async fn seed_sample_activity(
        &self,
        user: &User,
    ) -> Result<ActivityCounts, SeedError> {
        let mut resolved = Vec::with_capacity(SAMPLE_ACTIVITY_EXERCISES.len());
        let mut missing = Vec::new();

        for name in SAMPLE_ACTIVITY_EXERCISES {
            match self.database.get_exercise_by_name(name).await? {
                Some(exercise) => resolved.push(exercise),
                None => missing.push(name.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(SeedError::MissingExercises(missing));
        }

        let (squat, pushup, deadlift) = (&resolved[0], &resolved[1], &resolved[2]);
        let today = Utc::now().date_naive();

        let workout_logs = vec![
            WorkoutLog {
                id: Uuid::new_v4(),
                user_id: user.id,
                exercise_id: squat.id,
                date: today,
                sets: 3,
                reps: 12,
                weight: 60.0,
                rest_time: 60,
                duration: 30,
                notes: Some("Good form, felt strong".to_string()),
            },
            WorkoutLog {
                id: Uuid::new_v4(),
                user_id: user.id,
                exercise_id: pushup.id,
                date: today,
                sets: 3,
                reps: 15,
                weight: 0.0,
                rest_time: 45,
                duration: 20,
                notes: Some("Bodyweight exercise".to_string()),
            },
            WorkoutLog {
                id: Uuid::new_v4(),
                user_id: user.id,
                exercise_id: deadlift.id,
                date: today,
                sets: 4,
                reps: 5,
                weight: 100.0,
                rest_time: 120,
                duration: 45,
                notes: Some("New PR! Felt great".to_string()),
            },
        ];

        let nutrition_log = NutritionLog {
            id: Uuid::new_v4(),
            user_id: user.id,
            date: today,
            calorie_target: 2500,
            calories_consumed: 2200,
            protein: 150.0,
            carbs: 250.0,
            fats: 80.0,
            fiber: 35.0,
            sugar: 50.0,
            sodium: 2000.0,
            water_intake: 3.0,
            notes: Some("Good day of eating, hit protein target".to_string()),
        };

        let progress_record = ProgressRecord {
            id: Uuid::new_v4(),
            user_id: user.id,
            exercise_id: deadlift.id,
            date: today,
            personal_record: 100.0,
            body_weight: Some(75.0),
            body_fat_percentage: Some(15.0),
            muscle_mass: Some(65.0),
            chest_measurement: Some(100.0),
            waist_measurement: Some(80.0),
            arm_measurement: Some(35.0),
            thigh_measurement: Some(60.0),
            notes: Some("New deadlift PR! Feeling stronger".to_string()),
        };

        let counts = self
            .database
            .insert_activity_records(
                &workout_logs,
                std::slice::from_ref(&nutrition_log),
                std::slice::from_ref(&progress_record),
            )
            .await?;

        info!(
            "Sample activity seeded: {} workout logs, {} nutrition logs, {} progress records inserted",
            counts.workout_logs, counts.nutrition_logs, counts.progress_records
        );

        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_are_unique() {
        let catalog = exercise_catalog();
        let names: HashSet<&str> = catalog.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn test_catalog_contains_sample_activity_exercises() {
        let catalog = exercise_catalog();
        for name in SAMPLE_ACTIVITY_EXERCISES {
            assert!(
                catalog.iter().any(|e| e.name == name),
                "catalog is missing {name}"
            );
        }
    }

    #[test]
    fn test_catalog_defaults_are_sane() {
        for exercise in exercise_catalog() {
            assert!(exercise.default_sets > 0);
            assert!(exercise.default_reps > 0);
            assert!(exercise.default_rest_time >= 45);
            assert!(!exercise.instructions.is_empty());
        }
    }
}
