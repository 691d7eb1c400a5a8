// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Integration tests for the idempotent seeding lifecycle

use anyhow::Result;
use muscleup_backend::database::Database;
use muscleup_backend::seed::{
    exercise_catalog, ActivityOutcome, SeedError, Seeder, DEMO_EMAIL, DEMO_PASSWORD,
    SAMPLE_ACTIVITY_EXERCISES,
};

async fn fresh_db() -> Database {
    Database::new("sqlite::memory:").await.unwrap()
}

#[tokio::test]
async fn test_full_seed_creates_all_rows() -> Result<()> {
    let db = fresh_db().await;
    let report = Seeder::new(&db).run().await?;

    let catalog_len = exercise_catalog().len() as i64;
    assert_eq!(db.count_exercises().await?, catalog_len);
    assert_eq!(db.count_users().await?, 1);
    assert_eq!(db.count_workout_logs().await?, 3);
    assert_eq!(db.count_nutrition_logs().await?, 1);
    assert_eq!(db.count_progress_records().await?, 1);

    assert_eq!(report.catalog.processed as i64, catalog_len);
    assert_eq!(report.catalog.inserted as i64, catalog_len);
    assert_eq!(report.user.email, DEMO_EMAIL);

    match report.activity {
        ActivityOutcome::Seeded(counts) => {
            assert_eq!(counts.workout_logs, 3);
            assert_eq!(counts.nutrition_logs, 1);
            assert_eq!(counts.progress_records, 1);
        }
        ActivityOutcome::MissingExercises(missing) => {
            panic!("activity seeding unexpectedly skipped: {missing:?}")
        }
    }

    Ok(())
}

#[tokio::test]
async fn test_seeding_twice_is_idempotent() -> Result<()> {
    let db = fresh_db().await;
    let seeder = Seeder::new(&db);

    let first = seeder.run().await?;
    let counts_after_first = (
        db.count_exercises().await?,
        db.count_users().await?,
        db.count_workout_logs().await?,
        db.count_nutrition_logs().await?,
        db.count_progress_records().await?,
    );

    let second = seeder.run().await?;
    let counts_after_second = (
        db.count_exercises().await?,
        db.count_users().await?,
        db.count_workout_logs().await?,
        db.count_nutrition_logs().await?,
        db.count_progress_records().await?,
    );

    assert_eq!(counts_after_first, counts_after_second);
    assert_eq!(second.catalog.inserted, 0);
    assert_eq!(first.user.id, second.user.id);

    match second.activity {
        ActivityOutcome::Seeded(counts) => {
            assert_eq!(counts.workout_logs, 0);
            assert_eq!(counts.nutrition_logs, 0);
            assert_eq!(counts.progress_records, 0);
        }
        ActivityOutcome::MissingExercises(missing) => {
            panic!("activity seeding unexpectedly skipped: {missing:?}")
        }
    }

    Ok(())
}

#[tokio::test]
async fn test_demo_user_survives_reseed_unchanged() -> Result<()> {
    let db = fresh_db().await;
    let seeder = Seeder::new(&db);

    let created = seeder.seed_demo_user().await?;
    let reused = seeder.seed_demo_user().await?;

    assert_eq!(db.count_users().await?, 1);
    assert_eq!(created.id, reused.id);
    assert_eq!(created.password_hash, reused.password_hash);

    // The stored hash must verify against the advertised demo password
    assert!(bcrypt::verify(DEMO_PASSWORD, &reused.password_hash)?);

    Ok(())
}

#[tokio::test]
async fn test_activity_requires_catalog_exercises() -> Result<()> {
    let db = fresh_db().await;
    let seeder = Seeder::new(&db);

    // Demo user exists, but no exercises were ever seeded
    let user = seeder.seed_demo_user().await?;

    match seeder.seed_sample_activity(&user).await {
        Err(SeedError::MissingExercises(missing)) => {
            assert_eq!(missing.len(), SAMPLE_ACTIVITY_EXERCISES.len());
            for name in SAMPLE_ACTIVITY_EXERCISES {
                assert!(missing.contains(&name.to_string()));
            }
        }
        other => panic!("expected missing-exercise failure, got {other:?}"),
    }

    assert_eq!(db.count_workout_logs().await?, 0);
    assert_eq!(db.count_nutrition_logs().await?, 0);
    assert_eq!(db.count_progress_records().await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_activity_reports_partially_missing_exercises() -> Result<()> {
    let db = fresh_db().await;
    let seeder = Seeder::new(&db);

    // Catalog subset without Push-up
    let subset: Vec<_> = exercise_catalog()
        .into_iter()
        .filter(|e| e.name == "Squat" || e.name == "Deadlift")
        .collect();
    db.insert_exercises(&subset).await?;

    let user = seeder.seed_demo_user().await?;

    match seeder.seed_sample_activity(&user).await {
        Err(SeedError::MissingExercises(missing)) => {
            assert_eq!(missing, vec!["Push-up".to_string()]);
        }
        other => panic!("expected missing-exercise failure, got {other:?}"),
    }

    assert_eq!(db.count_workout_logs().await?, 0);
    assert_eq!(db.count_progress_records().await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_interrupted_run_resumes_cleanly() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let db_path = temp_dir.path().join("muscleup.db");
    let database_url = format!("sqlite:{}", db_path.display());

    let catalog_len = exercise_catalog().len() as i64;

    // First process got as far as committing the exercise catalog
    {
        let db = Database::new(&database_url).await?;
        let report = Seeder::new(&db).seed_exercises().await?;
        assert_eq!(report.inserted as i64, catalog_len);
        assert_eq!(db.count_users().await?, 0);
    }

    // A later run against the same file completes the remaining stages
    let db = Database::new(&database_url).await?;
    let report = Seeder::new(&db).run().await?;

    assert_eq!(report.catalog.inserted, 0);
    assert_eq!(db.count_exercises().await?, catalog_len);
    assert_eq!(db.count_users().await?, 1);
    assert_eq!(db.count_workout_logs().await?, 3);
    assert_eq!(db.count_nutrition_logs().await?, 1);
    assert_eq!(db.count_progress_records().await?, 1);

    Ok(())
}

#[tokio::test]
async fn test_catalog_has_no_duplicate_names_after_reseed() -> Result<()> {
    let db = fresh_db().await;
    let seeder = Seeder::new(&db);

    seeder.seed_exercises().await?;
    seeder.seed_exercises().await?;

    assert_eq!(
        db.count_exercises().await?,
        exercise_catalog().len() as i64
    );

    // Every catalog name resolves to exactly one stored row
    for entry in exercise_catalog() {
        let stored = db.get_exercise_by_name(&entry.name).await?;
        assert!(stored.is_some(), "{} missing after seeding", entry.name);
    }

    Ok(())
}
