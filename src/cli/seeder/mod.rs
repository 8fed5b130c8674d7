//! Database seeding for local development.
//!
//! Generates fake schools, profiles, students, observations, subscriptions
//! and transfers. A single bcrypt hash (cost 4, password `password`) is
//! reused for every seeded profile so large seeds stay fast.

pub mod models;
pub mod profiles;
pub mod records;
pub mod schools;
pub mod students;

pub use models::{ProfilesPerSchool, SeedConfig};

use std::time::Instant;

use bcrypt::hash;
use sqlx::PgPool;

/// Password every seeded profile logs in with.
pub const SEED_PASSWORD: &str = "password";

pub async fn seed_database(db: &PgPool, config: SeedConfig) -> anyhow::Result<()> {
    let start = Instant::now();

    println!("🌱 Seeding database...");
    println!("   - Schools: {}", config.num_schools);
    println!(
        "   - Profiles per school: 1 admin, {} directors, {} users",
        config.profiles_per_school.directors, config.profiles_per_school.users
    );
    println!(
        "   - Students per school: {} ({} observations each)",
        config.students_per_school, config.observations_per_student
    );
    println!("   - Transfers: {}", config.num_transfers);

    let password_hash = hash(SEED_PASSWORD, 4)?;

    let school_ids = schools::seed_schools(db, config.num_schools).await?;
    profiles::seed_profiles(db, &school_ids, &config.profiles_per_school, &password_hash).await?;
    let student_ids =
        students::seed_students(db, &school_ids, config.students_per_school).await?;
    records::seed_observations(db, &student_ids, config.observations_per_student).await?;
    records::seed_subscriptions(db, &school_ids).await?;
    records::seed_transfers(db, &student_ids, &school_ids, config.num_transfers).await?;

    println!(
        "✅ Seeding finished in {:.2}s (login password for all profiles: {:?})",
        start.elapsed().as_secs_f64(),
        SEED_PASSWORD
    );

    Ok(())
}

/// Deletes all data.
///
/// Profiles go first: their school reference has no cascade and would block
/// the school delete. Schools then cascade to students, subscriptions,
/// transfers and observations.
pub async fn clear_seeded_data(db: &PgPool) -> anyhow::Result<()> {
    println!("🧹 Clearing data...");

    sqlx::query("DELETE FROM auth_tokens").execute(db).await?;
    sqlx::query("DELETE FROM profiles").execute(db).await?;
    sqlx::query("DELETE FROM schools").execute(db).await?;

    println!("✅ Done");

    Ok(())
}
