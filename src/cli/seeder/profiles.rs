use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use sqlx::PgPool;
use uuid::Uuid;

use super::models::{ProfileSeed, ProfilesPerSchool};

fn generate_profile(function: &'static str, school: i32) -> ProfileSeed {
    let firstname: String = FirstName().fake();
    let lastname: String = LastName().fake();
    // Uuid suffix keeps the unique email constraint safe across runs.
    let email = format!(
        "{}.{}.{}@seed.example.com",
        firstname.to_lowercase(),
        lastname.to_lowercase(),
        Uuid::new_v4().simple()
    );

    ProfileSeed {
        email,
        firstname,
        lastname,
        function,
        school,
    }
}

/// Batch-inserts one admin plus the configured directors and users per
/// school. All seeded profiles share `password_hash`.
pub async fn seed_profiles(
    db: &PgPool,
    school_ids: &[i32],
    per_school: &ProfilesPerSchool,
    password_hash: &str,
) -> anyhow::Result<usize> {
    let mut seeds = Vec::with_capacity(
        school_ids.len() * (1 + per_school.directors + per_school.users),
    );
    for &school in school_ids {
        seeds.push(generate_profile("admin", school));
        for _ in 0..per_school.directors {
            seeds.push(generate_profile("director", school));
        }
        for _ in 0..per_school.users {
            seeds.push(generate_profile("user", school));
        }
    }

    if seeds.is_empty() {
        return Ok(0);
    }

    let mut query = String::from(
        "INSERT INTO profiles (email, firstname, lastname, function, school, is_staff, password) VALUES ",
    );
    for i in 0..seeds.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let base = i * 6;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${}, ${}, TRUE, ${})",
            base + 1,
            base + 2,
            base + 3,
            base + 4,
            base + 5,
            base + 6
        ));
    }

    let mut sql = sqlx::query(&query);
    for seed in &seeds {
        sql = sql
            .bind(&seed.email)
            .bind(&seed.firstname)
            .bind(&seed.lastname)
            .bind(seed.function)
            .bind(seed.school)
            .bind(password_hash);
    }
    sql.execute(db).await?;

    println!("   ✓ {} profiles", seeds.len());

    Ok(seeds.len())
}
