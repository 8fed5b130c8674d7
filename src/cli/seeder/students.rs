use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rand::Rng;
use sqlx::PgPool;

use super::models::StudentSeed;

fn generate_student(school_id: i32) -> StudentSeed {
    let mut rng = rand::thread_rng();
    let grade = rng.gen_range(1..=6);
    let section = (b'A' + rng.gen_range(0..3u8)) as char;

    StudentSeed {
        name: LastName().fake(),
        firstname: FirstName().fake(),
        age: rng.gen_range(6..=18),
        school_id,
        class: format!("{}{}", grade, section),
    }
}

/// Batch-inserts `per_school` students for each school, returning their ids.
pub async fn seed_students(
    db: &PgPool,
    school_ids: &[i32],
    per_school: usize,
) -> anyhow::Result<Vec<i32>> {
    let mut seeds = Vec::with_capacity(school_ids.len() * per_school);
    for &school_id in school_ids {
        for _ in 0..per_school {
            seeds.push(generate_student(school_id));
        }
    }

    if seeds.is_empty() {
        return Ok(Vec::new());
    }

    let mut query =
        String::from("INSERT INTO students (name, firstname, age, school_id, class) VALUES ");
    for i in 0..seeds.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let base = i * 5;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${}, ${})",
            base + 1,
            base + 2,
            base + 3,
            base + 4,
            base + 5
        ));
    }
    query.push_str(" RETURNING id");

    let mut sql = sqlx::query_scalar::<_, i32>(&query);
    for seed in &seeds {
        sql = sql
            .bind(&seed.name)
            .bind(&seed.firstname)
            .bind(seed.age)
            .bind(seed.school_id)
            .bind(&seed.class);
    }

    let ids = sql.fetch_all(db).await?;
    println!("   ✓ {} students", ids.len());

    Ok(ids)
}
