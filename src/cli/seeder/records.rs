//! Seeding for the paperwork records: observations, subscriptions and
//! transfers.

use chrono::{Duration, Utc};
use fake::Fake;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use rand::Rng;
use rand::seq::SliceRandom;
use sqlx::PgPool;

/// Inserts `per_student` observations for each student.
pub async fn seed_observations(
    db: &PgPool,
    student_ids: &[i32],
    per_student: usize,
) -> anyhow::Result<usize> {
    let today = Utc::now().date_naive();
    let mut count = 0;

    let mut query = String::new();
    let mut rows: Vec<(i32, String, String, String, chrono::NaiveDate, chrono::NaiveTime)> =
        Vec::with_capacity(student_ids.len() * per_student);

    for &student_id in student_ids {
        for _ in 0..per_student {
            let mut rng = rand::thread_rng();
            rows.push((
                student_id,
                Sentence(3..8).fake(),
                Name().fake(),
                Sentence(2..5).fake(),
                today - Duration::days(rng.gen_range(0..180)),
                chrono::NaiveTime::from_hms_opt(rng.gen_range(8..17), rng.gen_range(0..60), 0)
                    .unwrap_or_default(),
            ));
        }
    }

    if rows.is_empty() {
        return Ok(0);
    }

    query.push_str(
        "INSERT INTO observations (id_student, observation, teacher, action, date, time) VALUES ",
    );
    for i in 0..rows.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let base = i * 6;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${}, ${}, ${})",
            base + 1,
            base + 2,
            base + 3,
            base + 4,
            base + 5,
            base + 6
        ));
    }

    let mut sql = sqlx::query(&query);
    for row in &rows {
        sql = sql
            .bind(row.0)
            .bind(&row.1)
            .bind(&row.2)
            .bind(&row.3)
            .bind(row.4)
            .bind(row.5);
        count += 1;
    }
    sql.execute(db).await?;

    println!("   ✓ {} observations", count);

    Ok(count)
}

/// Inserts one subscription per school.
pub async fn seed_subscriptions(db: &PgPool, school_ids: &[i32]) -> anyhow::Result<usize> {
    if school_ids.is_empty() {
        return Ok(0);
    }

    let today = Utc::now().date_naive();
    let kinds = ["basic", "standard", "premium"];

    let mut query = String::from(
        "INSERT INTO subscriptions (id_school, type, price, begin_date, end_date, payed) VALUES ",
    );
    for i in 0..school_ids.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let base = i * 6;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${}, ${}, ${})",
            base + 1,
            base + 2,
            base + 3,
            base + 4,
            base + 5,
            base + 6
        ));
    }

    let mut sql = sqlx::query(&query);
    for &school_id in school_ids {
        let mut rng = rand::thread_rng();
        let kind = *kinds.choose(&mut rng).unwrap_or(&"basic");
        sql = sql
            .bind(school_id)
            .bind(kind)
            .bind(rng.gen_range(100.0..2000.0_f64).round())
            .bind(today - Duration::days(rng.gen_range(0..365)))
            .bind(today + Duration::days(rng.gen_range(30..365)))
            .bind(rng.gen_range(0..=1));
    }
    sql.execute(db).await?;

    println!("   ✓ {} subscriptions", school_ids.len());

    Ok(school_ids.len())
}

/// Inserts `count` transfers between random schools. Needs at least two
/// schools and one student.
pub async fn seed_transfers(
    db: &PgPool,
    student_ids: &[i32],
    school_ids: &[i32],
    count: usize,
) -> anyhow::Result<usize> {
    if count == 0 || student_ids.is_empty() || school_ids.len() < 2 {
        return Ok(0);
    }

    let today = Utc::now().date_naive();

    let mut query = String::from(
        "INSERT INTO transfers (id_student, from_school, to_school, demand_date, transfer_date, validation_to) VALUES ",
    );
    for i in 0..count {
        if i > 0 {
            query.push_str(", ");
        }
        let base = i * 6;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${}, ${}, ${})",
            base + 1,
            base + 2,
            base + 3,
            base + 4,
            base + 5,
            base + 6
        ));
    }

    let mut sql = sqlx::query(&query);
    for _ in 0..count {
        let mut rng = rand::thread_rng();
        let student = *student_ids.choose(&mut rng).expect("non-empty");
        let from = *school_ids.choose(&mut rng).expect("non-empty");
        let to = *school_ids
            .iter()
            .filter(|&&s| s != from)
            .collect::<Vec<_>>()
            .choose(&mut rng)
            .expect("at least two schools");
        let demand = today - Duration::days(rng.gen_range(10..120));

        sql = sql
            .bind(student)
            .bind(from)
            .bind(to)
            .bind(demand)
            .bind(demand + Duration::days(rng.gen_range(5..30)))
            .bind(rng.gen_range(0..=1));
    }
    sql.execute(db).await?;

    println!("   ✓ {} transfers", count);

    Ok(count)
}
