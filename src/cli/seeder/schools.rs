use fake::Fake;
use fake::faker::address::en::{BuildingNumber, StreetName};
use fake::faker::company::en::CompanyName;
use rand::Rng;
use sqlx::PgPool;

use super::models::SchoolSeed;

fn generate_school() -> SchoolSeed {
    let name: String = format!("{} School", CompanyName().fake::<String>());
    let slug = name
        .to_lowercase()
        .replace(|c: char| !c.is_ascii_alphanumeric(), "");

    SchoolSeed {
        address: format!(
            "{} {}",
            BuildingNumber().fake::<String>(),
            StreetName().fake::<String>()
        ),
        nbr_students: rand::thread_rng().gen_range(50..500),
        email: format!("contact@{}.example.com", slug),
        name,
    }
}

/// Batch-inserts `count` schools, returning their ids.
pub async fn seed_schools(db: &PgPool, count: usize) -> anyhow::Result<Vec<i32>> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let seeds: Vec<SchoolSeed> = (0..count).map(|_| generate_school()).collect();

    let mut query =
        String::from("INSERT INTO schools (name, address, nbr_students, email) VALUES ");
    for i in 0..seeds.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let base = i * 4;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${})",
            base + 1,
            base + 2,
            base + 3,
            base + 4
        ));
    }
    query.push_str(" RETURNING id");

    let mut sql = sqlx::query_scalar::<_, i32>(&query);
    for seed in &seeds {
        sql = sql
            .bind(&seed.name)
            .bind(&seed.address)
            .bind(seed.nbr_students)
            .bind(&seed.email);
    }

    let ids = sql.fetch_all(db).await?;
    println!("   ✓ {} schools", ids.len());

    Ok(ids)
}
