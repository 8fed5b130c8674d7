use sqlx::PgPool;
use tracing::{debug, error, info, instrument};

use crate::utils::errors::AppError;

use super::model::{Student, StudentDto};

const STUDENT_COLUMNS: &str = "id, name, firstname, age, school_id, class";

fn map_write_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_foreign_key_violation()
    {
        return AppError::field("school_id", "School does not exist");
    }
    error!(error = %e, "Database error writing student");
    AppError::from(e)
}

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db), fields(school.id = %school_id, db.table = "students"))]
    pub async fn get_students_by_school(
        db: &PgPool,
        school_id: i32,
    ) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE school_id = $1 ORDER BY id"
        ))
        .bind(school_id)
        .fetch_all(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching students");
            AppError::from(e)
        })?;

        Ok(students)
    }

    #[instrument(skip(db, dto), fields(school.id = %dto.school_id, db.table = "students"))]
    pub async fn create_student(db: &PgPool, dto: StudentDto) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(&format!(
            "INSERT INTO students (name, firstname, age, school_id, class)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.firstname)
        .bind(dto.age)
        .bind(dto.school_id)
        .bind(&dto.class)
        .fetch_one(db)
        .await
        .map_err(map_write_error)?;

        info!(student.id = %student.id, "Student created");

        Ok(student)
    }

    #[instrument(skip(db), fields(student.id = %id, db.table = "students"))]
    pub async fn get_student_by_id(db: &PgPool, id: i32) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching student");
            AppError::from(e)
        })?
        .ok_or_else(|| {
            debug!(student.id = %id, "Student not found");
            AppError::not_found(anyhow::anyhow!("Student not found"))
        })
    }

    #[instrument(skip(db, dto), fields(student.id = %id, db.table = "students"))]
    pub async fn update_student(
        db: &PgPool,
        id: i32,
        dto: StudentDto,
    ) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(&format!(
            "UPDATE students
             SET name = $1, firstname = $2, age = $3, school_id = $4, class = $5
             WHERE id = $6
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.firstname)
        .bind(dto.age)
        .bind(dto.school_id)
        .bind(&dto.class)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(map_write_error)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        info!(student.id = %student.id, "Student updated");

        Ok(student)
    }

    #[instrument(skip(db), fields(student.id = %id, db.table = "students"))]
    pub async fn delete_student(db: &PgPool, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error deleting student");
                AppError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
        }

        info!(student.id = %id, "Student deleted");

        Ok(())
    }
}
