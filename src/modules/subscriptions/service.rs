use sqlx::PgPool;
use tracing::{debug, error, instrument};

use crate::utils::errors::AppError;

use super::model::Subscription;

pub struct SubscriptionService;

impl SubscriptionService {
    /// Subscription lookup by school. A school without one is a 400, not a
    /// 404; clients treat the subscription as a required attribute of the
    /// school and a missing row as a data problem.
    #[instrument(skip(db), fields(school.id = %school_id, db.table = "subscriptions"))]
    pub async fn get_subscription_by_school(
        db: &PgPool,
        school_id: i32,
    ) -> Result<Subscription, AppError> {
        sqlx::query_as::<_, Subscription>(
            "SELECT id, id_school, type, price, begin_date, end_date, payed
             FROM subscriptions WHERE id_school = $1",
        )
        .bind(school_id)
        .fetch_optional(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching subscription");
            AppError::from(e)
        })?
        .ok_or_else(|| {
            debug!(school.id = %school_id, "No subscription for school");
            AppError::bad_request(anyhow::anyhow!("No subscription found for this school"))
        })
    }
}
