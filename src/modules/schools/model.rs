use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A school.
///
/// Schools are read-only over the API; they enter the system through the
/// admin CLI. The `mode` flag locks `user`-role profiles out of observation
/// details while set.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct School {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub nbr_students: Option<i32>,
    pub email: Option<String>,
    pub mode: bool,
}
