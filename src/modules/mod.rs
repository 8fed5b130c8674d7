pub mod auth;
pub mod observations;
pub mod profiles;
pub mod schools;
pub mod students;
pub mod subscriptions;
pub mod transfers;

pub use self::profiles::model::{Profile, Role};
pub use self::schools::model::School;
