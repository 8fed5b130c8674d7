use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::model::{LoginRequest, LoginResponse, LogoutResponse};
use crate::modules::observations::model::{Observation, ObservationDto};
use crate::modules::profiles::model::{CreateProfileDto, Profile, Role, UpdateProfileDto};
use crate::modules::schools::model::School;
use crate::modules::students::model::{Student, StudentDto};
use crate::modules::subscriptions::model::Subscription;
use crate::modules::transfers::model::{CreateTransferDto, Transfer};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::logout_user,
        crate::modules::profiles::controller::get_profiles,
        crate::modules::profiles::controller::create_profile,
        crate::modules::profiles::controller::get_profile,
        crate::modules::profiles::controller::update_profile,
        crate::modules::profiles::controller::delete_profile,
        crate::modules::schools::controller::get_all_schools,
        crate::modules::schools::controller::get_school,
        crate::modules::schools::controller::change_mode,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::observations::controller::get_observations,
        crate::modules::observations::controller::create_observation,
        crate::modules::observations::controller::get_observation,
        crate::modules::observations::controller::update_observation,
        crate::modules::observations::controller::delete_observation,
        crate::modules::subscriptions::controller::get_subscription,
        crate::modules::transfers::controller::get_transfers,
        crate::modules::transfers::controller::create_transfer,
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            LogoutResponse,
            Profile,
            Role,
            CreateProfileDto,
            UpdateProfileDto,
            School,
            Student,
            StudentDto,
            Observation,
            ObservationDto,
            Subscription,
            Transfer,
            CreateTransferDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Token issue and revocation"),
        (name = "Profiles", description = "Staff account management"),
        (name = "Schools", description = "School listing and mode toggle"),
        (name = "Students", description = "Student management per school"),
        (name = "Observations", description = "Behavioral notes per student"),
        (name = "Subscriptions", description = "School billing records"),
        (name = "Transfers", description = "Student transfers between schools")
    ),
    info(
        title = "Satchel API",
        version = "0.1.0",
        description = "School administration REST API: schools, students, observations and enrollment paperwork.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token",
                SecurityScheme::Http(
                    HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build(),
                ),
            )
        }
    }
}
