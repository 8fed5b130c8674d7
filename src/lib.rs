//! # Satchel API
//!
//! A REST backend for school administration built with Axum and PostgreSQL:
//! schools, students, behavioral observations, billing subscriptions,
//! inter-school transfers and staff profiles with opaque-token
//! authentication.
//!
//! ## Architecture
//!
//! The codebase follows a modular, NestJS-inspired layout:
//!
//! ```text
//! src/
//! ├── cli/              # Admin CLI (create-school, create-admin, seeding)
//! ├── config/           # Configuration (database, CORS)
//! ├── middleware/       # The AuthUser bearer-token extractor
//! ├── modules/          # Feature modules
//! │   ├── auth/         # Login/logout and the token store
//! │   ├── profiles/     # Staff accounts and roles
//! │   ├── schools/      # School listing and the mode toggle
//! │   ├── students/     # Students per school
//! │   ├── observations/ # Behavioral notes, mode-gated details
//! │   ├── subscriptions/# Billing records per school
//! │   └── transfers/    # Student moves between schools
//! └── utils/            # Errors, password hashing, token generation
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: business logic and queries
//! - `model.rs`: database structs and DTOs
//! - `router.rs`: Axum router configuration
//!
//! ## Authentication and roles
//!
//! Logging in issues an opaque 40-hex-char token stored in the `auth_tokens`
//! table, one per profile; it stays valid until logout. Profiles carry one of
//! three roles (`admin`, `director`, `user`). Only admins and directors may
//! toggle a school's `mode` flag, and while a school's mode is set its
//! `user`-role profiles cannot read or write observation details.
//!
//! Schools themselves are read-only over the API; they are created with the
//! `satchel-cli` binary, which also seeds development data.
//!
//! ## API documentation
//!
//! With the server running, Scalar is served at `/scalar` and the raw
//! OpenAPI document at `/api-docs/openapi.json`.

pub mod cli;
pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
