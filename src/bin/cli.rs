use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use satchel::cli::seeder::{ProfilesPerSchool, SeedConfig, clear_seeded_data, seed_database};
use satchel::cli::{create_admin, create_school};

#[derive(Parser)]
#[command(name = "satchel-cli")]
#[command(about = "Satchel CLI - Administrative tools for Satchel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new school (schools cannot be created over the API)
    CreateSchool {
        /// Name of the school
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Street address
        #[arg(short = 'a', long)]
        address: Option<String>,

        /// Contact email
        #[arg(short = 'e', long)]
        email: Option<String>,
    },
    /// Create an admin profile for an existing school
    CreateAdmin {
        /// First name of the admin
        #[arg(short = 'f', long)]
        firstname: Option<String>,

        /// Last name of the admin
        #[arg(short = 'l', long)]
        lastname: Option<String>,

        /// Email address (used as the login username)
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Id of the school the admin belongs to
        #[arg(short = 's', long)]
        school_id: Option<i32>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake schools, profiles and students
    Seed {
        /// Number of schools to create
        #[arg(short = 's', long, default_value = "5")]
        schools: usize,

        /// Number of directors per school
        #[arg(long, default_value = "1")]
        directors: usize,

        /// Number of user-role profiles per school
        #[arg(long, default_value = "3")]
        users: usize,

        /// Number of students per school
        #[arg(long, default_value = "20")]
        students: usize,

        /// Number of observations per student
        #[arg(long, default_value = "2")]
        observations: usize,

        /// Number of transfers to create
        #[arg(long, default_value = "10")]
        transfers: usize,
    },
    /// Delete all data (profiles first, then schools with their cascades)
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateSchool {
            name,
            address,
            email,
        } => handle_create_school(&pool, name, address, email).await,
        Commands::CreateAdmin {
            firstname,
            lastname,
            email,
            school_id,
            password,
        } => handle_create_admin(&pool, firstname, lastname, email, school_id, password).await,
        Commands::Seed {
            schools,
            directors,
            users,
            students,
            observations,
            transfers,
        } => {
            let config = SeedConfig {
                num_schools: schools,
                profiles_per_school: ProfilesPerSchool { directors, users },
                students_per_school: students,
                observations_per_student: observations,
                num_transfers: transfers,
            };
            if let Err(e) = seed_database(&pool, config).await {
                eprintln!("\n❌ Error seeding database: {}", e);
                std::process::exit(1);
            }
        }
        Commands::ClearSeed => {
            if let Err(e) = clear_seeded_data(&pool).await {
                eprintln!("\n❌ Error clearing data: {}", e);
                std::process::exit(1);
            }
        }
    }
}

async fn handle_create_school(
    pool: &sqlx::PgPool,
    name: Option<String>,
    address: Option<String>,
    email: Option<String>,
) {
    let name = name.unwrap_or_else(|| {
        Input::new()
            .with_prompt("School name")
            .interact_text()
            .expect("Failed to read school name")
    });

    match create_school(pool, &name, address.as_deref(), email.as_deref()).await {
        Ok(id) => {
            println!("\n✅ School created successfully!");
            println!("   Id: {}", id);
            println!("   Name: {}", name);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating school: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_create_admin(
    pool: &sqlx::PgPool,
    firstname: Option<String>,
    lastname: Option<String>,
    email: Option<String>,
    school_id: Option<i32>,
    password: Option<String>,
) {
    let firstname = firstname.unwrap_or_else(|| {
        Input::new()
            .with_prompt("First name")
            .interact_text()
            .expect("Failed to read first name")
    });

    let lastname = lastname.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Last name")
            .interact_text()
            .expect("Failed to read last name")
    });

    let email = email.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Email address")
            .interact_text()
            .expect("Failed to read email")
    });

    let school_id = school_id.unwrap_or_else(|| {
        Input::new()
            .with_prompt("School id")
            .interact_text()
            .expect("Failed to read school id")
    });

    let password = password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .expect("Failed to read password")
    });

    match create_admin(pool, &firstname, &lastname, &email, school_id, &password).await {
        Ok(id) => {
            println!("\n✅ Admin created successfully!");
            println!("   Id: {}", id);
            println!("   Email: {}", email);
            println!("   Name: {} {}", firstname, lastname);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating admin: {}", e);
            std::process::exit(1);
        }
    }
}
