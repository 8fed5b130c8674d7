/// How much data `seed` generates.
#[derive(Clone)]
pub struct SeedConfig {
    pub num_schools: usize,
    pub profiles_per_school: ProfilesPerSchool,
    pub students_per_school: usize,
    pub observations_per_student: usize,
    pub num_transfers: usize,
}

impl SeedConfig {
    pub fn new(num_schools: usize) -> Self {
        Self {
            num_schools,
            ..Self::default()
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            num_schools: 5,
            profiles_per_school: ProfilesPerSchool::default(),
            students_per_school: 20,
            observations_per_student: 2,
            num_transfers: 10,
        }
    }
}

#[derive(Clone)]
pub struct ProfilesPerSchool {
    pub directors: usize,
    pub users: usize,
}

impl Default for ProfilesPerSchool {
    fn default() -> Self {
        Self {
            directors: 1,
            users: 3,
        }
    }
}

pub struct SchoolSeed {
    pub name: String,
    pub address: String,
    pub nbr_students: i32,
    pub email: String,
}

pub struct ProfileSeed {
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub function: &'static str,
    pub school: i32,
}

pub struct StudentSeed {
    pub name: String,
    pub firstname: String,
    pub age: i32,
    pub school_id: i32,
    pub class: String,
}
