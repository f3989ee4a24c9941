//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod dashboard_repo;
pub mod education_repo;
pub mod experience_repo;
pub mod picture_repo;
pub mod profile_repo;
pub mod project_repo;
pub mod reference_repo;
pub mod skill_repo;
pub mod user_repo;

pub use dashboard_repo::DashboardRepo;
pub use education_repo::EducationRepo;
pub use experience_repo::ExperienceRepo;
pub use picture_repo::PictureRepo;
pub use profile_repo::ProfileRepo;
pub use project_repo::ProjectRepo;
pub use reference_repo::ReferenceRepo;
pub use skill_repo::SkillRepo;
pub use user_repo::UserRepo;
