//! Configuration: schema, pipeline profiles, and multi-source loading.

pub mod loader;
pub mod profile;
pub mod schema;

pub use loader::load_config;
pub use profile::{all_profiles, get_profile, ProfileDefinition};
pub use schema::{BuildConfig, ProfileName};
