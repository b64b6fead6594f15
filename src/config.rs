//! Server configuration, layered on top of Rocket's own figment.
//!
//! Merge order (later overrides earlier):
//! 1. Rocket's compiled defaults
//! 2. Crate defaults (`port = 3000`, `database = "todoApplication.db"`)
//! 3. `Rocket.toml`, or the file named by `ROCKET_CONFIG`
//! 4. `ROCKET_*` environment variables

use rocket::figment::providers::{Env, Format, Serialized, Toml};
use rocket::figment::{Figment, Profile};
use serde::{Deserialize, Serialize};

use std::path::PathBuf;

use crate::internal_error::InternalResult;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE: &str = "todoApplication.db";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Path of the SQLite file holding the `todo` table.
    pub database: PathBuf,
    pub port: u16,
}

impl Default for TodoConfig {
    fn default() -> Self {
        TodoConfig {
            database: PathBuf::from(DEFAULT_DATABASE),
            port: DEFAULT_PORT,
        }
    }
}

impl TodoConfig {
    pub fn from_figment(figment: &Figment) -> InternalResult<TodoConfig> {
        Ok(figment.extract::<TodoConfig>()?)
    }
}

pub fn figment() -> Figment {
    Figment::from(rocket::Config::default())
        .merge(Serialized::defaults(TodoConfig::default()))
        .merge(Toml::file(Env::var_or("ROCKET_CONFIG", "Rocket.toml")).nested())
        .merge(Env::prefixed("ROCKET_").ignore(&["PROFILE"]).global())
        .select(Profile::from_env_or("ROCKET_PROFILE", rocket::Config::DEFAULT_PROFILE))
}
