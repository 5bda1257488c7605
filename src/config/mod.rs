pub mod models;

pub use models::{Config, Profile};

use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::{fs::File, io::Read, path::Path};
use validator::Validate;

impl Config {
    pub fn load(config_file: impl AsRef<Path>) -> Result<Self> {
        let config_file = config_file.as_ref();
        let mut file = File::open(config_file)
            .with_context(|| format!("Failed to open config file: {}", config_file.display()))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .with_context(|| format!("Failed to read config file: {}", config_file.display()))?;

        let config = Self::from_yaml(&contents)
            .with_context(|| format!("Invalid config file: {}", config_file.display()))?;
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents).context("Failed to parse config")?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        self.validate()?;

        let mut names = HashSet::new();
        for profile in &self.profiles {
            if !names.insert(profile.name.as_str()) {
                bail!("Duplicate profile name: {}", profile.name);
            }
        }
        Ok(())
    }

    /// Profiles to update: all of them, or only the named one.
    pub fn select(&self, name: Option<&str>) -> Result<Vec<&Profile>> {
        match name {
            None => Ok(self.profiles.iter().collect()),
            Some(name) => match self.profiles.iter().find(|p| p.name == name) {
                Some(profile) => Ok(vec![profile]),
                None => bail!("No profile named {}", name),
            },
        }
    }
}
