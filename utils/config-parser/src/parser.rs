use {
    crate::error::Error,
    config::{Config, Environment, File},
    serde::de::DeserializeOwned,
    std::path::Path,
};

/// Loads a TOML config file and layers environment variables on top of it.
///
/// Nested keys are separated by `__` in variable names. With a prefix of
/// `AAVE`, the key `addresses.weth` is overridden by `AAVE_ADDRESSES__WETH`.
#[derive(Default)]
pub struct ConfigParser {
    env_prefix: Option<String>,
}

impl ConfigParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_env_prefix<T>(mut self, prefix: T) -> Self
    where
        T: Into<String>,
    {
        self.env_prefix = Some(prefix.into());
        self
    }

    pub fn parse<D, P>(&self, path: P) -> Result<D, Error>
    where
        D: DeserializeOwned,
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let env_override = match &self.env_prefix {
            Some(prefix) => Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator("__"),
            None => Environment::default().separator("__"),
        };

        let config = Config::builder()
            .add_source(File::from(path))
            .add_source(env_override)
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Parses the file at `path`, overridden by unprefixed environment variables.
pub fn parse_config<D, P>(path: P) -> Result<D, Error>
where
    D: DeserializeOwned,
    P: AsRef<Path>,
{
    ConfigParser::new().parse(path)
}

// ----------------------------------- tests -----------------------------------
