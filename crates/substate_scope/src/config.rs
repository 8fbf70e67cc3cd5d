//! Configuration schema and registry.
//!
//! The public configuration surface is a map [`Value`] checked against a
//! schema-as-data description: every recognized option declares its name,
//! kind, and default. Validation is a thin boundary check — it rejects
//! non-map input, unknown options, and wrong-kinded values, reporting every
//! field failure in one aggregated error rather than stopping at the first.

use std::cell::RefCell;
use std::sync::Arc;

use substate_foundation::{ConfigFieldError, Error, Kind, Result, SMap, Value};

/// Option name for the cleanup mode flag.
///
/// `false` (the default) means automatic cleanup through the lifecycle
/// hook; `true` means the caller releases the subscription explicitly.
pub const MANUAL_UNSUB: &str = "manual-unsub";

/// Schema for one recognized configuration option.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionSchema {
    /// Option name as it appears in the config map.
    pub name: &'static str,
    /// Required kind of the option value.
    pub kind: Kind,
    /// Value used when the option is not set.
    pub default: Value,
}

impl OptionSchema {
    /// Creates an option schema.
    #[must_use]
    pub fn new(name: &'static str, kind: Kind, default: Value) -> Self {
        Self {
            name,
            kind,
            default,
        }
    }
}

/// Schema for the whole configuration surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigSchema {
    options: Vec<OptionSchema>,
}

impl ConfigSchema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a recognized option.
    #[must_use]
    pub fn with_option(mut self, option: OptionSchema) -> Self {
        self.options.push(option);
        self
    }

    /// Returns the option schema by name.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&OptionSchema> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Returns the map of every option's default value.
    #[must_use]
    pub fn defaults(&self) -> SMap<Arc<str>, Value> {
        self.options
            .iter()
            .map(|o| (Arc::from(o.name), o.default.clone()))
            .collect()
    }

    /// Validates a configuration value against this schema.
    ///
    /// Returns the validated entries on success.
    ///
    /// # Errors
    ///
    /// `ConfigType` when `config` is not a map (naming the received kind);
    /// `InvalidConfig` aggregating every unknown-option and wrong-kind
    /// failure, ordered by option name.
    pub fn validate(&self, config: &Value) -> Result<SMap<Arc<str>, Value>> {
        let Some(map) = config.as_map() else {
            return Err(Error::config_type(config.kind()));
        };

        let mut errors = Vec::new();
        for (key, value) in map.iter() {
            match self.option(key) {
                None => errors.push(ConfigFieldError::unknown_option(&**key)),
                Some(option) if value.kind() != option.kind => errors.push(
                    ConfigFieldError::wrong_kind(&**key, option.kind, value.kind()),
                ),
                Some(_) => {}
            }
        }

        if errors.is_empty() {
            Ok(map.clone())
        } else {
            errors.sort_by(|a, b| a.option.cmp(&b.option));
            Err(Error::invalid_config(errors))
        }
    }
}

/// The schema of the currently recognized configuration surface.
#[must_use]
pub fn config_schema() -> ConfigSchema {
    ConfigSchema::new().with_option(OptionSchema::new(
        MANUAL_UNSUB,
        Kind::Bool,
        Value::Bool(false),
    ))
}

/// The typed, fully merged configuration view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Whether subscription release is the caller's job.
    pub manual_unsub: bool,
}

impl Config {
    fn from_options(options: &SMap<Arc<str>, Value>) -> Self {
        Self {
            manual_unsub: options
                .get(&Arc::from(MANUAL_UNSUB))
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }
}

/// Holds validated process-wide configuration overrides on top of the
/// schema defaults.
///
/// Mutable only through a validated [`set`](ConfigRegistry::set),
/// resettable to defaults. Injected rather than ambient: each test can
/// construct its own registry.
pub struct ConfigRegistry {
    schema: ConfigSchema,
    overrides: RefCell<SMap<Arc<str>, Value>>,
}

impl ConfigRegistry {
    /// Creates a registry over the recognized configuration schema.
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: config_schema(),
            overrides: RefCell::new(SMap::new()),
        }
    }

    /// Returns the registry's schema.
    #[must_use]
    pub fn schema(&self) -> &ConfigSchema {
        &self.schema
    }

    /// Validates and installs a process-wide override set.
    ///
    /// # Errors
    ///
    /// Propagates every validation failure; the previous overrides stay in
    /// place when validation fails.
    pub fn set(&self, config: &Value) -> Result<()> {
        let validated = self.schema.validate(config)?;
        *self.overrides.borrow_mut() = validated;
        Ok(())
    }

    /// Drops all overrides, returning to schema defaults.
    pub fn reset(&self) {
        *self.overrides.borrow_mut() = SMap::new();
    }

    /// The current configuration: overrides merged over defaults.
    #[must_use]
    pub fn get(&self) -> Config {
        let merged = self.schema.defaults().union(&self.overrides.borrow());
        Config::from_options(&merged)
    }

    /// Validates `local` and returns it merged over the current
    /// configuration (defaults, then registry overrides, then `local`).
    ///
    /// # Errors
    ///
    /// Propagates every validation failure of `local`.
    pub fn resolve(&self, local: &Value) -> Result<Config> {
        let validated = self.schema.validate(local)?;
        let merged = self
            .schema
            .defaults()
            .union(&self.overrides.borrow())
            .union(&validated);
        Ok(Config::from_options(&merged))
    }
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}
