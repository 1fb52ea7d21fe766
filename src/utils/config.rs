use crate::{Error, Result};
use std::time::Duration;

/// Parameters of a simulation that do not change between generations.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Probability of a cell being alive in a randomly filled grid.
    pub fill_rate: f64,
    /// Seed of the engine's random stream (if `None`, then random seed is generated).
    pub seed: Option<u64>,
    /// Interval between two ticks of the driver.
    pub tick_interval: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fill_rate: Self::DEFAULT_FILL_RATE,
            seed: None,
            tick_interval: Self::DEFAULT_TICK_INTERVAL,
        }
    }
}

impl EngineConfig {
    pub const DEFAULT_FILL_RATE: f64 = 0.3;
    pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

    pub const ENV_SEED: &'static str = "LIFE_SEED";
    pub const ENV_FILL_RATE: &'static str = "LIFE_FILL_RATE";
    pub const ENV_TICK_MS: &'static str = "LIFE_TICK_MS";

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_fill_rate(mut self, fill_rate: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&fill_rate) {
            return Err(Error::InvalidFillRate(fill_rate));
        }
        self.fill_rate = fill_rate;
        Ok(self)
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Defaults overridden by `LIFE_SEED`, `LIFE_FILL_RATE` and `LIFE_TICK_MS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EngineConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T> {
            let parsed = value.trim().parse().ok();
            parsed.ok_or(Error::InvalidConfig { key, value })
        }

        let mut config = Self::default();
        if let Some(value) = lookup(Self::ENV_SEED) {
            config = config.with_seed(parse(Self::ENV_SEED, value)?);
        }
        if let Some(value) = lookup(Self::ENV_FILL_RATE) {
            config = config.with_fill_rate(parse(Self::ENV_FILL_RATE, value)?)?;
        }
        if let Some(value) = lookup(Self::ENV_TICK_MS) {
            let ms = parse(Self::ENV_TICK_MS, value)?;
            config = config.with_tick_interval(Duration::from_millis(ms));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_source_behaviour() {
        let config = EngineConfig::default();
        assert_eq!(config.fill_rate, 0.3);
        assert_eq!(config.seed, None);
        assert_eq!(config.tick_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_overrides() {
        let config = EngineConfig::from_lookup(lookup_in(&[
            ("LIFE_SEED", "42"),
            ("LIFE_FILL_RATE", "0.5"),
            ("LIFE_TICK_MS", " 250 "),
        ]))
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.fill_rate, 0.5);
        assert_eq!(config.tick_interval, Duration::from_millis(250));
    }

    #[test]
    fn test_malformed_overrides() {
        assert_eq!(
            EngineConfig::from_lookup(lookup_in(&[("LIFE_SEED", "abc")])),
            Err(Error::InvalidConfig {
                key: "LIFE_SEED",
                value: "abc".to_string()
            })
        );
        assert_eq!(
            EngineConfig::from_lookup(lookup_in(&[("LIFE_FILL_RATE", "1.5")])),
            Err(Error::InvalidFillRate(1.5))
        );
        assert!(EngineConfig::default().with_fill_rate(f64::NAN).is_err());
    }
}
