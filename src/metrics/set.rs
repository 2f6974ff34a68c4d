//! Labeled gauge registry.

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;
use prometheus::core::Collector;
use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// A family with this name already exists.
    #[error("metric family '{0}' is already declared")]
    DuplicateFamily(String),

    /// No family with this name was declared.
    #[error("metric family '{0}' is not declared")]
    UnknownFamily(String),

    /// Label value count differs from the declared label names.
    #[error("metric family '{family}' expects {expected} label values, got {got}")]
    InvalidLabelCardinality {
        /// Family name.
        family: String,
        /// Declared label count.
        expected: usize,
        /// Values given.
        got: usize,
    },

    /// Error from the prometheus registry.
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

struct Family {
    labels: Vec<String>,
    gauges: GaugeVec,
}

impl Family {
    fn check(&self, name: &str, values: &[&str]) -> Result<(), MetricsError> {
        if values.len() != self.labels.len() {
            return Err(MetricsError::InvalidLabelCardinality {
                family: name.to_string(),
                expected: self.labels.len(),
                got: values.len(),
            });
        }
        Ok(())
    }
}

/// A fixed set of named gauge families, each keyed by an ordered list of
/// label names.
///
/// Writes are last-write-wins per label tuple. Series are never dropped
/// unless [`MetricSet::remove`] is called, so a tuple that stops being
/// written keeps its last value in the exported state.
///
/// All methods take `&self`: each gauge is an atomic, and the family map
/// sits behind a read-write lock that is only written by [`declare`].
///
/// [`declare`]: MetricSet::declare
pub struct MetricSet {
    registry: Registry,
    families: RwLock<HashMap<String, Family>>,
}

impl Default for MetricSet {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            families: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a gauge family. Label names are fixed from here on.
    pub fn declare(&self, name: &str, help: &str, label_names: &[&str]) -> Result<(), MetricsError> {
        let mut families = self.families.write();
        if families.contains_key(name) {
            return Err(MetricsError::DuplicateFamily(name.to_string()));
        }

        let gauges = GaugeVec::new(Opts::new(name, help), label_names)?;
        self.registry.register(Box::new(gauges.clone()))?;

        families.insert(
            name.to_string(),
            Family {
                labels: label_names.iter().map(|l| l.to_string()).collect(),
                gauges,
            },
        );
        Ok(())
    }

    /// Sets the value of one series, creating it on first use.
    ///
    /// Fails with [`MetricsError::InvalidLabelCardinality`] when the number
    /// of values differs from the declared label names; nothing is written
    /// in that case.
    pub fn set(&self, name: &str, label_values: &[&str], value: f64) -> Result<(), MetricsError> {
        let families = self.families.read();
        let family = lookup(&families, name)?;
        family.check(name, label_values)?;
        family
            .gauges
            .get_metric_with_label_values(label_values)?
            .set(value);
        Ok(())
    }

    /// Ensures a series exists without changing its value (zero when new).
    pub fn touch(&self, name: &str, label_values: &[&str]) -> Result<(), MetricsError> {
        let families = self.families.read();
        let family = lookup(&families, name)?;
        family.check(name, label_values)?;
        family.gauges.get_metric_with_label_values(label_values)?;
        Ok(())
    }

    /// Removes one series. Returns whether it existed.
    pub fn remove(&self, name: &str, label_values: &[&str]) -> Result<bool, MetricsError> {
        let families = self.families.read();
        let family = lookup(&families, name)?;
        family.check(name, label_values)?;
        Ok(family.gauges.remove_label_values(label_values).is_ok())
    }

    /// Reads the current value of one series without creating it.
    pub fn get(&self, name: &str, label_values: &[&str]) -> Option<f64> {
        let families = self.families.read();
        let family = families.get(name)?;
        if label_values.len() != family.labels.len() {
            return None;
        }

        let wanted: BTreeMap<&str, &str> = family
            .labels
            .iter()
            .map(String::as_str)
            .zip(label_values.iter().copied())
            .collect();

        let collected = family.gauges.collect();
        collected
            .iter()
            .flat_map(|mf| mf.get_metric())
            .find(|m| {
                let pairs = m.get_label();
                pairs.len() == wanted.len()
                    && pairs
                        .iter()
                        .all(|p| wanted.get(p.get_name()) == Some(&p.get_value()))
            })
            .map(|m| m.get_gauge().get_value())
    }

    /// Number of series currently held by a family (zero if undeclared).
    pub fn series_count(&self, name: &str) -> usize {
        let families = self.families.read();
        let Some(family) = families.get(name) else {
            return 0;
        };
        let collected = family.gauges.collect();
        collected.iter().map(|mf| mf.get_metric().len()).sum()
    }

    /// Declared label names of a family.
    pub fn label_names(&self, name: &str) -> Option<Vec<String>> {
        self.families.read().get(name).map(|f| f.labels.clone())
    }

    /// Names of all declared families, sorted.
    pub fn family_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.families.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Encodes all series in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

fn lookup<'a>(families: &'a HashMap<String, Family>, name: &str) -> Result<&'a Family, MetricsError> {
    families
        .get(name)
        .ok_or_else(|| MetricsError::UnknownFamily(name.to_string()))
}
