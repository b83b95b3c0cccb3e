//! Environment sources and the per-call snapshot

use std::collections::{BTreeMap, HashMap};
use std::env;

/// Name to value lookup captured from an [`EnvSource`].
///
/// A binder captures a fresh snapshot on every call and drops it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Build a snapshot from raw `NAME=VALUE` records.
    ///
    /// Each record is split on its first `=` only, so values may contain `=`.
    /// A record without `=` is taken as a name with an empty value.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        records
            .into_iter()
            .map(|record| {
                let record = record.as_ref();
                match record.split_once('=') {
                    Some((name, value)) => (name.to_string(), value.to_string()),
                    None => (record.to_string(), String::new()),
                }
            })
            .collect()
    }

    /// Value of `name`, if it was captured.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Number of captured variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variable was captured.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Read-only access to a table of environment variables.
///
/// The binder only ever asks for a full snapshot; implement this to feed it
/// something other than the process environment.
pub trait EnvSource {
    /// Take a snapshot of every variable currently visible.
    fn capture(&self) -> EnvSnapshot;
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn capture(&self) -> EnvSnapshot {
        (**self).capture()
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn capture(&self) -> EnvSnapshot {
        env::vars_os()
            .filter_map(|(name, value)| match (name.into_string(), value.into_string()) {
                (Ok(name), Ok(value)) => Some((name, value)),
                (name, _) => {
                    let name = name.unwrap_or_else(|raw| raw.to_string_lossy().into_owned());
                    tracing::debug!(%name, "skipping environment entry that is not valid unicode");
                    None
                }
            })
            .collect()
    }
}

impl EnvSource for HashMap<String, String> {
    fn capture(&self) -> EnvSnapshot {
        self.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn capture(&self) -> EnvSnapshot {
        self.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }
}

/// A fixed list of raw `NAME=VALUE` records, as found in `/proc/<pid>/environ`
/// or a container spec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvRecords(Vec<String>);

impl EnvRecords {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one raw `NAME=VALUE` record.
    pub fn push(&mut self, record: impl Into<String>) -> &mut Self {
        self.0.push(record.into());
        self
    }
}

impl<S: Into<String>> FromIterator<S> for EnvRecords {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl EnvSource for EnvRecords {
    fn capture(&self) -> EnvSnapshot {
        EnvSnapshot::from_records(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_split_on_first_equals_only() {
        let snapshot = EnvSnapshot::from_records(["KEY=a=b=c"]);
        assert_eq!(snapshot.get("KEY"), Some("a=b=c"));
    }

    #[test]
    fn test_record_edge_cases() {
        let snapshot = EnvSnapshot::from_records(["EMPTY=", "BARE", "=leading"]);
        assert_eq!(snapshot.get("EMPTY"), Some(""));
        assert_eq!(snapshot.get("BARE"), Some(""));
        assert_eq!(snapshot.get(""), Some("leading"));
        assert_eq!(snapshot.len(), 3);
    }

    #[test]
    fn test_later_record_wins() {
        let snapshot = EnvSnapshot::from_records(["A=1", "A=2"]);
        assert_eq!(snapshot.get("A"), Some("2"));
    }

    #[test]
    fn test_env_records_source() {
        let records: EnvRecords = ["DSN=postgres://u:p@h/db?sslmode=require"]
            .into_iter()
            .collect();
        let snapshot = records.capture();
        assert_eq!(
            snapshot.get("DSN"),
            Some("postgres://u:p@h/db?sslmode=require")
        );
    }

    #[test]
    fn test_map_sources() {
        let mut map = HashMap::new();
        map.insert("PORT".to_string(), "9090".to_string());
        assert_eq!(map.capture().get("PORT"), Some("9090"));

        let mut map = BTreeMap::new();
        map.insert("HOST".to_string(), "example.com".to_string());
        assert_eq!((&map).capture().get("HOST"), Some("example.com"));
        assert_eq!(map.capture().get("PORT"), None);
    }

    #[test]
    #[serial]
    fn test_process_env_is_captured_fresh() {
        env::set_var("ENVBIND_SOURCE_TEST", "x=y");
        let first = ProcessEnv.capture();
        assert_eq!(first.get("ENVBIND_SOURCE_TEST"), Some("x=y"));

        env::remove_var("ENVBIND_SOURCE_TEST");
        let second = ProcessEnv.capture();
        assert_eq!(second.get("ENVBIND_SOURCE_TEST"), None);
        assert_eq!(first.get("ENVBIND_SOURCE_TEST"), Some("x=y"));
    }
}
