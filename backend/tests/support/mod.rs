#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use wave_rose::config::DashboardConfig;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the previous values on drop (including unwind) and serializes
/// access, since tests run in parallel and the environment is process-wide.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// A small dump in the published column layout, including columns the
/// dashboard ignores, a sentinel, and a site outside the allow-list.
pub const SAMPLE_CSV: &str = "\
Site,SiteNumber,Seconds,DateTime,Latitude,Longitude,Hsig,Hmax,Tp,Tz,SST,Direction
SiteA,1,1713052800,2024-04-14T01:00:00,-27.49,153.63,3.7,6.1,11.2,6.4,24.1,92
SiteA,1,1713049200,2024-04-14T00:00:00,-27.49,153.63,1.2,2.0,9.8,5.1,24.2,358
SiteA,1,1713051000,2024-04-14T00:30:00,-27.49,153.63,-99.9,-99.9,-99.9,-99.9,24.2,-99.9
SiteB,2,1713049200,2024-04-14T00:00:00,-26.84,153.16,2.0,3.3,8.5,5.0,23.9,10
";

/// Configuration allowing `SiteA` and `SiteC` (which has no rows).
pub fn test_config() -> DashboardConfig {
    let mut config = DashboardConfig::default();
    config.sites.allowed = vec!["SiteA".to_string(), "SiteC".to_string()];
    config.sites.default = "SiteA".to_string();
    config
}
