//! Plugin application host.
//!
//! Provides a [`PluginHost`] capable of registering, initializing, and
//! applying [`Plugin`]s to a [`Project`]. Emits structured logs at each
//! lifecycle stage to aid debugging and observability.

use std::collections::HashSet;
use std::panic::{catch_unwind, AssertUnwindSafe};

use anyhow::bail;
use tracing::{error, info};

use crate::{HostConfig, Plugin, Project};

/// Coordinates the lifetime of registered plugins.
pub struct PluginHost {
    disabled: HashSet<String>,
    plugins: Vec<(String, Box<dyn Plugin + Send + Sync>)>,
}

impl PluginHost {
    /// Creates a host honouring the platform configuration.
    pub fn new() -> Self {
        Self::with_config(&HostConfig::load())
    }

    /// Creates a host with an explicit configuration.
    pub fn with_config(config: &HostConfig) -> Self {
        Self {
            disabled: config.disabled_plugins(),
            plugins: Vec::new(),
        }
    }

    /// Registers and initialises a plugin under `name`.
    ///
    /// Plugins disabled by configuration are skipped silently. Registering
    /// two plugins under the same name is an error.
    pub fn register_plugin<P>(&mut self, name: &str, plugin: P) -> anyhow::Result<()>
    where
        P: Plugin + Send + Sync + 'static,
    {
        if self.disabled.contains(name) {
            info!(stage = "register", plugin = name, "disabled by config");
            return Ok(());
        }
        if self.plugins.iter().any(|(n, _)| n == name) {
            bail!("plugin already registered: {name}");
        }
        info!(stage = "register", plugin = name);
        plugin.init();
        info!(stage = "init", plugin = name);
        self.plugins.push((name.to_string(), Box::new(plugin)));
        Ok(())
    }

    /// Applies every registered plugin to `project`, in registration order.
    ///
    /// Returns the names of plugins that failed during application so the
    /// consumer can react or report the detected problems; one failing
    /// plugin does not stop the rest.
    pub fn apply_all(&self, project: &Project) -> Vec<String> {
        info!(
            stage = "apply",
            project = project.name(),
            total = self.plugins.len()
        );
        let mut failed = Vec::new();
        for (name, plugin) in &self.plugins {
            info!(stage = "apply", plugin = name.as_str(), project = project.name());
            if let Err(err) = catch_unwind(AssertUnwindSafe(|| plugin.apply(project))) {
                let msg = if let Some(s) = err.downcast_ref::<&str>() {
                    (*s).to_string()
                } else if let Some(s) = err.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "panic without message".to_string()
                };
                error!(stage = "apply", plugin = name.as_str(), error = %msg);
                failed.push(name.clone());
            }
        }
        failed
    }

    /// Names of the registered plugins, in registration order.
    pub fn plugins(&self) -> Vec<&str> {
        self.plugins.iter().map(|(n, _)| n.as_str()).collect()
    }
}

impl Default for PluginHost {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Dummy {
        count: Arc<Mutex<u32>>,
    }

    impl Plugin for Dummy {
        fn apply(&self, _project: &Project) {
            let mut c = self.count.lock().unwrap();
            *c += 1;
        }
    }

    #[test]
    fn register_and_apply() {
        let counter = Arc::new(Mutex::new(0));
        let dummy = Dummy {
            count: counter.clone(),
        };

        let mut host = PluginHost::with_config(&HostConfig::default());
        host.register_plugin("dummy", dummy).unwrap();

        let project = Project::new("demo");
        let failed = host.apply_all(&project);

        assert!(failed.is_empty());
        assert_eq!(*counter.lock().unwrap(), 1);
    }

    #[test]
    fn continues_after_panic() {
        struct PanicPlugin;

        impl Plugin for PanicPlugin {
            fn apply(&self, _project: &Project) {
                panic!("boom");
            }
        }

        let counter = Arc::new(Mutex::new(0));
        let dummy = Dummy {
            count: counter.clone(),
        };

        let mut host = PluginHost::with_config(&HostConfig::default());
        host.register_plugin("panic", PanicPlugin).unwrap();
        host.register_plugin("dummy", dummy).unwrap();

        let project = Project::new("demo");
        let failed = host.apply_all(&project);

        assert_eq!(failed, vec!["panic".to_string()]);
        assert_eq!(*counter.lock().unwrap(), 1);
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut host = PluginHost::with_config(&HostConfig::default());
        host.register_plugin("dup", Dummy {
            count: Arc::new(Mutex::new(0)),
        })
        .unwrap();
        let err = host
            .register_plugin("dup", Dummy {
                count: Arc::new(Mutex::new(0)),
            })
            .unwrap_err();
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn disabled_plugin_is_skipped() {
        let cfg: HostConfig = toml::from_str("[plugins.dummy]\nenabled = false\n").unwrap();
        let mut host = PluginHost::with_config(&cfg);
        host.register_plugin("dummy", Dummy {
            count: Arc::new(Mutex::new(0)),
        })
        .unwrap();
        assert!(host.plugins().is_empty());
    }
}
