//! Plugin application contract for a build host.
//!
//! A host hands each registered [`Plugin`] a [`Project`] handle at
//! configuration time and the plugin reacts to it. The crate ships
//! [`GreetingPlugin`], the canonical fixture plugin that greets the project
//! by name on standard output, and a [`PluginHost`] that registers plugins,
//! runs their lifecycle and applies them to a project.

pub mod config;
pub mod greeting;
pub mod host;
pub mod project;

pub use config::HostConfig;
pub use greeting::GreetingPlugin;
pub use host::PluginHost;
pub use project::Project;

/// Current version of the plugin API expected by the host.
pub const API_VERSION: &str = "1.0.0";

/// Basic behaviour that a plugin must implement.
pub trait Plugin {
    /// Initialises the plugin before it is applied to any project.
    ///
    /// This method allows preparing shared resources or verifying
    /// API compatibility.
    fn init(&self) {}

    /// Applies the plugin to the given project.
    ///
    /// # Errors
    ///
    /// Implementations signal failures via `panic!`; the host isolates the
    /// panic and reports the plugin as failed.
    fn apply(&self, project: &Project);
}
