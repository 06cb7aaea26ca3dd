/// Handle to the build unit a plugin is applied to.
///
/// Owned and supplied by the host; plugins only read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Name of the project as declared by the host.
    pub fn name(&self) -> &str {
        &self.name
    }
}
