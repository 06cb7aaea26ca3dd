//! Fixture plugin that greets the project by name.

use std::io::{self, Write};

use crate::{Plugin, Project};

/// Stateless plugin that writes `Hello world <name>` to stdout.
#[derive(Debug, Default)]
pub struct GreetingPlugin;

/// Writes the greeting line for `name` to `out`.
///
/// The name passes through verbatim; no escaping or trimming is applied.
pub fn write_greeting<W: Write>(out: &mut W, name: &str) -> io::Result<()> {
    writeln!(out, "Hello world {name}")
}

impl Plugin for GreetingPlugin {
    fn apply(&self, project: &Project) {
        let mut out = io::stdout().lock();
        write_greeting(&mut out, project.name()).expect("failed to write greeting to stdout");
    }
}
