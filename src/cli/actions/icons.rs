use crate::theme::IconRegistry;
use anyhow::{Result, anyhow};
use std::io::Write;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconOp {
    List,
    Show { name: String },
}

/// Print icon names as a JSON array, or the raw markup of one icon.
/// # Errors
/// Returns an error if the icon is unknown or stdout cannot be written.
pub fn execute(op: &IconOp) -> Result<()> {
    let registry = IconRegistry::new();
    let mut stdout = std::io::stdout().lock();
    render(&registry, op, &mut stdout)
}

fn render(registry: &IconRegistry, op: &IconOp, out: &mut impl Write) -> Result<()> {
    match op {
        IconOp::List => {
            let rendered = serde_json::to_string_pretty(&registry.names())?;
            writeln!(out, "{rendered}")?;
        }
        IconOp::Show { name } => {
            let svg = registry
                .get(name)
                .ok_or_else(|| anyhow!("unknown icon: {name}"))?;
            writeln!(out, "{svg}")?;
        }
    }
    Ok(())
}
