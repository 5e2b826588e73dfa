use crate::io::{template_csv, write_template};
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Write the import template to `output`, or to stdout when it is `-`.
pub fn export_template(output: &Path) -> Result<()> {
    if output == Path::new("-") {
        let bytes = template_csv()?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&bytes)?;
        stdout.flush()?;
        return Ok(());
    }

    write_template(output)?;
    eprintln!("Template written to {}", output.display());
    Ok(())
}
