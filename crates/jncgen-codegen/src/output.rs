//! Writing a [`Generation`] to disk.

use crate::error::CodegenResult;
use crate::generator::Generation;
use crate::naming::package_path;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

impl Generation {
    /// Write every class to `<dir>/<package path>/<Class>.java` and every
    /// schema file into its package directory. Existing files are
    /// overwritten. Returns the written paths in generation order.
    pub fn write_to(&self, dir: &Path) -> CodegenResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.classes.len() + self.schemas.len());

        for class in &self.classes {
            let path = dir.join(class.relative_path());
            write_file(&path, &class.source)?;
            written.push(path);
        }
        for schema in &self.schemas {
            let path = dir.join(package_path(&schema.package)).join(&schema.file_name);
            write_file(&path, &schema.content)?;
            written.push(path);
        }

        info!(files = written.len(), dir = %dir.display(), "Output written");
        Ok(written)
    }
}

fn write_file(path: &Path, content: &str) -> CodegenResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    debug!(path = %path.display(), "Wrote file");
    Ok(())
}
