use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// `io.lambdagen.function.primitive` → `io/lambdagen/function/primitive`
pub fn package_dir(package: &str) -> PathBuf {
    package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Destination of one interface: `<out>/<package dirs>/<Name>.<ext>`
pub fn output_path(out_dir: &Path, package: &str, name: &str, extension: &str) -> PathBuf {
    out_dir
        .join(package_dir(package))
        .join(format!("{name}.{extension}"))
}

/// Write one rendered source, creating parent directories as needed.
pub fn write_source(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
