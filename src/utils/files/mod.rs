use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::Builder;

const STAGING_PREFIX: &str = ".camflow-";
const STAGING_SUFFIX: &str = ".tmp";

/// Directory that receives the staging file for `path`; a bare file name stages in `.`.
fn staging_dir(path: &Path) -> io::Result<&Path> {
    if path.file_name().is_none() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} does not name a file", path.display()),
        ));
    }
    Ok(match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    })
}

/// Replace `path` with `data` so readers never observe a partially written file.
///
/// The content goes to a uniquely named staging file next to the destination, which is then
/// renamed over it. On any failure the staging file is removed and the destination is left
/// untouched. Missing parent directories are not created. An existing destination keeps its
/// permissions.
pub fn atomic_write(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut staged = Builder::new()
        .prefix(STAGING_PREFIX)
        .suffix(STAGING_SUFFIX)
        .tempfile_in(staging_dir(path)?)?;
    staged.write_all(data)?;
    staged.as_file().sync_all()?;

    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => staged.as_file().set_permissions(meta.permissions())?,
        _ => set_default_permissions(staged.as_file())?,
    }

    staged.persist(path).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(unix)]
fn set_default_permissions(file: &fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_file: &fs::File) -> io::Result<()> {
    Ok(())
}
