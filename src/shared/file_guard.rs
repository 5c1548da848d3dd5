use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Upper bound for catalog snapshots read back from disk (256 MB).
pub const MAX_SNAPSHOT_SIZE: u64 = 256 * 1024 * 1024;

/// Checks that `path` is a regular file no larger than `max_size`.
///
/// Symbolic links are rejected. The check uses `symlink_metadata()` so the
/// link itself is inspected, never its target.
pub fn ensure_regular_file(path: &Path, max_size: u64) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read metadata of {}: {}", path.display(), e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. Symbolic links are not followed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        anyhow::bail!(
            "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            max_size
        );
    }

    Ok(metadata.len())
}

/// Rejects an existing output path that is a symbolic link.
pub fn ensure_not_symlink(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => anyhow::bail!(
            "Security: {} is a symbolic link. Writing through symbolic links is not allowed.",
            path.display()
        ),
        _ => Ok(()),
    }
}
