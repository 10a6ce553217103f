//! Filesystem helpers for the build pipeline
//!
//! Small wrappers around `std::fs` and `walkdir` that the generator and
//! commands share: creating output directories, copying assets, and
//! discovering content files.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Create a directory and any missing ancestors.
///
/// Does nothing when the directory already exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("Failed to create directory {:?}", path))
}

/// Copy a single file, creating the destination's parent directories first.
///
/// An existing destination file is overwritten. Returns the number of
/// bytes copied.
pub fn copy_file(src: &Path, dest: &Path) -> Result<u64> {
    if let Some(parent) = dest.parent() {
        ensure_dir(parent)?;
    }
    fs::copy(src, dest).with_context(|| format!("Failed to copy {:?} to {:?}", src, dest))
}

/// Mirror a directory tree into `dest`, returning the number of files copied.
///
/// Every file and subdirectory under `src` is reproduced at the same
/// relative path under `dest`. Files already present in `dest` are
/// overwritten; files that only exist in `dest` are left alone.
pub fn copy_dir_all(src: &Path, dest: &Path) -> Result<usize> {
    if !src.is_dir() {
        bail!("Source directory not found: {:?}", src);
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry?;
        let path = entry.path();
        let relative = path.strip_prefix(src)?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            ensure_dir(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                ensure_dir(parent)?;
            }
            fs::copy(path, &target)
                .with_context(|| format!("Failed to copy {:?} to {:?}", path, target))?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Recursively list files under `dir` with the given extension (no dot).
///
/// Returns an empty list when the directory does not exist. Results are
/// in a stable traversal order so builds process files deterministically.
pub fn list_files_with_extension(dir: &Path, ext: &str) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some(ext))
        .map(|e| e.into_path())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_creates_nested() {
        let tmp = tempdir().unwrap();
        let nested = tmp.path().join("a/b/c");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // Second call is a no-op
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_copy_file_creates_parents_and_overwrites() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("in.txt");
        let dest = tmp.path().join("out/deep/in.txt");
        fs::write(&src, "first").unwrap();

        copy_file(&src, &dest).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "first");

        fs::write(&src, "second").unwrap();
        copy_file(&src, &dest).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "second");
    }

    #[test]
    fn test_copy_dir_all_mirrors_tree() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("assets");
        fs::create_dir_all(src.join("css")).unwrap();
        fs::create_dir_all(src.join("empty")).unwrap();
        fs::write(src.join("css/styles.css"), "body { margin: 0; }").unwrap();
        fs::write(src.join("logo.svg"), "<svg/>").unwrap();

        let dest = tmp.path().join("dist/assets");
        let copied = copy_dir_all(&src, &dest).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(
            fs::read_to_string(dest.join("css/styles.css")).unwrap(),
            "body { margin: 0; }"
        );
        assert_eq!(fs::read_to_string(dest.join("logo.svg")).unwrap(), "<svg/>");
        assert!(dest.join("empty").is_dir());
    }

    #[test]
    fn test_copy_dir_all_keeps_extra_dest_files() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("src");
        let dest = tmp.path().join("dest");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(src.join("new.txt"), "new").unwrap();
        fs::write(dest.join("stale.txt"), "stale").unwrap();

        copy_dir_all(&src, &dest).unwrap();

        assert!(dest.join("new.txt").is_file());
        assert!(dest.join("stale.txt").is_file());
    }

    #[test]
    fn test_copy_dir_all_missing_source_fails() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("nope");
        let dest = tmp.path().join("dest");

        assert!(copy_dir_all(&missing, &dest).is_err());
    }

    #[test]
    fn test_list_files_with_extension() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("blog/posts")).unwrap();
        fs::write(tmp.path().join("about.md"), "").unwrap();
        fs::write(tmp.path().join("notes.txt"), "").unwrap();
        fs::write(tmp.path().join("blog/posts/hello.md"), "").unwrap();

        let files = list_files_with_extension(tmp.path(), "md");

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.extension().unwrap() == "md"));
        assert!(files.iter().any(|p| p.ends_with("blog/posts/hello.md")));
    }

    #[test]
    fn test_list_files_missing_dir_is_empty() {
        let tmp = tempdir().unwrap();
        let files = list_files_with_extension(&tmp.path().join("absent"), "md");
        assert!(files.is_empty());
    }

    #[test]
    fn test_list_files_order_is_stable() {
        let tmp = tempdir().unwrap();
        for name in ["b.md", "a.md", "c.md"] {
            fs::write(tmp.path().join(name), "").unwrap();
        }

        let first = list_files_with_extension(tmp.path(), "md");
        let second = list_files_with_extension(tmp.path(), "md");
        assert_eq!(first, second);
        assert!(first[0].ends_with("a.md"));
    }
}
