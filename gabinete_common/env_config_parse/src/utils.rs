use std::env;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directories never worth descending into when looking for config files.
const SKIPPED_DIRS: [&str; 3] = ["target", ".git", "node_modules"];

pub fn find_file(file_name: &str) -> Result<PathBuf, String> {
    let current_dir = env::current_dir()
        .map_err(|e| format!("Failed to get current directory: {}", e))?;
    find_file_in(&current_dir, file_name)
}

/// Recursively searches `root` for the first file named `file_name`.
pub fn find_file_in(root: &Path, file_name: &str) -> Result<PathBuf, String> {
    let root = root.canonicalize()
        .map_err(|e| format!("Failed to canonicalize path: {}", e))?;

    let walker = WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            !(entry.file_type().is_dir()
                && entry.file_name().to_str().map_or(false, |name| SKIPPED_DIRS.contains(&name)))
        });

    for entry in walker.filter_map(|e| e.ok()) {
        let path = entry.path();
        if entry.file_type().is_file() && path.file_name() == Some(Path::new(file_name).as_os_str()) {
            return path.canonicalize()
                .map_err(|e| format!("Failed to canonicalize file path: {}", e));
        }
    }

    Err(format!("File '{}' not found in {}", file_name, root.display()))
}
