use path_clean::PathClean;
use std::path::{Component, Path, PathBuf};

/// Utility for resolving and handling file paths consistently across the application
pub struct PathResolver;

impl PathResolver {
    /// Resolve input path from positional argument or flag, with fallback to current directory
    pub fn resolve_input_path(positional: Option<String>, flag: Option<String>) -> String {
        positional.unwrap_or_else(|| flag.unwrap_or_else(|| String::from("./")))
    }

    /// Absolute, normalized form of `path`
    pub fn absolute(path: &Path) -> PathBuf {
        std::path::absolute(path)
            .unwrap_or_else(|_| path.to_path_buf())
            .clean()
    }

    /// Path of `to` relative to the directory `from`
    pub fn relative(from: &Path, to: &Path) -> PathBuf {
        let from = Self::absolute(from);
        let to = Self::absolute(to);

        let from_parts: Vec<Component> = from.components().collect();
        let to_parts: Vec<Component> = to.components().collect();

        if from_parts.first() != to_parts.first() {
            return to;
        }

        let common = from_parts
            .iter()
            .zip(to_parts.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let mut relative = PathBuf::new();
        for _ in common..from_parts.len() {
            relative.push("..");
        }
        for part in &to_parts[common..] {
            relative.push(part.as_os_str());
        }

        if relative.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            relative
        }
    }

    /// Render a path with forward slashes, as Gradle expects
    pub fn to_unix(path: &Path) -> String {
        path.to_string_lossy().replace('\\', "/")
    }

    /// Unix-style relative path from `from` to `to`
    pub fn relative_unix(from: &Path, to: &Path) -> String {
        Self::to_unix(&Self::relative(from, to))
    }

    /// Manifest path rebased under its owning directory: root and drive prefixes are
    /// dropped, `.` segments skipped. `None` when a `..` segment would climb out.
    pub fn contained(path: &str) -> Option<String> {
        let mut parts = Vec::new();
        for component in Path::new(path).components() {
            match component {
                Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
                Component::ParentDir => return None,
                Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
            }
        }
        Some(parts.join("/"))
    }

    /// Last `/`-separated segment of a manifest path
    pub fn last_segment(path: &str) -> &str {
        path.rsplit('/').next().unwrap_or(path)
    }

    /// Extension after the last dot of the final segment, as written
    pub fn extension(path: &str) -> Option<&str> {
        let name = Self::last_segment(path);
        name.rfind('.').map(|idx| &name[idx + 1..])
    }
}
