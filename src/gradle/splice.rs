//! Marker-delimited region replacement for template files
//!
//! A region is the block of whole lines strictly between a start marker line and the
//! next end marker line. Marker lines and everything outside them are kept byte for
//! byte.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: &'static str,
    pub end: &'static str,
}

pub const DEPENDENCIES_REGION: Region = Region {
    start: "// SUB-PROJECT DEPENDENCIES START",
    end: "// SUB-PROJECT DEPENDENCIES END",
};

pub const EXTENSIONS_REGION: Region = Region {
    start: "// PLUGIN GRADLE EXTENSIONS START",
    end: "// PLUGIN GRADLE EXTENSIONS END",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpliceError {
    MissingMarker(&'static str),
    DuplicateMarker(&'static str),
}

impl SpliceError {
    pub fn marker(&self) -> &'static str {
        match self {
            SpliceError::MissingMarker(m) | SpliceError::DuplicateMarker(m) => m,
        }
    }
}

impl fmt::Display for SpliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpliceError::MissingMarker(m) => write!(f, "marker '{m}' not found"),
            SpliceError::DuplicateMarker(m) => write!(f, "marker '{m}' appears more than once"),
        }
    }
}

fn is_marker_line(line: &str, marker: &str) -> bool {
    line.trim() == marker
}

/// Replace the lines between `region`'s markers with `body`.
///
/// `body` is inserted as-is followed by a newline; an empty body leaves the markers
/// adjacent.
pub fn replace_region(text: &str, region: Region, body: &str) -> Result<String, SpliceError> {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();

    let starts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_marker_line(line, region.start))
        .map(|(i, _)| i)
        .collect();

    let start = match starts.as_slice() {
        [] => return Err(SpliceError::MissingMarker(region.start)),
        [single] => *single,
        _ => return Err(SpliceError::DuplicateMarker(region.start)),
    };

    let end = lines[start + 1..]
        .iter()
        .position(|line| is_marker_line(line, region.end))
        .map(|offset| start + 1 + offset)
        .ok_or(SpliceError::MissingMarker(region.end))?;

    let mut out = String::with_capacity(text.len() + body.len());
    for line in &lines[..=start] {
        out.push_str(line);
    }
    if !lines[start].ends_with('\n') {
        out.push('\n');
    }
    if !body.is_empty() {
        out.push_str(body);
        out.push('\n');
    }
    for line in &lines[end..] {
        out.push_str(line);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "dependencies {\n    implementation fileTree(dir: 'libs')\n    // SUB-PROJECT DEPENDENCIES START\n    implementation \"old:dep:1\"\n    // SUB-PROJECT DEPENDENCIES END\n}\n\n// PLUGIN GRADLE EXTENSIONS START\napply from: \"old.gradle\"\n// PLUGIN GRADLE EXTENSIONS END\n\nfor (def func : cdvPluginPostBuildExtras) {\n    func()\n}\n";

    #[test]
    fn test_replaces_only_between_markers() {
        let out = replace_region(TEMPLATE, DEPENDENCIES_REGION, "    implementation \"new:dep:2\"").unwrap();

        assert!(out.contains("    // SUB-PROJECT DEPENDENCIES START\n    implementation \"new:dep:2\"\n    // SUB-PROJECT DEPENDENCIES END\n"));
        assert!(!out.contains("old:dep:1"));
        assert!(out.starts_with("dependencies {\n    implementation fileTree(dir: 'libs')\n"));
        assert!(out.contains("apply from: \"old.gradle\""));
        assert!(out.ends_with("    func()\n}\n"));
    }

    #[test]
    fn test_both_regions_and_idempotence() {
        let once = replace_region(TEMPLATE, DEPENDENCIES_REGION, "    implementation \"a:b:1\"").unwrap();
        let once = replace_region(&once, EXTENSIONS_REGION, "apply from: \"cordova.variables.gradle\"").unwrap();

        let twice = replace_region(&once, DEPENDENCIES_REGION, "    implementation \"a:b:1\"").unwrap();
        let twice = replace_region(&twice, EXTENSIONS_REGION, "apply from: \"cordova.variables.gradle\"").unwrap();

        assert_eq!(once, twice);
        assert!(once.contains("// PLUGIN GRADLE EXTENSIONS START\napply from: \"cordova.variables.gradle\"\n// PLUGIN GRADLE EXTENSIONS END\n"));
    }

    #[test]
    fn test_empty_body_leaves_markers_adjacent() {
        let out = replace_region(TEMPLATE, DEPENDENCIES_REGION, "").unwrap();
        assert!(out.contains("    // SUB-PROJECT DEPENDENCIES START\n    // SUB-PROJECT DEPENDENCIES END\n"));
    }

    #[test]
    fn test_missing_and_misordered_markers() {
        let no_start = "// SUB-PROJECT DEPENDENCIES END\n";
        assert_eq!(
            replace_region(no_start, DEPENDENCIES_REGION, "x"),
            Err(SpliceError::MissingMarker(DEPENDENCIES_REGION.start))
        );

        let end_first = "// SUB-PROJECT DEPENDENCIES END\n// SUB-PROJECT DEPENDENCIES START\n";
        assert_eq!(
            replace_region(end_first, DEPENDENCIES_REGION, "x"),
            Err(SpliceError::MissingMarker(DEPENDENCIES_REGION.end))
        );

        let doubled = "// SUB-PROJECT DEPENDENCIES START\n// SUB-PROJECT DEPENDENCIES START\n// SUB-PROJECT DEPENDENCIES END\n";
        let err = replace_region(doubled, DEPENDENCIES_REGION, "x").unwrap_err();
        assert_eq!(err.marker(), DEPENDENCIES_REGION.start);
    }
}
