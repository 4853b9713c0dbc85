//! `${name}` placeholder resolution for generated dependency lines

use crate::debug_println;
use crate::error::Result;
use crate::plugin::Preference;
use std::fs;
use std::io;
use std::path::Path;

/// Raw text of the host override file; a missing file reads as empty
pub fn read_override_file(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug_println!("No override variables at {}", path.display());
            Ok(String::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Substitute preference defaults into `template`.
///
/// A preference whose name appears anywhere in `override_text` is left alone so the
/// host build can supply it. Single pass, in declaration order.
pub fn resolve_variables(override_text: &str, preferences: &[Preference], template: &str) -> String {
    preferences
        .iter()
        .filter(|preference| !override_text.contains(&preference.name))
        .fold(template.to_string(), |text, preference| {
            text.replace(&format!("${{{}}}", preference.name), &preference.default)
        })
}
