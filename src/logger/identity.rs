//! Process identity used to label the global logger.

use std::env;

/// Environment variable that overrides the detected identifier.
pub const LABEL_ENV: &str = "GLOBAL_LOGGER_LABEL";

/// Identifier of the running application.
///
/// `GLOBAL_LOGGER_LABEL` if set and non-empty, otherwise the file stem of the
/// current executable. `None` when neither is available.
pub fn application_identifier() -> Option<String> {
    if let Some(label) = env::var(LABEL_ENV).ok().filter(|s| !s.is_empty()) {
        return Some(label);
    }
    executable_stem()
}

fn executable_stem() -> Option<String> {
    let exe = env::current_exe().ok()?;
    exe.file_stem()?
        .to_str()
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
