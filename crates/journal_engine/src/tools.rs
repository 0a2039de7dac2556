use journal_logging::journal_debug;

use crate::settings::EncoderSettings;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ToolingError {
    #[error("missing required tools: {}", .tools.join(", "))]
    Missing { tools: Vec<String> },
}

/// Resolves both encoder programs on `PATH` (or as given paths).
pub fn check_tools(settings: &EncoderSettings) -> Result<(), ToolingError> {
    let mut missing = Vec::new();

    for program in [&settings.image_program, &settings.video_program] {
        match which::which(program) {
            Ok(path) => journal_debug!("Found {} at {:?}", program, path),
            Err(_) => missing.push(program.clone()),
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ToolingError::Missing { tools: missing })
    }
}
