use std::path::Path;

use crate::error::FaviconError;
use crate::icon;
use crate::source;
use crate::targets::IconTarget;

/// Result of attempting one output target
#[derive(Debug)]
pub struct TargetOutcome {
    pub target: IconTarget,
    pub result: Result<(), FaviconError>,
}

impl TargetOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Decode `source_path` once and write every target from it.
///
/// Returns early only when the source cannot be loaded. A failing target is
/// logged and recorded in its outcome; the remaining targets are still
/// attempted.
pub fn run(source_path: &Path, targets: &[IconTarget]) -> Result<Vec<TargetOutcome>, FaviconError> {
    log::debug!("Using image: {}", source_path.display());

    let image = source::load_source(source_path).inspect_err(|e| match e {
        FaviconError::SourceNotFound { .. } => {
            log::error!("The provided image file was not found. Aborting.")
        }
        _ => log::error!("Could not open the image: {}", e),
    })?;

    let mut outcomes = Vec::with_capacity(targets.len());
    for target in targets {
        let result = icon::write_icon(&image, target);
        match &result {
            Ok(()) => log::debug!("{} saved as {}", capitalize(&target.label), target.path.display()),
            Err(e) => log::error!("Failed to save {}: {}", target.label, e),
        }
        outcomes.push(TargetOutcome {
            target: target.clone(),
            result,
        });
    }

    Ok(outcomes)
}

/// Count successful and failed outcomes.
pub fn summarize(outcomes: &[TargetOutcome]) -> (usize, usize) {
    let succeeded = outcomes.iter().filter(|o| o.is_ok()).count();
    (succeeded, outcomes.len() - succeeded)
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
