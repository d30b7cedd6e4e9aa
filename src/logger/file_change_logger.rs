use std::path::Path;

use crate::structs::code_change_response::CodeChangeResponse;

pub struct FileChangeLogger;

impl FileChangeLogger {
    pub fn print_apply_outcome(path: &Path, response: &CodeChangeResponse) {
        if response.proposed_content().is_some() {
            log::info!("✏️ {}: change applied", path.display());
        } else if response.change_required {
            log::warn!(
                "⚠️ {}: model required a change but returned no content; file left untouched",
                path.display()
            );
        } else {
            log::info!("✅ {}: no change required", path.display());
        }

        if let Some(severity) = &response.severity {
            log::info!("   {} Severity: {}", severity.emoji(), severity.name());
        }
        if let Some(explanation) = &response.change_explanation {
            log::info!("   📝 {}", explanation);
        }
    }
}
