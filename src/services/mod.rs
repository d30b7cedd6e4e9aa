pub mod ai_providers;
pub mod file_editor;
pub mod template_applier;
pub mod template_engine;
