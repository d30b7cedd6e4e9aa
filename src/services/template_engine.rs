use std::collections::HashMap;
use std::error::Error as StdError;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use tera::{Context, Tera};

use crate::config::constants::{FILE_CONTENTS_VAR, PROMPT_VAR};
use crate::errors::{LazyDevError, LazyDevResult};

pub const DEFAULT_TEMPLATE_NAME: &str = "code_change";

const DEFAULT_TEMPLATE_SOURCE: &str = include_str!("../../templates/code_change.tera");

// Compiled once per process on first use
static DEFAULT_TEMPLATE: Lazy<Template> = Lazy::new(|| {
    Template::from_source(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE_SOURCE)
        .expect("bundled default template must compile")
});

/// A message template with named placeholders, substituted at render time.
///
/// Substitution is strict: rendering fails when the template references a
/// placeholder the caller did not supply a value for.
#[derive(Clone, Debug)]
pub struct Template {
    name: String,
    tera: Tera,
}

impl Template {
    pub fn from_source(name: &str, source: &str) -> LazyDevResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(name, source)
            .map_err(|e| LazyDevError::template_error(name, &flatten_tera_error(&e)))?;

        Ok(Self {
            name: name.to_string(),
            tera,
        })
    }

    pub fn from_file(path: &Path) -> LazyDevResult<Self> {
        if !path.exists() {
            return Err(LazyDevError::not_found(path));
        }

        let source = fs::read_to_string(path)
            .map_err(|e| LazyDevError::file_error(path, "read", &e.to_string()))?;
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(DEFAULT_TEMPLATE_NAME);

        Self::from_source(name, &source)
    }

    /// Resolve the template to use: a caller-specified file, or the
    /// process-wide default loaded from the bundled resource.
    pub fn load(file: Option<&Path>) -> LazyDevResult<Self> {
        match file {
            Some(path) => Self::from_file(path),
            None => Ok(DEFAULT_TEMPLATE.clone()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self, substitutions: &HashMap<&str, &str>) -> LazyDevResult<String> {
        let mut context = Context::new();
        for (key, value) in substitutions {
            context.insert(*key, value);
        }

        self.tera
            .render(&self.name, &context)
            .map_err(|e| classify_render_error(&self.name, &e))
    }

    /// Build the outbound message from a code file's contents and a prompt.
    pub fn render_code_change(&self, file_contents: &str, prompt: &str) -> LazyDevResult<String> {
        let substitutions =
            HashMap::from([(FILE_CONTENTS_VAR, file_contents), (PROMPT_VAR, prompt)]);
        self.render(&substitutions)
    }
}

fn classify_render_error(template: &str, error: &tera::Error) -> LazyDevError {
    let details = flatten_tera_error(error);
    if let Some(placeholder) = missing_variable_name(&details) {
        return LazyDevError::missing_placeholder(template, &placeholder);
    }
    LazyDevError::template_error(template, &details)
}

fn flatten_tera_error(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

// Tera reports an undefined variable as
// "Variable `name` not found in context while rendering '...'"
fn missing_variable_name(details: &str) -> Option<String> {
    if !details.contains("not found in context") {
        return None;
    }
    let start = details.find("Variable `")? + "Variable `".len();
    let rest = &details[start..];
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}
