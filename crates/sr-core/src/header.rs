//! Reset script header: schema teardown block, extension setup, and the
//! banner that opens the migrations section.

use crate::config::Config;
use crate::error::CoreResult;
use minijinja::Environment;
use serde::Serialize;

const HEADER_TEMPLATE_NAME: &str = "reset_header.sql";
const HEADER_TEMPLATE: &str = include_str!("../templates/reset_header.sql.jinja");

/// Values substituted into the header template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderContext {
    /// Schema to tear down
    pub schema: String,

    /// Extensions to enable, in order
    pub extensions: Vec<String>,

    /// Optional project label
    pub project: Option<String>,

    /// Optional target label
    pub target: Option<String>,

    /// Optional generation date; leave unset for reproducible output
    pub date: Option<String>,
}

impl HeaderContext {
    /// Build a context from a validated config, without a date stamp
    pub fn from_config(config: &Config) -> Self {
        Self {
            schema: config.schema.clone(),
            extensions: config.extensions.clone(),
            project: config.project.clone(),
            target: config.target.clone(),
            date: None,
        }
    }

    /// Set the date line
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

fn header_environment() -> CoreResult<Environment<'static>> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_template(HEADER_TEMPLATE_NAME, HEADER_TEMPLATE)?;
    Ok(env)
}

/// Render the header text. The same context always renders to the same
/// bytes.
pub fn render_header(ctx: &HeaderContext) -> CoreResult<String> {
    let env = header_environment()?;
    let rendered = env.get_template(HEADER_TEMPLATE_NAME)?.render(ctx)?;
    Ok(rendered)
}

#[cfg(test)]
#[path = "header_test.rs"]
mod tests;
