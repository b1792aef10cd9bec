//! Payload template rendering
//!
//! Templates live as files in a templates directory and render to JSON
//! objects. Rendering is strict: an unknown variable, a missing template,
//! or non-JSON output is fatal — a half-rendered payload must never reach
//! the controller.

use crate::error::{CliError, CliResult};
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

/// Parameters available to every payload template.
#[derive(Debug, Clone, Serialize, Default)]
pub struct RenderParams {
    /// Deployment environment label
    pub environment: String,
    /// Business unit name
    pub business_name: String,
    /// Monitored application name
    pub application_name: String,
    /// Tier name, empty for synthetic runs
    pub tier_name: String,
    /// Notification recipients
    pub user_email: Vec<String>,
}

/// Renders payload templates from a directory.
pub struct TemplateRenderer {
    dir: PathBuf,
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        // Templates render JSON, not HTML.
        registry.register_escape_fn(handlebars::no_escape);
        Self {
            dir: dir.into(),
            registry,
        }
    }

    /// Render one template to a JSON document.
    pub fn render_json(&self, template: &str, params: &RenderParams) -> CliResult<Value> {
        let path = self.dir.join(template);
        let source = std::fs::read_to_string(&path).map_err(|err| {
            CliError::Template(format!("template not found: {} ({err})", path.display()))
        })?;

        let rendered = self
            .registry
            .render_template(&source, params)
            .map_err(|err| CliError::Template(format!("cannot render {template}: {err}")))?;

        serde_json::from_str(&rendered).map_err(|err| {
            CliError::Template(format!("{template} did not render to JSON: {err}"))
        })
    }

    /// Render a list of templates, preserving order.
    pub fn render_all(&self, templates: &[String], params: &RenderParams) -> CliResult<Vec<Value>> {
        templates
            .iter()
            .map(|template| self.render_json(template, params))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn params() -> RenderParams {
        RenderParams {
            environment: "prod".into(),
            business_name: "ACME".into(),
            application_name: "webshop".into(),
            tier_name: "web".into(),
            user_email: vec!["ops@acme.example".into()],
        }
    }

    #[test]
    fn renders_template_to_json_object() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("rule.json.hbs")).unwrap();
        write!(
            file,
            r#"{{"name": "{{{{business_name}}}} | {{{{application_name}}}} - CPU", "enabled": true}}"#
        )
        .unwrap();

        let renderer = TemplateRenderer::new(dir.path());
        let payload = renderer.render_json("rule.json.hbs", &params()).unwrap();
        assert_eq!(payload["name"], "ACME | webshop - CPU");
        assert_eq!(payload["enabled"], true);
    }

    #[test]
    fn missing_template_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = TemplateRenderer::new(dir.path());

        let err = renderer.render_json("nope.json.hbs", &params()).unwrap_err();
        assert!(matches!(err, CliError::Template(_)));
    }

    #[test]
    fn unknown_variable_is_fatal_in_strict_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("bad.json.hbs")).unwrap();
        write!(file, r#"{{"name": "{{{{no_such_param}}}}"}}"#).unwrap();

        let renderer = TemplateRenderer::new(dir.path());
        let err = renderer.render_json("bad.json.hbs", &params()).unwrap_err();
        assert!(matches!(err, CliError::Template(_)));
    }

    #[test]
    fn non_json_output_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("text.hbs")).unwrap();
        write!(file, "just text, not json").unwrap();

        let renderer = TemplateRenderer::new(dir.path());
        let err = renderer.render_json("text.hbs", &params()).unwrap_err();
        assert!(matches!(err, CliError::Template(_)));
    }
}
