//! Template rendering for the generated documents.
//! Uses MiniJinja with one extra function, `taskvar`, which emits a literal
//! task-runner placeholder such as `{{.DB_USER}}` into the output.
use crate::error::Result;
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// Formats a task-runner variable reference.
fn taskvar(name: String) -> String {
    format!("{{{{.{name}}}}}")
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer with the `taskvar` helper registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.add_function("taskvar", taskvar);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template fails to parse or render
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_context() {
        let engine = MiniJinjaRenderer::new();
        let context = serde_json::json!({ "name": "test", "value": 42 });

        let result = engine.render("Hello {{ name }}!", &context).unwrap();
        assert_eq!(result, "Hello test!");

        let result = engine.render("Value: {{ value }}", &context).unwrap();
        assert_eq!(result, "Value: 42");
    }

    #[test]
    fn test_taskvar() {
        let engine = MiniJinjaRenderer::new();
        let result = engine
            .render("-U {{ taskvar('DB_USER') }}", &serde_json::Value::Null)
            .unwrap();
        assert_eq!(result, "-U {{.DB_USER}}");
    }

    #[test]
    fn test_keeps_trailing_newline() {
        let engine = MiniJinjaRenderer::new();
        let result = engine.render("line\n", &serde_json::Value::Null).unwrap();
        assert_eq!(result, "line\n");
    }

    #[test]
    fn test_invalid_template() {
        let engine = MiniJinjaRenderer::new();
        assert!(engine.render("{{ unclosed", &serde_json::Value::Null).is_err());
    }
}
