/// Server-rendered views
///
/// Templates are compiled into the binary and registered once at startup.
/// Rendering is a pure function of the template name and context; handlers
/// build a `tera::Context` from already-fetched data and pass it in.
///
/// # Example
///
/// ```
/// use recruitlink_api::views::ViewEngine;
/// use tera::Context;
///
/// # fn example() -> Result<(), tera::Error> {
/// let views = ViewEngine::new()?;
///
/// let mut ctx = Context::new();
/// ctx.insert("recruitment_key", "my-key");
/// ctx.insert("role", "stockist");
/// ctx.insert("errors", &Vec::<String>::new());
/// ctx.insert("success_message", &Option::<String>::None);
/// let html = views.render("settings.html", &ctx)?;
/// # Ok(())
/// # }
/// ```

use axum::response::Html;
use tera::{Context, Tera};

/// Template registry for the recruitment pages
pub struct ViewEngine {
    tera: Tera,
}

impl ViewEngine {
    /// Registers the embedded templates
    ///
    /// # Errors
    ///
    /// Returns `tera::Error` if any template fails to parse
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("settings.html", include_str!("../templates/settings.html")),
            (
                "list-recruitments.html",
                include_str!("../templates/list-recruitments.html"),
            ),
            (
                "leaderboard.html",
                include_str!("../templates/leaderboard.html"),
            ),
            ("join.html", include_str!("../templates/join.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Renders a registered template with the given context
    ///
    /// # Errors
    ///
    /// Returns `tera::Error` if the template is unknown or rendering fails
    pub fn render(&self, name: &str, context: &Context) -> Result<Html<String>, tera::Error> {
        Ok(Html(self.tera.render(name, context)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_parse() {
        ViewEngine::new().expect("Templates should parse");
    }

    #[test]
    fn test_settings_renders_key_and_flash() {
        let views = ViewEngine::new().unwrap();

        let mut ctx = Context::new();
        ctx.insert("recruitment_key", "alpha-key_1");
        ctx.insert("role", "stockist");
        ctx.insert("errors", &Vec::<String>::new());
        ctx.insert(
            "success_message",
            &Some("Recruitment key has been updated.".to_string()),
        );

        let html = views.render("settings.html", &ctx).unwrap().0;
        assert!(html.contains("alpha-key_1"));
        assert!(html.contains("Recruitment key has been updated."));
    }

    #[test]
    fn test_settings_renders_validation_errors() {
        let views = ViewEngine::new().unwrap();

        let mut ctx = Context::new();
        ctx.insert("recruitment_key", "");
        ctx.insert("role", "stockist");
        ctx.insert("errors", &vec!["Key too short".to_string()]);
        ctx.insert("success_message", &Option::<String>::None);

        let html = views.render("settings.html", &ctx).unwrap().0;
        assert!(html.contains("Key too short"));
    }
}
