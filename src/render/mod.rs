//! HTML template rendering for the note edit page.

use std::path::Path;

use minijinja::{Environment, context};

use crate::domain::Note;

/// Name the edit page template is registered under. The `.html` suffix turns
/// on minijinja's HTML auto-escaping.
const EDIT_TEMPLATE: &str = "edit_note.html";

/// Default HTML template for the note edit page.
pub const DEFAULT_EDIT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Edit: {{ title }}</title>
</head>
<body>
    <form method="post" style="display: flex; flex-direction: column; gap: 8px; width: 100%">
        <div>
            <label class="field">
                <span>Title: </span>
                <input name="title" value="{{ title }}" required>
            </label>
        </div>
        <div>
            <label class="field">
                <span>Body: </span>
                <textarea name="body" rows="8" required>{{ body }}</textarea>
            </label>
        </div>
        <div class="actions">
            <button type="submit">Save</button>
        </div>
    </form>
    <div class="notice">
        This Form after-submit behavior changes depending how you navigated to it.
        <ul>
            <li>If you access it via an <a href="{{ path }}">internal Link</a>, its inputs will not update from loader after submit.</li>
            <li>If you access it via a browser refresh (<a href="{{ path }}" target="_blank" rel="noreferrer">or url directly</a>), its inputs will update from loader after submit.</li>
        </ul>
    </div>
</body>
</html>"##;

/// Compiled page templates, built once at startup.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Builds the template set with the built-in edit page.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(EDIT_TEMPLATE, DEFAULT_EDIT_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Builds the template set, replacing the edit page with the file at
    /// `template_path` when one is given.
    pub fn load(template_path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = template_path else {
            return Ok(Self::new()?);
        };

        let source = std::fs::read_to_string(path)?;
        let mut env = Environment::new();
        env.add_template_owned(EDIT_TEMPLATE, source)?;
        Ok(Self { env })
    }

    /// Renders the edit form for `note`.
    ///
    /// `path` is the request path, used for the "open directly" link.
    pub fn render_edit(&self, note: &Note, path: &str) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(EDIT_TEMPLATE)?;
        tmpl.render(context! {
            id => note.id().as_str(),
            title => note.title(),
            body => note.body(),
            path => path,
        })
    }
}
