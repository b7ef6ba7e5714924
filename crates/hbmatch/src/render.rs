//! Rendering templates against JSON data with the helper installed.

use crate::error::{Error, Result};
use crate::registry::{registry, RenderOptions};
use handlebars::Template;
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

const TEMPLATE_NAME: &str = "template";

/// Where the data for a render comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    File(PathBuf),
    Inline(String),
    /// Render against an empty object
    Empty,
}

/// Read a template from `path`, or from stdin when `path` is `-`.
pub fn read_template(path: &Path) -> Result<String> {
    let read = if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        std::fs::read_to_string(path)
    };
    read.map_err(|source| Error::ReadTemplate {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_data(source: &DataSource) -> Result<Value> {
    match source {
        DataSource::File(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| Error::ReadData {
                path: path.clone(),
                source,
            })?;
            Ok(serde_json::from_str(&text)?)
        }
        DataSource::Inline(text) => Ok(serde_json::from_str(text)?),
        DataSource::Empty => Ok(Value::Object(Default::default())),
    }
}

pub fn render_str(template: &str, data: &Value, options: &RenderOptions) -> Result<String> {
    let mut hbs = registry(options);
    let mut compiled = Template::compile(template)?;
    compiled.name = Some(TEMPLATE_NAME.to_string());
    hbs.register_template(TEMPLATE_NAME, compiled);

    let rendered = hbs.render(TEMPLATE_NAME, data)?;
    debug!(bytes = rendered.len(), "rendered template");
    Ok(rendered)
}
