//! Registering the `match` helper with a Handlebars registry.

use crate::helper::MatchHelper;
use handlebars::Handlebars;
use tracing::debug;

/// Name the helper is registered under unless configured otherwise.
pub const HELPER_NAME: &str = "match";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Fail on variables missing from the data instead of rendering nothing
    pub strict: bool,
    /// HTML-escape `{{ expr }}` output
    pub escape_html: bool,
    pub helper_name: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            strict: false,
            escape_html: true,
            helper_name: HELPER_NAME.to_string(),
        }
    }
}

/// Register the helper under [`HELPER_NAME`]. Registering again replaces the
/// previous helper of that name.
pub fn register(hbs: &mut Handlebars<'_>) {
    register_as(hbs, HELPER_NAME);
}

pub fn register_as(hbs: &mut Handlebars<'_>, name: &str) {
    hbs.register_helper(name, Box::new(MatchHelper));
    debug!(name, "registered match helper");
}

/// Build a registry configured from `options` with the helper installed.
pub fn registry(options: &RenderOptions) -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(options.strict);
    if !options.escape_html {
        hbs.register_escape_fn(handlebars::no_escape);
    }
    register_as(&mut hbs, &options.helper_name);
    hbs
}
