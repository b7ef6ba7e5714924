//! The `match` helper: a regex-driven conditional block.
//!
//! ```text
//! {{#match title "^draft"}}(unpublished){{else}}{{title}}{{/match}}
//! {{#if (match tags "rust|go")}}systems{{/if}}
//! ```
//!
//! The first parameter is the subject, the second the pattern. Matching is
//! case-insensitive and unanchored.

use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
    RenderErrorReason, Renderable, ScopedJson, Template,
};
use hbmatch_predicate::{evaluate, is_match, Branches, PatternError};
use serde_json::Value;
use tracing::trace;

#[derive(Debug, Clone, Copy, Default)]
pub struct MatchHelper;

/// The part of the render state a branch writes through.
struct Scope<'a, 'reg, 'rc> {
    rc: &'a mut RenderContext<'reg, 'rc>,
    out: &'a mut dyn Output,
}

impl HelperDef for MatchHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        r: &'reg Handlebars<'reg>,
        ctx: &'rc Context,
        rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let (subject, pattern) = params(h)?;
        trace!(helper = h.name(), %subject, %pattern, block = h.is_block(), "match helper invoked");

        if !h.is_block() {
            let matched = is_match(&subject, &pattern).map_err(pattern_failure)?;
            out.write(if matched { "true" } else { "false" })?;
            return Ok(());
        }

        let branches = Branches::new(
            |scope| render_branch(h.template(), r, ctx, scope),
            |scope| render_branch(h.inverse(), r, ctx, scope),
        );
        evaluate(Scope { rc, out }, &subject, &pattern, branches).map_err(pattern_failure)?
    }

    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let (subject, pattern) = params(h)?;
        let matched = is_match(&subject, &pattern).map_err(pattern_failure)?;
        trace!(%subject, %pattern, matched, "match subexpression evaluated");
        Ok(ScopedJson::Derived(Value::Bool(matched)))
    }
}

fn render_branch<'reg: 'rc, 'rc>(
    template: Option<&'rc Template>,
    r: &'reg Handlebars<'reg>,
    ctx: &'rc Context,
    scope: Scope<'_, 'reg, 'rc>,
) -> HelperResult {
    match template {
        Some(t) => t.render(r, ctx, scope.rc, scope.out),
        None => Ok(()),
    }
}

fn params(h: &Helper<'_>) -> Result<(String, String), RenderError> {
    let subject = h
        .param(0)
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("match", 0))?;
    let pattern = h
        .param(1)
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("match", 1))?;
    Ok((as_text(subject.value()), as_text(pattern.value())))
}

/// Strings pass through, `null` and missing values are empty, arrays join
/// their elements with `,`. Everything else uses its JSON text.
fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(items) => items.iter().map(as_text).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

fn pattern_failure(err: PatternError) -> RenderError {
    RenderErrorReason::NestedError(Box::new(err)).into()
}
