// edarun: EDA Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The environment composer: a single linear fold over a directive list.
//!
//! ```text
//! apply(base, directives) -> Env
//!   Set         -> replace/insert
//!   AppendPath  -> current + SEP + segment (or segment alone)
//!   PrependPath -> segment + SEP + current
//!   ${NAME}/$NAME -> looked up in the mapping-in-progress,
//!                    empty string if unset (warn!)
//!
//! check_references(base, directives) -> Result
//!   same fold, fails fast on the first unset reference
//! ```
//!
//! `apply` is total and deterministic: the same base and directive list
//! always produce the same mapping, and `base` is never mutated.

use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

use super::container::Env;
use super::types::Directive;
use crate::error::ComposeError;

/// Matches `${NAME}` and bare `$NAME` references, shell-style.
static REFERENCE_RE: OnceLock<Regex> = OnceLock::new();

fn reference_re() -> &'static Regex {
    REFERENCE_RE.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)")
            .expect("reference pattern is valid")
    })
}

/// Applies `directives` to a snapshot of `base`, returning the composed
/// environment.
///
/// Directives are applied in declared order; later directives observe the
/// results of earlier ones. References to unset variables expand to the
/// empty string (logged at warn level). `base` is left untouched.
#[must_use]
pub fn apply(base: &Env, directives: &[Directive]) -> Env {
    let mut env = base.clone();
    for directive in directives {
        apply_one(&mut env, directive);
    }
    env
}

/// Validation pass for strict mode: walks the same fold as [`apply`] but
/// fails on the first reference to a variable that is unset at its point
/// of use.
///
/// # Errors
///
/// Returns [`ComposeError::UnresolvedReference`] naming the offending
/// directive target and the missing variable.
pub fn check_references(
    base: &Env,
    directives: &[Directive],
) -> std::result::Result<(), ComposeError> {
    let mut env = base.clone();
    for directive in directives {
        for referenced in references(directive.raw_value()) {
            if env.get(referenced).is_none() {
                return Err(ComposeError::UnresolvedReference {
                    name: directive.name().to_string(),
                    referenced: referenced.to_string(),
                });
            }
        }
        apply_one(&mut env, directive);
    }
    Ok(())
}

/// Applies a single directive to the mapping being built.
fn apply_one(env: &mut Env, directive: &Directive) {
    match directive {
        Directive::Set { name, value } => {
            let value = expand(env, name, value);
            env.set(name.clone(), value);
        }
        Directive::AppendPath { name, segment } => {
            let segment = expand(env, name, segment);
            env.append_path_var(name, segment);
        }
        Directive::PrependPath { name, segment } => {
            let segment = expand(env, name, segment);
            env.prepend_path_var(name, segment);
        }
    }
}

/// Resolves `${NAME}` references in `raw` against the mapping-in-progress.
///
/// Substitution is textual and happens once, at the point of use; the
/// result is not re-evaluated when referenced variables change later.
fn expand(env: &Env, name: &str, raw: &str) -> String {
    if !raw.contains('$') {
        return raw.to_string();
    }

    reference_re()
        .replace_all(raw, |caps: &regex::Captures<'_>| {
            let referenced = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());
            env.get(referenced).map_or_else(
                || {
                    // Faithful to shell expansion: unset references expand
                    // to nothing. A frequent source of broken tool setups,
                    // hence the warning.
                    warn!(
                        name,
                        referenced, "reference to unset variable expands to empty string"
                    );
                    String::new()
                },
                std::borrow::ToOwned::to_owned,
            )
        })
        .into_owned()
}

/// Iterates the variable names referenced by a raw value string.
fn references(raw: &str) -> impl Iterator<Item = &str> {
    reference_re().captures_iter(raw).filter_map(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
    })
}
