//! prop-unused
//!
//! Declared props never referenced in the template. Props used only from
//! script code are reported too; the check looks at markup alone.

use crate::core::usage::PropUsage;
use crate::issues::Diagnostic;

/// One diagnostic per unused prop, in declaration order.
pub fn check_unused_props(usage: &PropUsage) -> Vec<Diagnostic> {
    usage
        .unused
        .iter()
        .map(|name| Diagnostic::prop_unused(name))
        .collect()
}
