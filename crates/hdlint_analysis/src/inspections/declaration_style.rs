//! module-as-class inspection: Modules must be declared as classes.
//!
//! A declaration extending `Module` describes a hardware module, and every
//! elaboration needs a fresh instance of it. Declaring one as a singleton
//! `object` breaks that, so the inspection flags `object X : Module` (or
//! `Module()`). A simulation top-level marked `@SimTop` is the one accepted
//! use of a singleton module and is exempt.

use hdlint_syntax::DeclarationNode;

use crate::{Diagnostic, ReportSink, RuleDescriptor, Severity};

use super::Inspection;

const RULE_ID: &str = "module-as-class";
const MESSAGE: &str = "Module must be declared as class";

const OBJECT_KEYWORD: &str = "object";
const MODULE_SUPERTYPE: &str = "Module";
const SIM_TOP_MARKER: &str = "SimTop";

static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    id: RULE_ID,
    display_name: "Module declaration style",
    description: "Reports hardware modules declared as singleton objects instead of classes",
    default_severity: Severity::Error,
};

/// The module-as-class inspection.
pub struct DeclarationStyle;

impl Inspection for DeclarationStyle {
    fn descriptor(&self) -> &'static RuleDescriptor {
        &DESCRIPTOR
    }

    fn check(&self, declaration: &DeclarationNode, sink: &mut dyn ReportSink) {
        // Incomplete syntax mid-edit; the parser will complain, not us.
        let Some(keyword) = &declaration.keyword else {
            return;
        };

        if !extends_module(declaration) {
            return;
        }
        if keyword.text != OBJECT_KEYWORD {
            return;
        }
        if declaration.has_marker(SIM_TOP_MARKER) {
            return;
        }

        sink.register_problem(
            Diagnostic::new(RULE_ID, MESSAGE, keyword.span)
                .with_severity(DESCRIPTOR.default_severity),
        );
    }
}

/// True if any supertype reference is `Module`, treating `Module()` (the
/// empty-call constructor form) as equivalent.
fn extends_module(declaration: &DeclarationNode) -> bool {
    declaration
        .supertypes
        .iter()
        .any(|text| text.strip_suffix("()").unwrap_or(text) == MODULE_SUPERTYPE)
}
