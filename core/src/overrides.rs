//! Paragon semantic variables redirected to the HUMAIN palette.

use crate::variables::VariableSet;

/// One Paragon variable pointed at a HUMAIN token, falling back to the
/// stock Paragon value wherever the token is not defined.
#[derive(Debug, Clone, Copy)]
pub struct SemanticOverride {
    pub paragon: &'static str,
    pub humain: &'static str,
    pub label: &'static str,
}

pub const SEMANTIC_OVERRIDES: &[SemanticOverride] = &[
    SemanticOverride {
        paragon: "--pgn-color-primary-500",
        humain: "--humain-primary-base",
        label: "Primary Color",
    },
    SemanticOverride {
        paragon: "--pgn-color-brand-500",
        humain: "--humain-brand-base",
        label: "Brand Color",
    },
    SemanticOverride {
        paragon: "--pgn-color-secondary-500",
        humain: "--humain-secondary-base",
        label: "Secondary Color",
    },
    SemanticOverride {
        paragon: "--pgn-color-success-500",
        humain: "--humain-status-success",
        label: "Success Status",
    },
    SemanticOverride {
        paragon: "--pgn-color-warning-500",
        humain: "--humain-status-warning",
        label: "Warning Status",
    },
    SemanticOverride {
        paragon: "--pgn-color-danger-500",
        humain: "--humain-status-error",
        label: "Error Status",
    },
];

/// Render the overrides stylesheet: the HUMAIN variables themselves, then
/// one indirection declaration per semantic pair. Loaded after the theme's
/// own stylesheets, the indirections win and restyle the page.
pub fn overrides_stylesheet(vars: &VariableSet, overrides: &[SemanticOverride]) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in vars.iter() {
        css.push_str(&format!("  {name}: {value};\n"));
    }
    for o in overrides {
        css.push_str(&format!(
            "  {}: var({}, var({}));\n",
            o.paragon, o.humain, o.paragon
        ));
    }
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn emits_variables_then_indirections() {
        let mut vars = VariableSet::new();
        vars.insert("--humain-primary-base".to_string(), "#00E08F".to_string());

        let only_primary = &SEMANTIC_OVERRIDES[..1];
        assert_eq!(
            overrides_stylesheet(&vars, only_primary),
            ":root {\n  --humain-primary-base: #00E08F;\n  --pgn-color-primary-500: var(--humain-primary-base, var(--pgn-color-primary-500));\n}\n"
        );
    }

    #[test]
    fn every_pair_keeps_its_own_fallback() {
        let css = overrides_stylesheet(&VariableSet::new(), SEMANTIC_OVERRIDES);
        for o in SEMANTIC_OVERRIDES {
            assert!(css.contains(&format!("{}: var({}, var({}));", o.paragon, o.humain, o.paragon)));
        }
    }
}
