//! Coloring themes for the structure view.

use super::backend::ThemeSpec;

/// How polymer residues are colored in the 3D view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ColorScheme {
    /// Derived from secondary-structure assignment.
    #[default]
    SecondaryStructure,
    /// Derived from residue hydrophobicity.
    Hydrophobicity,
    /// Derived from solvent accessibility.
    Accessibility,
    /// Derived from per-residue model confidence.
    Confidence,
    /// Caller-supplied colors, one per residue in chain order.
    Custom(Vec<[f32; 3]>),
}

impl ColorScheme {
    /// Stable name, used for backend theme lookup and logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SecondaryStructure => "secondary-structure",
            Self::Hydrophobicity => "hydrophobicity",
            Self::Accessibility => "accessibility",
            Self::Confidence => "confidence",
            Self::Custom(_) => "custom",
        }
    }

    /// The theme to push to a backend component.
    #[must_use]
    pub fn spec(&self) -> ThemeSpec<'_> {
        match self {
            Self::Custom(colors) => ThemeSpec::PerResidue(colors),
            named => ThemeSpec::Named(named.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_schemes_map_to_named_themes() {
        assert_eq!(
            ColorScheme::Hydrophobicity.spec(),
            ThemeSpec::Named("hydrophobicity")
        );
    }

    #[test]
    fn custom_scheme_carries_its_colors() {
        let scheme = ColorScheme::Custom(vec![[1.0, 0.0, 0.0]]);
        match scheme.spec() {
            ThemeSpec::PerResidue(colors) => {
                assert_eq!(colors, &[[1.0, 0.0, 0.0]]);
            }
            ThemeSpec::Named(_) => unreachable!("custom must be per-residue"),
        }
    }
}
