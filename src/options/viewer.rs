use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lighting preset applied to the structure viewport.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum LightingMode {
    /// Unshaded, uniform illumination.
    Flat,
    /// Soft diffuse shading.
    Matte,
    /// Specular shading with reflections.
    Glossy,
}

/// Structure-viewer presentation and addressing options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct ViewerOptions {
    /// URL template for model files; `{id}` is replaced by the accession.
    pub model_url_template: String,
    /// Chain the heatmap's position axis maps onto.
    pub chain: String,
    /// Offset added to a 0-based heatmap column to obtain the backend's
    /// residue number. The default `1` covers the common case of 1-based
    /// chain-relative numbering.
    pub residue_offset: i64,
    /// Lighting preset.
    pub lighting: LightingMode,
    /// Whether the backend's sequence panel is visible.
    pub show_sequence_panel: bool,
    /// Whether the backend's control panel is visible.
    pub show_controls_panel: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            model_url_template:
                "https://alphafold.ebi.ac.uk/files/AF-{id}-F1-model_v4.cif"
                    .to_owned(),
            chain: "A".to_owned(),
            residue_offset: 1,
            lighting: LightingMode::Matte,
            show_sequence_panel: false,
            show_controls_panel: false,
        }
    }
}

impl ViewerOptions {
    /// Expand the model URL template for an accession.
    #[must_use]
    pub fn model_url(&self, accession: &str) -> String {
        self.model_url_template.replace("{id}", accession)
    }
}
