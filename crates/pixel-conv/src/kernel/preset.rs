//! Named kernel presets and the immutable table that holds them.

use super::kernel::{Kernel, EDGE_DETECT, GAUSSIAN_BLUR, IDENTITY, SHARPEN};

/// A named kernel with human-readable metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmPreset {
    /// Lookup key, e.g. `gaussian-blur`
    pub id: String,
    /// Display name, e.g. `Gaussian Blur`
    pub name: String,
    /// One-sentence explanation
    pub description: String,
    /// Formula shown alongside the kernel
    pub formula: String,
    /// The kernel and its divisor
    pub kernel: Kernel,
}

impl AlgorithmPreset {
    /// Create a preset.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        formula: impl Into<String>,
        kernel: Kernel,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            formula: formula.into(),
            kernel,
        }
    }
}

/// An ordered, read-only collection of presets.
///
/// Built once at startup and handed to whatever needs it; nothing mutates
/// a table after construction. Extending a table produces a new one.
///
/// # Example
///
/// ```
/// use pixel_conv::PresetTable;
///
/// let table = PresetTable::builtin();
/// let blur = table.get("gaussian-blur").unwrap();
/// assert_eq!(blur.kernel.divisor(), 16.0);
/// assert_eq!(table.ids().collect::<Vec<_>>(),
///            ["identity", "edge-detect", "gaussian-blur", "sharpen"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PresetTable {
    presets: Vec<AlgorithmPreset>,
}

impl PresetTable {
    /// Id of the identity preset.
    pub const IDENTITY_ID: &'static str = "identity";

    /// The four built-in presets: identity, edge detection, Gaussian blur, sharpen.
    pub fn builtin() -> Self {
        Self {
            presets: vec![
                AlgorithmPreset::new(
                    Self::IDENTITY_ID,
                    "Identity",
                    "Leaves every pixel unchanged.",
                    "out(x,y) = in(x,y)",
                    IDENTITY,
                ),
                AlgorithmPreset::new(
                    "edge-detect",
                    "Edge Detection",
                    "Responds to differences between a pixel and its neighbors; flat regions turn black.",
                    "out = 8*center - sum(8 neighbors)",
                    EDGE_DETECT,
                ),
                AlgorithmPreset::new(
                    "gaussian-blur",
                    "Gaussian Blur",
                    "Weighted average that favors the center, smoothing noise and fine detail.",
                    "out = (4*center + 2*edges + corners) / 16",
                    GAUSSIAN_BLUR,
                ),
                AlgorithmPreset::new(
                    "sharpen",
                    "Sharpen",
                    "Amplifies the center against its four direct neighbors to crispen edges.",
                    "out = 5*center - (up + down + left + right)",
                    SHARPEN,
                ),
            ],
        }
    }

    /// Return a new table with `extra` appended.
    ///
    /// A preset whose id already exists (ignoring case, as [`get`](Self::get)
    /// does) replaces the earlier entry in place.
    pub fn with_presets(mut self, extra: impl IntoIterator<Item = AlgorithmPreset>) -> Self {
        for preset in extra {
            match self
                .presets
                .iter_mut()
                .find(|p| p.id.eq_ignore_ascii_case(&preset.id))
            {
                Some(existing) => *existing = preset,
                None => self.presets.push(preset),
            }
        }
        self
    }

    /// Look up a preset by id (case-insensitive).
    pub fn get(&self, id: &str) -> Option<&AlgorithmPreset> {
        self.presets.iter().find(|p| p.id.eq_ignore_ascii_case(id))
    }

    /// Iterate presets in table order.
    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmPreset> + '_ {
        self.presets.iter()
    }

    /// Iterate preset ids in table order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.presets.iter().map(|p| p.id.as_str())
    }

    /// Number of presets.
    #[inline]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// True if the table holds no presets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let table = PresetTable::builtin();
        assert_eq!(table.len(), 4);
        assert!(table.get("identity").unwrap().kernel.is_identity());
        assert_eq!(table.get("EDGE-DETECT").unwrap().name, "Edge Detection");
        assert!(table.get("emboss").is_none());
    }

    #[test]
    fn test_with_presets_appends_and_replaces() {
        let box_blur = AlgorithmPreset::new(
            "box-blur",
            "Box Blur",
            "Plain average",
            "out = sum / 9",
            Kernel::new([[1.0; 3]; 3], 9.0),
        );
        let strong_sharpen = AlgorithmPreset::new(
            "sharpen",
            "Strong Sharpen",
            "",
            "",
            Kernel::new([[-1.0, -1.0, -1.0], [-1.0, 9.0, -1.0], [-1.0, -1.0, -1.0]], 1.0),
        );

        let table = PresetTable::builtin().with_presets([box_blur, strong_sharpen]);

        assert_eq!(
            table.ids().collect::<Vec<_>>(),
            ["identity", "edge-detect", "gaussian-blur", "sharpen", "box-blur"]
        );
        assert_eq!(table.get("sharpen").unwrap().name, "Strong Sharpen");
        assert_eq!(table.get("box-blur").unwrap().kernel.divisor(), 9.0);
    }

    #[test]
    fn test_with_presets_replaces_case_variant_id() {
        let mine = AlgorithmPreset::new(
            "Sharpen",
            "Mine",
            "",
            "",
            Kernel::new([[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]], 1.0),
        );

        let table = PresetTable::builtin().with_presets([mine]);

        assert_eq!(table.len(), 4);
        assert_eq!(table.get("sharpen").unwrap().name, "Mine");
        assert_eq!(table.get("SHARPEN").unwrap().name, "Mine");
        assert_eq!(table.ids().nth(3), Some("Sharpen"));
    }
}
