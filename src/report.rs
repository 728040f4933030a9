//! Serializable summary of resolved colors.

use serde::Serialize;

use crate::cli_args::OutputFormat;
use crate::color::{ColorValue, HexCase};
use crate::selection::Selection;

/// All representations of a single color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    pub name: String,
    pub hex: String,
    pub rgb: [u8; 3],
    pub hsv: [u16; 3],
    pub hsl: [u16; 3],
    pub cmyk: [u8; 4],
    pub luminance: f64,
}

impl From<&ColorValue> for ColorReport {
    fn from(color: &ColorValue) -> Self {
        let (h, s, v) = color.hsv();
        let (hh, hs, hl) = color.hsl();
        let (c, m, y, k) = color.cmyk();

        Self {
            name: color.name().to_string(),
            hex: format!("#{}", color.hex(HexCase::Upper)),
            rgb: color.components(),
            hsv: [h, s.into(), v.into()],
            hsl: [hh, hs.into(), hl.into()],
            cmyk: [c, m, y, k],
            luminance: color.luminance(),
        }
    }
}

/// Resolved color set with the contrast ratios between its members.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionReport {
    pub background: ColorReport,
    pub secondary: ColorReport,
    pub contrast: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<ColorReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_contrast: Option<f64>,
}

impl From<&Selection> for SelectionReport {
    fn from(selection: &Selection) -> Self {
        Self {
            background: (&selection.background).into(),
            secondary: (&selection.secondary).into(),
            contrast: selection.background.contrast_ratio(&selection.secondary),
            overlay: selection.overlay.as_ref().map(Into::into),
            overlay_contrast: selection
                .overlay
                .as_ref()
                .map(|o| selection.background.contrast_ratio(o)),
        }
    }
}

/// Error serializing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("YAML serialize error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON serialize error: {0}")]
    Json(#[from] serde_json::Error),
}

fn to_text<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String, ReportError> {
    Ok(match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Json => serde_json::to_string_pretty(value)? + "\n",
    })
}

impl SelectionReport {
    /// Serialize in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String, ReportError> {
        to_text(self, format)
    }

    /// Serialize several reports as one YAML/JSON list.
    pub fn render_all(
        reports: &[SelectionReport],
        format: OutputFormat,
    ) -> Result<String, ReportError> {
        to_text(reports, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgb;

    use crate::names::ColorNames;

    fn selection() -> Selection {
        let names = ColorNames::builtin();
        Selection {
            background: ColorValue::named(Srgb::new(0, 0, 0), names),
            secondary: ColorValue::named(Srgb::new(255, 255, 255), names),
            overlay: None,
        }
    }

    #[test]
    fn report_carries_every_representation() {
        let names = ColorNames::builtin();
        let report = ColorReport::from(&ColorValue::named(Srgb::new(0xAB, 0xCD, 0xEF), names));
        assert_eq!(report.hex, "#ABCDEF");
        assert_eq!(report.rgb, [0xAB, 0xCD, 0xEF]);
        assert_eq!(report.hsv, [210, 28, 93]);
        assert_eq!(report.hsl, [210, 68, 80]);
        assert_eq!(report.cmyk, [28, 14, 0, 6]);
        assert_eq!(report.name, "Anonymous");
    }

    #[test]
    fn json_report_includes_contrast() {
        let text = SelectionReport::from(&selection())
            .render(OutputFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["contrast"], 21.0);
        assert_eq!(value["background"]["name"], "Black");
        assert!(value.get("overlay").is_none());
    }

    #[test]
    fn json_list_of_reports() {
        let reports = vec![SelectionReport::from(&selection()); 2];
        let text = SelectionReport::render_all(&reports, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn yaml_report_names_both_colors() {
        let text = SelectionReport::from(&selection())
            .render(OutputFormat::Yaml)
            .unwrap();
        assert!(text.contains("name: Black"));
        assert!(text.contains("name: White"));
    }
}
