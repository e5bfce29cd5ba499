use serde::{Deserialize, Serialize};
use crate::section::TraceColor;
/// Per-call plotting options shared by the static and interactive renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WiggleOptions {
    pub color: TraceColor,
    /// Visual amplitude exaggeration relative to the trace spacing.
    pub scale_factor: f64,
    /// Echo synthesized axes and trace offsets at `info` level.
    pub verbose: bool,
    /// Shade positive lobes in the interactive renderer.
    pub shade: bool,
}
impl Default for WiggleOptions {
    fn default() -> Self {
        Self {
            color: TraceColor::black(),
            scale_factor: 0.15,
            verbose: false,
            shade: false,
        }
    }
}
/// Backend-wide draw configuration applied once when a plot session starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub background: TraceColor,
    pub foreground: TraceColor,
    pub antialias: bool,
}
impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            background: TraceColor::white(),
            foreground: TraceColor::black(),
            antialias: true,
        }
    }
}
/// Output settings for the static PNG renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub caption: Option<String>,
    /// Draw tick labels (needs a system sans-serif font).
    pub labels: bool,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            caption: None,
            labels: true,
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn defaults_match_plot_call_defaults() {
        let options = WiggleOptions::default();
        assert_eq!(options.color.as_str(), "k");
        assert_eq!(options.scale_factor, 0.15);
        assert!(!options.verbose);
        assert!(!options.shade);
        let session = SessionConfig::default();
        assert_eq!(session.background.as_str(), "w");
        assert_eq!(session.foreground.as_str(), "k");
        assert!(session.antialias);
    }
    #[test]
    fn options_deserialize_with_partial_fields() {
        let options: WiggleOptions =
            serde_json::from_str(r#"{ "color": "r", "shade": true }"#).unwrap();
        assert_eq!(options.color.as_str(), "r");
        assert!(options.shade);
        assert_eq!(options.scale_factor, 0.15);
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["color"], "r");
    }
    #[test]
    fn bad_color_fails_deserialization() {
        let result = serde_json::from_str::<SessionConfig>(r#"{ "background": "nope" }"#);
        assert!(result.is_err());
    }
}
