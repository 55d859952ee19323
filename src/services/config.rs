use serde::Deserialize;

use crate::models::BarStyle;
use crate::services::color::Color;

/// The `plugins.edge-to-edge` block of the host's `tauri.conf.json`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    pub background_color: Option<String>,
    pub status_bar_color: Option<String>,
    pub navigation_bar_color: Option<String>,
    #[serde(default)]
    pub disable_edge_to_edge_for_gesture: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeToEdgeConfig {
    pub background_color: Color,
    pub status_bar_color: Color,
    pub navigation_bar_color: Color,
    pub status_bar_style: BarStyle,
    pub navigation_bar_style: BarStyle,
    pub disable_edge_to_edge_for_gesture: bool,
}

impl Default for EdgeToEdgeConfig {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            status_bar_color: Color::WHITE,
            navigation_bar_color: Color::WHITE,
            status_bar_style: BarStyle::Light,
            navigation_bar_style: BarStyle::Light,
            disable_edge_to_edge_for_gesture: false,
        }
    }
}

impl EdgeToEdgeConfig {
    /// Builds the typed record. A color that fails to parse is logged and
    /// leaves its default in place; setup never fails on bad config.
    pub fn from_plugin_config(raw: &PluginConfig) -> Self {
        let mut config = Self {
            disable_edge_to_edge_for_gesture: raw.disable_edge_to_edge_for_gesture,
            ..Self::default()
        };

        let fields = [
            ("backgroundColor", &raw.background_color, &mut config.background_color),
            ("statusBarColor", &raw.status_bar_color, &mut config.status_bar_color),
            (
                "navigationBarColor",
                &raw.navigation_bar_color,
                &mut config.navigation_bar_color,
            ),
        ];
        for (key, value, target) in fields {
            let Some(value) = value else { continue };
            match Color::parse(value) {
                Ok(color) => *target = color,
                Err(e) => log::error!("[EdgeToEdge] Ignoring config {}: {}", key, e),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_camel_case_plugin_block() {
        let raw: PluginConfig = serde_json::from_value(serde_json::json!({
            "backgroundColor": "#000000",
            "statusBarColor": "#ff0000",
            "disableEdgeToEdgeForGesture": true
        }))
        .expect("deserialize");

        let config = EdgeToEdgeConfig::from_plugin_config(&raw);
        assert_eq!(config.background_color, Color::BLACK);
        assert_eq!(config.status_bar_color.argb(), 0xFFFF_0000);
        assert_eq!(config.navigation_bar_color, Color::WHITE);
        assert!(config.disable_edge_to_edge_for_gesture);
    }

    #[test]
    fn uses_defaults_when_block_is_empty() {
        let config = EdgeToEdgeConfig::from_plugin_config(&PluginConfig::default());
        assert_eq!(config, EdgeToEdgeConfig::default());
    }

    #[test]
    fn invalid_color_keeps_default_and_others_apply() {
        let raw = PluginConfig {
            background_color: Some("not-a-color".into()),
            navigation_bar_color: Some("navy".into()),
            ..PluginConfig::default()
        };
        let config = EdgeToEdgeConfig::from_plugin_config(&raw);
        assert_eq!(config.background_color, Color::WHITE);
        assert_eq!(config.navigation_bar_color.argb(), 0xFF00_0080);
    }
}
