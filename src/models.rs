use serde::{Deserialize, Serialize};

/// Pixel margins on each edge of the web view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub top: i32,
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    pub const ZERO: Insets = Insets {
        top: 0,
        left: 0,
        right: 0,
        bottom: 0,
    };

    pub fn new(top: i32, left: i32, right: i32, bottom: i32) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }
}

/// Root window insets as reported by the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowInsetsSnapshot {
    /// System bars plus display cutout.
    pub system_bars: Insets,
    pub ime: Insets,
    pub ime_visible: bool,
    pub navigation_bars: Insets,
}

/// Icon style of a system bar. `Dark` means dark icons on a light background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum BarStyle {
    Dark,
    #[default]
    Light,
}

impl BarStyle {
    /// Case-insensitive; anything other than "dark" is `Light`.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("dark") {
            BarStyle::Dark
        } else {
            BarStyle::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, BarStyle::Dark)
    }
}

impl<'de> Deserialize<'de> for BarStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(BarStyle::parse(&value))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarOptions {
    pub style: Option<BarStyle>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnableOptions {
    #[serde(rename = "StatusBar")]
    pub status_bar: Option<BarOptions>,
    #[serde(rename = "NavigationBar")]
    pub navigation_bar: Option<BarOptions>,
}

/// Per-bar styles for `set_style`, keyed like `EnableOptions`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct StyleOptions {
    #[serde(rename = "StatusBar")]
    pub status_bar: Option<BarStyle>,
    #[serde(rename = "NavigationBar")]
    pub navigation_bar: Option<BarStyle>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigureOptions {
    #[serde(default)]
    pub light_status_bar: bool,
    #[serde(default)]
    pub light_navigation_bar: bool,
    pub status_bar_color: Option<String>,
    pub navigation_bar_color: Option<String>,
    #[serde(default)]
    pub enforce_contrast: bool,
    /// Keeps the current immersive state when absent.
    pub immersive: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureNavigationOptions {
    pub status_bar_color: Option<String>,
    pub light_status_bar: Option<bool>,
    pub light_navigation_bar: Option<bool>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImmersiveModeResult {
    pub is_immersive_mode: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureNavigationResult {
    pub is_gesture_navigation: bool,
}
