use crate::models::{Insets, WindowInsetsSnapshot};
use crate::services::platform::sdk;

/// Margins the web view should take for the given window insets: the
/// keyboard inset replaces the bottom system-bar inset while it is visible.
pub fn resolve_margins(snapshot: &WindowInsetsSnapshot) -> Insets {
    let bottom = if snapshot.ime_visible {
        snapshot.ime.bottom
    } else {
        snapshot.system_bars.bottom
    };

    Insets {
        top: snapshot.system_bars.top,
        left: snapshot.system_bars.left,
        right: snapshot.system_bars.right,
        bottom,
    }
}

/// Gesture navigation reports no bottom navigation-bar inset. Only
/// meaningful from Android 10 on; earlier releases always use buttons.
pub fn is_gesture_navigation(sdk_int: i32, snapshot: Option<&WindowInsetsSnapshot>) -> bool {
    if sdk_int < sdk::Q {
        return false;
    }
    snapshot.map_or(false, |insets| insets.navigation_bars.bottom == 0)
}
