use std::sync::{Mutex, PoisonError};

use tauri::{AppHandle, Manager, Runtime};

use crate::error::{
    required, Error, Result, ERROR_COLOR_MISSING, ERROR_ENABLED_MISSING, ERROR_ENFORCE_MISSING,
    ERROR_ENTER_MISSING, ERROR_GESTURE_FLAG_MISSING, ERROR_LIGHT_MISSING,
    ERROR_STYLE_AND_COLOR_MISSING, ERROR_STYLE_MISSING,
};
use crate::models::{
    BarStyle, ConfigureOptions, EnableOptions, GestureNavigationOptions, GestureNavigationResult,
    ImmersiveModeResult, Insets, StyleOptions,
};
use crate::services::platform::{self, PlatformWindow};
use crate::services::EdgeToEdge;

pub(crate) type EdgeToEdgeState = Mutex<EdgeToEdge<PlatformWindow>>;

/// Runs `f` against the managed controller on the activity's UI thread and
/// waits for its result. Window and view calls are only legal there.
async fn on_ui_thread<R, T, F>(app: &AppHandle<R>, f: F) -> Result<T>
where
    R: Runtime,
    T: Send + 'static,
    F: FnOnce(&mut EdgeToEdge<PlatformWindow>) -> Result<T> + Send + 'static,
{
    let (tx, rx) = tokio::sync::oneshot::channel();
    let handle = app.clone();
    platform::run_on_ui_thread(Box::new(move || {
        let state = handle.state::<EdgeToEdgeState>();
        let mut edge = state.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = tx.send(f(&mut edge));
    }))?;
    rx.await.map_err(|_| Error::UiThread)?
}

/// Loads the controller on the UI thread. Needs the web view attached.
pub(crate) fn load<R: Runtime>(app: &AppHandle<R>) -> Result<()> {
    let handle = app.clone();
    platform::run_on_ui_thread(Box::new(move || {
        let state = handle.state::<EdgeToEdgeState>();
        let mut edge = state.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = edge.load() {
            log::error!("[EdgeToEdge] Load failed: {}", e);
        }
    }))
}

/// Entry point for insets delivered by the web view listener. Runs on the
/// UI thread, the same thread every command runs on, so the lock is never
/// held across a dispatch.
#[cfg(target_os = "android")]
pub(crate) fn dispatch_window_insets<R: Runtime>(
    app: &AppHandle<R>,
    snapshot: &crate::models::WindowInsetsSnapshot,
) {
    use tauri::Emitter;

    let state = app.state::<EdgeToEdgeState>();
    let result = state
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .on_window_insets(snapshot);

    match result {
        Ok(Some(margins)) => {
            if let Err(e) = app.emit(crate::INSETS_CHANGED_EVENT, margins) {
                log::warn!("[EdgeToEdge] Failed to emit insets: {}", e);
            }
        }
        Ok(None) => {}
        Err(e) => log::error!("[EdgeToEdge] Failed to apply insets: {}", e),
    }
}

#[tauri::command]
pub(crate) async fn enable<R: Runtime>(
    app: AppHandle<R>,
    options: Option<EnableOptions>,
) -> Result<()> {
    let options = options.unwrap_or_default();
    on_ui_thread(&app, move |edge| edge.enable(&options)).await
}

#[tauri::command]
pub(crate) async fn disable<R: Runtime>(app: AppHandle<R>) -> Result<()> {
    on_ui_thread(&app, |edge| edge.disable()).await
}

#[tauri::command]
pub(crate) async fn get_insets<R: Runtime>(app: AppHandle<R>) -> Result<Insets> {
    on_ui_thread(&app, |edge| edge.get_insets()).await
}

#[tauri::command]
pub(crate) async fn set_background_color<R: Runtime>(
    app: AppHandle<R>,
    color: Option<String>,
    status_bar_color: Option<String>,
    navigation_bar_color: Option<String>,
) -> Result<()> {
    any_color(&[&color, &status_bar_color, &navigation_bar_color])?;
    on_ui_thread(&app, move |edge| {
        edge.set_background_color(
            color.as_deref(),
            status_bar_color.as_deref(),
            navigation_bar_color.as_deref(),
        )
    })
    .await
}

#[tauri::command]
pub(crate) async fn set_status_bar_color<R: Runtime>(
    app: AppHandle<R>,
    color: Option<String>,
) -> Result<()> {
    let color = required(color, ERROR_COLOR_MISSING)?;
    on_ui_thread(&app, move |edge| edge.set_status_bar_color(&color)).await
}

#[tauri::command]
pub(crate) async fn set_navigation_bar_color<R: Runtime>(
    app: AppHandle<R>,
    color: Option<String>,
) -> Result<()> {
    let color = required(color, ERROR_COLOR_MISSING)?;
    on_ui_thread(&app, move |edge| edge.set_navigation_bar_color(&color)).await
}

#[tauri::command]
pub(crate) async fn set_background_color_and_style<R: Runtime>(
    app: AppHandle<R>,
    style: Option<String>,
    color: Option<String>,
) -> Result<()> {
    let (style, color) = style_and_color(style, color)?;
    on_ui_thread(&app, move |edge| edge.set_background_color_and_style(style, &color)).await
}

#[tauri::command]
pub(crate) async fn set_style<R: Runtime>(
    app: AppHandle<R>,
    options: Option<StyleOptions>,
) -> Result<()> {
    let StyleOptions {
        status_bar,
        navigation_bar,
    } = options.unwrap_or_default();
    on_ui_thread(&app, move |edge| edge.set_style(status_bar, navigation_bar)).await
}

#[tauri::command]
pub(crate) async fn set_status_bar_style<R: Runtime>(
    app: AppHandle<R>,
    style: Option<String>,
) -> Result<()> {
    let style = bar_style(style)?;
    on_ui_thread(&app, move |edge| edge.set_status_bar_style(style)).await
}

#[tauri::command]
pub(crate) async fn set_navigation_bar_style<R: Runtime>(
    app: AppHandle<R>,
    style: Option<String>,
) -> Result<()> {
    let style = bar_style(style)?;
    on_ui_thread(&app, move |edge| edge.set_navigation_bar_style(style)).await
}

#[tauri::command]
pub(crate) async fn set_status_bar_appearance<R: Runtime>(
    app: AppHandle<R>,
    light: Option<bool>,
) -> Result<()> {
    let light = required(light, ERROR_LIGHT_MISSING)?;
    on_ui_thread(&app, move |edge| edge.set_status_bar_appearance(light)).await
}

#[tauri::command]
pub(crate) async fn set_navigation_bar_appearance<R: Runtime>(
    app: AppHandle<R>,
    light: Option<bool>,
) -> Result<()> {
    let light = required(light, ERROR_LIGHT_MISSING)?;
    on_ui_thread(&app, move |edge| edge.set_navigation_bar_appearance(light)).await
}

#[tauri::command]
pub(crate) async fn set_navigation_bar_contrast_enforced<R: Runtime>(
    app: AppHandle<R>,
    enforce: Option<bool>,
) -> Result<()> {
    let enforce = required(enforce, ERROR_ENFORCE_MISSING)?;
    on_ui_thread(&app, move |edge| edge.set_navigation_bar_contrast_enforced(enforce)).await
}

#[tauri::command]
pub(crate) async fn enter_immersive_mode<R: Runtime>(app: AppHandle<R>) -> Result<()> {
    on_ui_thread(&app, |edge| edge.enter_immersive_mode()).await
}

#[tauri::command]
pub(crate) async fn exit_immersive_mode<R: Runtime>(app: AppHandle<R>) -> Result<()> {
    on_ui_thread(&app, |edge| edge.exit_immersive_mode()).await
}

#[tauri::command]
pub(crate) async fn set_immersive_mode<R: Runtime>(
    app: AppHandle<R>,
    enter: Option<bool>,
) -> Result<()> {
    let enter = required(enter, ERROR_ENTER_MISSING)?;
    on_ui_thread(&app, move |edge| edge.set_immersive_mode(enter)).await
}

#[tauri::command]
pub(crate) async fn is_immersive_mode<R: Runtime>(
    app: AppHandle<R>,
) -> Result<ImmersiveModeResult> {
    on_ui_thread(&app, |edge| {
        Ok(ImmersiveModeResult {
            is_immersive_mode: edge.is_immersive_mode(),
        })
    })
    .await
}

#[tauri::command]
pub(crate) async fn set_keyboard_animation<R: Runtime>(
    app: AppHandle<R>,
    enabled: Option<bool>,
) -> Result<()> {
    let enabled = required(enabled, ERROR_ENABLED_MISSING)?;
    on_ui_thread(&app, move |edge| edge.set_keyboard_animation(enabled)).await
}

#[tauri::command]
#[allow(clippy::too_many_arguments)]
pub(crate) async fn configure<R: Runtime>(
    app: AppHandle<R>,
    light_status_bar: Option<bool>,
    light_navigation_bar: Option<bool>,
    status_bar_color: Option<String>,
    navigation_bar_color: Option<String>,
    enforce_contrast: Option<bool>,
    immersive: Option<bool>,
) -> Result<()> {
    let options = ConfigureOptions {
        light_status_bar: light_status_bar.unwrap_or_default(),
        light_navigation_bar: light_navigation_bar.unwrap_or_default(),
        status_bar_color,
        navigation_bar_color,
        enforce_contrast: enforce_contrast.unwrap_or_default(),
        immersive,
    };
    on_ui_thread(&app, move |edge| edge.configure(&options)).await
}

#[tauri::command]
pub(crate) async fn configure_for_gesture_navigation<R: Runtime>(
    app: AppHandle<R>,
    status_bar_color: Option<String>,
    light_status_bar: Option<bool>,
    light_navigation_bar: Option<bool>,
) -> Result<GestureNavigationResult> {
    let options = GestureNavigationOptions {
        status_bar_color,
        light_status_bar,
        light_navigation_bar,
    };
    on_ui_thread(&app, move |edge| {
        let is_gesture_navigation = edge.configure_for_gesture_navigation(&options)?;
        Ok(GestureNavigationResult {
            is_gesture_navigation,
        })
    })
    .await
}

#[tauri::command]
pub(crate) async fn force_transparent_navigation_bar<R: Runtime>(app: AppHandle<R>) -> Result<()> {
    on_ui_thread(&app, |edge| edge.force_transparent_navigation_bar()).await
}

#[tauri::command]
pub(crate) async fn check_gesture_navigation<R: Runtime>(
    app: AppHandle<R>,
) -> Result<GestureNavigationResult> {
    on_ui_thread(&app, |edge| {
        Ok(GestureNavigationResult {
            is_gesture_navigation: edge.check_gesture_navigation()?,
        })
    })
    .await
}

#[tauri::command]
pub(crate) async fn set_configuration<R: Runtime>(
    app: AppHandle<R>,
    disable_edge_to_edge_for_gesture: Option<bool>,
) -> Result<()> {
    let disable = required(disable_edge_to_edge_for_gesture, ERROR_GESTURE_FLAG_MISSING)?;
    on_ui_thread(&app, move |edge| edge.set_configuration(disable)).await
}

fn any_color(colors: &[&Option<String>]) -> Result<()> {
    if colors.iter().all(|color| color.is_none()) {
        return Err(Error::MissingParameter(ERROR_COLOR_MISSING));
    }
    Ok(())
}

fn style_and_color(style: Option<String>, color: Option<String>) -> Result<(BarStyle, String)> {
    match (style, color) {
        (Some(style), Some(color)) => Ok((BarStyle::parse(&style), color)),
        _ => Err(Error::MissingParameter(ERROR_STYLE_AND_COLOR_MISSING)),
    }
}

fn bar_style(style: Option<String>) -> Result<BarStyle> {
    required(style, ERROR_STYLE_MISSING).map(|style| BarStyle::parse(&style))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: Error) -> String {
        err.to_string()
    }

    #[test]
    fn background_color_needs_at_least_one_color() {
        let err = any_color(&[&None, &None, &None]).unwrap_err();
        assert_eq!(message(err), "color must be provided.");

        assert!(any_color(&[&None, &Some("#000000".into()), &None]).is_ok());
    }

    #[test]
    fn background_color_and_style_needs_both_arguments() {
        for (style, color) in [
            (None, Some("#ffffff".to_string())),
            (Some("Dark".to_string()), None),
            (None, None),
        ] {
            let err = style_and_color(style, color).unwrap_err();
            assert_eq!(message(err), "style and color must be provided.");
        }

        let (style, color) =
            style_and_color(Some("dark".into()), Some("#ffffff".into())).expect("arguments");
        assert_eq!(style, BarStyle::Dark);
        assert_eq!(color, "#ffffff");
    }

    #[test]
    fn bar_style_is_required_and_lenient() {
        assert_eq!(message(bar_style(None).unwrap_err()), "style must be provided.");
        assert_eq!(bar_style(Some("DARK".into())).expect("style"), BarStyle::Dark);
        assert_eq!(bar_style(Some("other".into())).expect("style"), BarStyle::Light);
    }

    #[test]
    fn boolean_arguments_reject_with_their_own_message() {
        let cases = [
            (ERROR_LIGHT_MISSING, "light must be provided."),
            (ERROR_ENFORCE_MISSING, "enforce must be provided."),
            (ERROR_ENABLED_MISSING, "enabled must be provided."),
            (ERROR_ENTER_MISSING, "enter must be provided."),
            (
                ERROR_GESTURE_FLAG_MISSING,
                "disableEdgeToEdgeForGesture must be provided.",
            ),
        ];
        for (constant, expected) in cases {
            let err = required::<bool>(None, constant).unwrap_err();
            assert_eq!(message(err), expected);
        }
    }
}
