const COMMANDS: &[&str] = &[
    "enable",
    "disable",
    "get_insets",
    "set_background_color",
    "set_status_bar_color",
    "set_navigation_bar_color",
    "set_background_color_and_style",
    "set_style",
    "set_status_bar_style",
    "set_navigation_bar_style",
    "set_status_bar_appearance",
    "set_navigation_bar_appearance",
    "set_navigation_bar_contrast_enforced",
    "enter_immersive_mode",
    "exit_immersive_mode",
    "set_immersive_mode",
    "is_immersive_mode",
    "set_keyboard_animation",
    "configure",
    "configure_for_gesture_navigation",
    "force_transparent_navigation_bar",
    "check_gesture_navigation",
    "set_configuration",
];

fn main() {
    // The Kotlin helpers in android/ are compiled into the host app so the
    // JNI layer can load them through the activity's class loader.
    tauri_plugin::Builder::new(COMMANDS)
        .android_path("android")
        .build();
}
