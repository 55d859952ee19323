//! JNI bindings to the hosting activity's window.
//!
//! Framework classes are reached through `ndk-context`, which the Tauri
//! runtime initializes with the JavaVM and the activity. The two callback
//! classes under `android/` are loaded through the activity's class loader
//! because `FindClass` from a native frame only sees the system loader.

use std::sync::OnceLock;

use jni::objects::{GlobalRef, JClass, JObject, JString, JValue, JValueOwned};
use jni::sys::jlong;
use jni::{JNIEnv, JavaVM};
use log::{debug, error, warn};

use super::{sdk, ui_flags, SystemBarsBehavior, SystemWindow, UiTask};
use crate::error::{Error, Result};
use crate::models::{Insets, WindowInsetsSnapshot};
use crate::services::color::Color;

const LOCAL_FRAME_CAPACITY: i32 = 32;

/// `android.R.id.content`
const CONTENT_VIEW_ID: i32 = 0x0102_0002;

const INSETS_LISTENER_CLASS: &str = "com.plugin.edgetoedge.InsetsListener";
const KEYBOARD_ANIMATION_CLASS: &str = "com.plugin.edgetoedge.KeyboardAnimationCallback";
const UI_THREAD_CLASS: &str = "com.plugin.edgetoedge.UiThread";

// WindowInsetsController.APPEARANCE_LIGHT_*
const APPEARANCE_LIGHT_STATUS_BARS: i32 = 8;
const APPEARANCE_LIGHT_NAVIGATION_BARS: i32 = 16;

const IMMERSIVE_FLAGS: i32 =
    ui_flags::FULLSCREEN | ui_flags::HIDE_NAVIGATION | ui_flags::IMMERSIVE_STICKY;

pub type InsetsSink = Box<dyn Fn(WindowInsetsSnapshot) + Send + Sync>;

static INSETS_SINK: OnceLock<InsetsSink> = OnceLock::new();

/// Registers the receiver of insets dispatched to the web view listener.
pub fn set_insets_sink(sink: InsetsSink) {
    if INSETS_SINK.set(sink).is_err() {
        warn!("[EdgeToEdge] Insets sink already registered");
    }
}

/// Posts `task` to the activity's UI thread through `UiThread.post`.
///
/// Ownership of the task passes to Java as a raw pointer and comes back in
/// `nativeRun`, which runs it exactly once.
pub fn run_on_ui_thread(task: UiTask) -> Result<()> {
    let ctx = ndk_context::android_context();
    // SAFETY: see `AndroidWindow::from_context`.
    let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }?;
    let mut env = vm.attach_current_thread()?;
    let activity = unsafe { JObject::from_raw(ctx.context().cast()) };

    let handle = Box::into_raw(Box::new(task)) as jlong;
    let posted = env.with_local_frame(LOCAL_FRAME_CAPACITY, |env| -> Result<()> {
        let class = app_class(env, &activity, UI_THREAD_CLASS)?;
        let args = [JValue::Object(&activity), JValue::Long(handle)];
        match env.call_static_method(&class, "post", "(Landroid/app/Activity;J)V", &args) {
            Ok(_) => Ok(()),
            Err(e) => Err(platform_error(env, e)),
        }
    });
    if posted.is_err() {
        // Java never took the task.
        // SAFETY: `handle` came from `Box::into_raw` above and was not posted.
        drop(unsafe { Box::from_raw(handle as *mut UiTask) });
    }
    posted
}

pub struct AndroidWindow {
    vm: JavaVM,
    activity: GlobalRef,
    sdk_int: i32,
}

impl AndroidWindow {
    pub fn from_context() -> Result<Self> {
        let ctx = ndk_context::android_context();
        // SAFETY: ndk-context hands out the process JavaVM and a live
        // activity reference for the lifetime of the app.
        let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }?;
        let (activity, sdk_int) = {
            let mut env = vm.attach_current_thread()?;
            let activity = unsafe { JObject::from_raw(ctx.context().cast()) };
            (env.new_global_ref(&activity)?, read_sdk_int(&mut env)?)
        };
        debug!("[EdgeToEdge] Bound to activity window (API {})", sdk_int);
        Ok(Self {
            vm,
            activity,
            sdk_int,
        })
    }

    fn with_env<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut JNIEnv, &JObject) -> Result<T>,
    {
        let mut env = self.vm.attach_current_thread()?;
        let activity = self.activity.as_obj();
        env.with_local_frame(LOCAL_FRAME_CAPACITY, |env| f(env, activity))
    }

    fn with_window<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut JNIEnv, &JObject) -> Result<T>,
    {
        self.with_env(|env, activity| {
            let window = window(env, activity)?;
            f(env, &window)
        })
    }

    fn with_webview<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut JNIEnv, &JObject, &JObject) -> Result<T>,
    {
        self.with_env(|env, activity| {
            let view = webview(env, activity)?;
            f(env, activity, &view)
        })
    }

    /// Runs `f` with the insets controller, or returns false without one.
    fn with_controller<F>(&self, f: F) -> Result<bool>
    where
        F: FnOnce(&mut JNIEnv, &JObject) -> Result<()>,
    {
        if self.sdk_int < sdk::R {
            return Ok(false);
        }
        self.with_window(|env, window| {
            let controller = object(
                env,
                window,
                "getInsetsController",
                "()Landroid/view/WindowInsetsController;",
            )?;
            if controller.is_null() {
                return Ok(false);
            }
            f(env, &controller)?;
            Ok(true)
        })
    }

    fn update_ui_flags(&self, set: i32, clear: i32) -> Result<()> {
        self.with_window(|env, window| {
            let decor = decor_view(env, window)?;
            let flags = call(env, &decor, "getSystemUiVisibility", "()I", &[])?.i()?;
            call(
                env,
                &decor,
                "setSystemUiVisibility",
                "(I)V",
                &[JValue::Int((flags | set) & !clear)],
            )?;
            Ok(())
        })
    }
}

impl SystemWindow for AndroidWindow {
    fn sdk_int(&self) -> i32 {
        self.sdk_int
    }

    fn set_decor_fits_system_windows(&mut self, fits: bool) -> Result<()> {
        // Earlier releases express this through layout flags.
        if self.sdk_int < sdk::R {
            return Ok(());
        }
        self.with_window(|env, window| {
            call(
                env,
                window,
                "setDecorFitsSystemWindows",
                "(Z)V",
                &[JValue::Bool(fits.into())],
            )?;
            Ok(())
        })
    }

    fn system_ui_visibility(&mut self) -> Result<i32> {
        self.with_window(|env, window| {
            let decor = decor_view(env, window)?;
            Ok(call(env, &decor, "getSystemUiVisibility", "()I", &[])?.i()?)
        })
    }

    fn set_system_ui_visibility(&mut self, flags: i32) -> Result<()> {
        self.with_window(|env, window| {
            let decor = decor_view(env, window)?;
            call(
                env,
                &decor,
                "setSystemUiVisibility",
                "(I)V",
                &[JValue::Int(flags)],
            )?;
            Ok(())
        })
    }

    fn root_window_insets(&mut self) -> Result<Option<WindowInsetsSnapshot>> {
        if self.sdk_int < sdk::M {
            return Ok(None);
        }
        let sdk_int = self.sdk_int;
        self.with_webview(|env, _, view| {
            let insets = object(
                env,
                view,
                "getRootWindowInsets",
                "()Landroid/view/WindowInsets;",
            )?;
            if insets.is_null() {
                return Ok(None);
            }
            read_insets(env, sdk_int, &insets).map(Some)
        })
    }

    fn webview_margins(&mut self) -> Result<Insets> {
        self.with_webview(|env, _, view| {
            let params = margin_layout_params(env, view)?;
            Ok(Insets {
                top: int_field(env, &params, "topMargin")?,
                left: int_field(env, &params, "leftMargin")?,
                right: int_field(env, &params, "rightMargin")?,
                bottom: int_field(env, &params, "bottomMargin")?,
            })
        })
    }

    fn set_webview_margins(&mut self, margins: Insets) -> Result<()> {
        self.with_webview(|env, _, view| {
            let params = margin_layout_params(env, view)?;
            let fields = [
                ("topMargin", margins.top),
                ("leftMargin", margins.left),
                ("rightMargin", margins.right),
                ("bottomMargin", margins.bottom),
            ];
            for (name, value) in fields {
                env.set_field(&params, name, "I", JValue::Int(value))?;
            }
            call(
                env,
                view,
                "setLayoutParams",
                "(Landroid/view/ViewGroup$LayoutParams;)V",
                &[JValue::Object(&params)],
            )?;
            Ok(())
        })
    }

    fn set_insets_listener(&mut self, attached: bool) -> Result<()> {
        self.with_webview(|env, activity, view| {
            let listener = if attached {
                new_app_object(env, activity, INSETS_LISTENER_CLASS)?
            } else {
                JObject::null()
            };
            call(
                env,
                view,
                "setOnApplyWindowInsetsListener",
                "(Landroid/view/View$OnApplyWindowInsetsListener;)V",
                &[JValue::Object(&listener)],
            )?;
            if attached {
                call(env, view, "requestApplyInsets", "()V", &[])?;
            }
            Ok(())
        })
    }

    fn set_keyboard_animation_callback(&mut self, attached: bool) -> Result<()> {
        if self.sdk_int < sdk::R {
            debug!("[EdgeToEdge] Keyboard animation callbacks need API 30");
            return Ok(());
        }
        self.with_webview(|env, activity, view| {
            let callback = if attached {
                new_app_object(env, activity, KEYBOARD_ANIMATION_CLASS)?
            } else {
                JObject::null()
            };
            call(
                env,
                view,
                "setWindowInsetsAnimationCallback",
                "(Landroid/view/WindowInsetsAnimation$Callback;)V",
                &[JValue::Object(&callback)],
            )?;
            Ok(())
        })
    }

    fn set_status_bar_color(&mut self, color: Color) -> Result<()> {
        self.with_window(|env, window| {
            call(
                env,
                window,
                "setStatusBarColor",
                "(I)V",
                &[JValue::Int(color.to_argb_i32())],
            )?;
            Ok(())
        })
    }

    fn set_navigation_bar_color(&mut self, color: Color) -> Result<()> {
        self.with_window(|env, window| {
            call(
                env,
                window,
                "setNavigationBarColor",
                "(I)V",
                &[JValue::Int(color.to_argb_i32())],
            )?;
            Ok(())
        })
    }

    fn set_navigation_bar_contrast_enforced(&mut self, enforce: bool) -> Result<()> {
        self.with_window(|env, window| {
            call(
                env,
                window,
                "setNavigationBarContrastEnforced",
                "(Z)V",
                &[JValue::Bool(enforce.into())],
            )?;
            Ok(())
        })
    }

    fn set_background_color(&mut self, color: Color) -> Result<()> {
        self.with_window(|env, window| {
            let decor = decor_view(env, window)?;
            call(
                env,
                &decor,
                "setBackgroundColor",
                "(I)V",
                &[JValue::Int(color.to_argb_i32())],
            )?;
            Ok(())
        })
    }

    fn set_appearance_light_status_bars(&mut self, light: bool) -> Result<bool> {
        if self.sdk_int >= sdk::R {
            return self.with_controller(|env, controller| {
                set_appearance(env, controller, APPEARANCE_LIGHT_STATUS_BARS, light)
            });
        }
        let (set, clear) = toggle(ui_flags::LIGHT_STATUS_BAR, light);
        self.update_ui_flags(set, clear)?;
        Ok(true)
    }

    fn set_appearance_light_navigation_bars(&mut self, light: bool) -> Result<bool> {
        if self.sdk_int >= sdk::R {
            return self.with_controller(|env, controller| {
                set_appearance(env, controller, APPEARANCE_LIGHT_NAVIGATION_BARS, light)
            });
        }
        let (set, clear) = toggle(ui_flags::LIGHT_NAVIGATION_BAR, light);
        self.update_ui_flags(set, clear)?;
        Ok(true)
    }

    fn set_system_bars_behavior(&mut self, behavior: SystemBarsBehavior) -> Result<bool> {
        self.with_controller(|env, controller| {
            call(
                env,
                controller,
                "setSystemBarsBehavior",
                "(I)V",
                &[JValue::Int(behavior.as_raw())],
            )?;
            Ok(())
        })
    }

    fn hide_system_bars(&mut self) -> Result<bool> {
        if self.sdk_int >= sdk::R {
            return self.with_controller(|env, controller| {
                let types = insets_type(env, "systemBars")?;
                call(env, controller, "hide", "(I)V", &[JValue::Int(types)])?;
                Ok(())
            });
        }
        self.update_ui_flags(IMMERSIVE_FLAGS, 0)?;
        Ok(true)
    }

    fn show_system_bars(&mut self) -> Result<bool> {
        if self.sdk_int >= sdk::R {
            return self.with_controller(|env, controller| {
                let types = insets_type(env, "systemBars")?;
                call(env, controller, "show", "(I)V", &[JValue::Int(types)])?;
                Ok(())
            });
        }
        self.update_ui_flags(0, IMMERSIVE_FLAGS)?;
        Ok(true)
    }
}

/// Called by `InsetsListener.onApplyWindowInsets` on the UI thread.
#[no_mangle]
pub extern "system" fn Java_com_plugin_edgetoedge_InsetsListener_nativeOnApplyWindowInsets(
    mut env: JNIEnv,
    _this: JObject,
    insets: JObject,
) {
    let snapshot =
        read_sdk_int(&mut env).and_then(|sdk_int| read_insets(&mut env, sdk_int, &insets));
    match snapshot {
        Ok(snapshot) => match INSETS_SINK.get() {
            Some(sink) => sink(snapshot),
            None => debug!("[EdgeToEdge] Insets dispatched before plugin setup"),
        },
        Err(e) => error!("[EdgeToEdge] Failed to read window insets: {}", e),
    }
}

/// Called by `UiThread.post` on the UI thread with a task from `run_on_ui_thread`.
#[no_mangle]
pub extern "system" fn Java_com_plugin_edgetoedge_UiThread_nativeRun(
    _env: JNIEnv,
    _class: JClass,
    task: jlong,
) {
    if task == 0 {
        warn!("[EdgeToEdge] UI thread task with null handle");
        return;
    }
    // SAFETY: the handle is a `Box<UiTask>` leaked by `run_on_ui_thread`,
    // and `runOnUiThread` invokes each posted runnable once.
    let task = unsafe { Box::from_raw(task as *mut UiTask) };
    if std::panic::catch_unwind(std::panic::AssertUnwindSafe(task)).is_err() {
        error!("[EdgeToEdge] UI thread task panicked");
    }
}

fn toggle(flag: i32, on: bool) -> (i32, i32) {
    if on {
        (flag, 0)
    } else {
        (0, flag)
    }
}

fn set_appearance(env: &mut JNIEnv, controller: &JObject, mask: i32, light: bool) -> Result<()> {
    let appearance = if light { mask } else { 0 };
    call(
        env,
        controller,
        "setSystemBarsAppearance",
        "(II)V",
        &[JValue::Int(appearance), JValue::Int(mask)],
    )?;
    Ok(())
}

fn read_sdk_int(env: &mut JNIEnv) -> Result<i32> {
    Ok(env
        .get_static_field("android/os/Build$VERSION", "SDK_INT", "I")?
        .i()?)
}

fn read_insets(env: &mut JNIEnv, sdk_int: i32, insets: &JObject) -> Result<WindowInsetsSnapshot> {
    if sdk_int >= sdk::R {
        let system = insets_type(env, "systemBars")? | insets_type(env, "displayCutout")?;
        let ime = insets_type(env, "ime")?;
        let navigation = insets_type(env, "navigationBars")?;
        return Ok(WindowInsetsSnapshot {
            system_bars: insets_of(env, insets, system)?,
            ime: insets_of(env, insets, ime)?,
            ime_visible: call(env, insets, "isVisible", "(I)Z", &[JValue::Int(ime)])?.z()?,
            navigation_bars: insets_of(env, insets, navigation)?,
        });
    }

    let system_bars = Insets {
        top: call(env, insets, "getSystemWindowInsetTop", "()I", &[])?.i()?,
        left: call(env, insets, "getSystemWindowInsetLeft", "()I", &[])?.i()?,
        right: call(env, insets, "getSystemWindowInsetRight", "()I", &[])?.i()?,
        bottom: call(env, insets, "getSystemWindowInsetBottom", "()I", &[])?.i()?,
    };
    Ok(WindowInsetsSnapshot {
        system_bars,
        ime: Insets::ZERO,
        ime_visible: false,
        navigation_bars: Insets {
            bottom: system_bars.bottom,
            ..Insets::ZERO
        },
    })
}

fn insets_of(env: &mut JNIEnv, insets: &JObject, types: i32) -> Result<Insets> {
    let value = object_with(
        env,
        insets,
        "getInsets",
        "(I)Landroid/graphics/Insets;",
        &[JValue::Int(types)],
    )?;
    Ok(Insets {
        top: int_field(env, &value, "top")?,
        left: int_field(env, &value, "left")?,
        right: int_field(env, &value, "right")?,
        bottom: int_field(env, &value, "bottom")?,
    })
}

/// `WindowInsets.Type.<name>()`
fn insets_type(env: &mut JNIEnv, name: &str) -> Result<i32> {
    match env.call_static_method("android/view/WindowInsets$Type", name, "()I", &[]) {
        Ok(value) => Ok(value.i()?),
        Err(e) => Err(platform_error(env, e)),
    }
}

fn window<'l>(env: &mut JNIEnv<'l>, activity: &JObject) -> Result<JObject<'l>> {
    let window = object(env, activity, "getWindow", "()Landroid/view/Window;")?;
    if window.is_null() {
        return Err(Error::Platform("Activity has no window".into()));
    }
    Ok(window)
}

fn decor_view<'l>(env: &mut JNIEnv<'l>, window: &JObject) -> Result<JObject<'l>> {
    let decor = object(env, window, "getDecorView", "()Landroid/view/View;")?;
    if decor.is_null() {
        return Err(Error::Platform("Window has no decor view".into()));
    }
    Ok(decor)
}

/// The web view is the first child of the activity's content frame.
fn webview<'l>(env: &mut JNIEnv<'l>, activity: &JObject) -> Result<JObject<'l>> {
    let content = object_with(
        env,
        activity,
        "findViewById",
        "(I)Landroid/view/View;",
        &[JValue::Int(CONTENT_VIEW_ID)],
    )?;
    if content.is_null() {
        return Err(Error::Platform("Content view not available".into()));
    }
    if call(env, &content, "getChildCount", "()I", &[])?.i()? == 0 {
        return Err(Error::Platform("Web view not attached".into()));
    }
    object_with(
        env,
        &content,
        "getChildAt",
        "(I)Landroid/view/View;",
        &[JValue::Int(0)],
    )
}

fn margin_layout_params<'l>(env: &mut JNIEnv<'l>, view: &JObject) -> Result<JObject<'l>> {
    let params = object(
        env,
        view,
        "getLayoutParams",
        "()Landroid/view/ViewGroup$LayoutParams;",
    )?;
    if params.is_null()
        || !env.is_instance_of(&params, "android/view/ViewGroup$MarginLayoutParams")?
    {
        return Err(Error::Platform("Web view has no margin layout params".into()));
    }
    Ok(params)
}

/// Loads one of the bundled helper classes through the activity's loader.
fn app_class<'l>(env: &mut JNIEnv<'l>, activity: &JObject, class_name: &str) -> Result<JClass<'l>> {
    let loader = object(env, activity, "getClassLoader", "()Ljava/lang/ClassLoader;")?;
    let name = env.new_string(class_name)?;
    let class = object_with(
        env,
        &loader,
        "loadClass",
        "(Ljava/lang/String;)Ljava/lang/Class;",
        &[(&name).into()],
    )?;
    Ok(JClass::from(class))
}

fn new_app_object<'l>(
    env: &mut JNIEnv<'l>,
    activity: &JObject,
    class_name: &str,
) -> Result<JObject<'l>> {
    let class = app_class(env, activity, class_name)?;
    match env.new_object(&class, "()V", &[]) {
        Ok(instance) => Ok(instance),
        Err(e) => Err(platform_error(env, e)),
    }
}

fn int_field(env: &mut JNIEnv, object: &JObject, name: &str) -> Result<i32> {
    Ok(env.get_field(object, name, "I")?.i()?)
}

fn object<'l>(
    env: &mut JNIEnv<'l>,
    target: &JObject,
    name: &str,
    sig: &str,
) -> Result<JObject<'l>> {
    object_with(env, target, name, sig, &[])
}

fn object_with<'l>(
    env: &mut JNIEnv<'l>,
    target: &JObject,
    name: &str,
    sig: &str,
    args: &[JValue],
) -> Result<JObject<'l>> {
    Ok(call(env, target, name, sig, args)?.l()?)
}

fn call<'l>(
    env: &mut JNIEnv<'l>,
    target: &JObject,
    name: &str,
    sig: &str,
    args: &[JValue],
) -> Result<JValueOwned<'l>> {
    match env.call_method(target, name, sig, args) {
        Ok(value) => Ok(value),
        Err(e) => Err(platform_error(env, e)),
    }
}

/// Clears a pending Java exception and surfaces its message.
fn platform_error(env: &mut JNIEnv, err: jni::errors::Error) -> Error {
    if !matches!(err, jni::errors::Error::JavaException) {
        return Error::Jni(err);
    }
    match exception_message(env) {
        Some(message) => Error::Platform(message),
        None => Error::Jni(err),
    }
}

fn exception_message(env: &mut JNIEnv) -> Option<String> {
    let throwable = env.exception_occurred().ok()?;
    env.exception_clear().ok()?;
    if throwable.is_null() {
        return None;
    }
    let mut message = env
        .call_method(&throwable, "getMessage", "()Ljava/lang/String;", &[])
        .ok()?
        .l()
        .ok()?;
    if message.is_null() {
        message = env
            .call_method(&throwable, "toString", "()Ljava/lang/String;", &[])
            .ok()?
            .l()
            .ok()?;
    }
    let message = JString::from(message);
    env.get_string(&message).ok().map(String::from)
}
