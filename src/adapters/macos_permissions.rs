#[cfg(target_os = "macos")]
pub mod macos {
    use core_foundation::base::TCFType;
    use core_foundation::boolean::CFBoolean;
    use core_foundation::dictionary::CFDictionary;
    use core_foundation::string::CFString;
    use std::ffi::CStr;
    use std::process::Command;

    use crate::global_constants::LOG_TAG_PERMISSIONS;

    const CORE_GRAPHICS_PATH: &CStr =
        c"/System/Library/Frameworks/CoreGraphics.framework/CoreGraphics";
    const APPLICATION_SERVICES_PATH: &CStr =
        c"/System/Library/Frameworks/ApplicationServices.framework/ApplicationServices";
    const SCREEN_CAPTURE_PANE: &str =
        "x-apple.systempreferences:com.apple.preference.security?Privacy_ScreenCapture";

    /// Resolves `symbol` in `framework` and hands it to `call`. Returns `missing` when
    /// either lookup fails.
    fn with_framework_symbol<T>(
        framework: &CStr,
        symbol: &CStr,
        missing: T,
        call: impl FnOnce(*mut libc::c_void) -> T,
    ) -> T {
        unsafe {
            let lib = libc::dlopen(framework.as_ptr(), libc::RTLD_LAZY);
            if lib.is_null() {
                log::warn!("{} could not load {:?}", LOG_TAG_PERMISSIONS, framework);
                return missing;
            }

            let func_ptr = libc::dlsym(lib, symbol.as_ptr());
            let result = if func_ptr.is_null() {
                log::warn!("{} {:?} not found", LOG_TAG_PERMISSIONS, symbol);
                missing
            } else {
                call(func_ptr)
            };

            libc::dlclose(lib);
            result
        }
    }

    /// Non-prompting preflight; `true` on systems that predate the API.
    pub fn check_screen_recording_permission() -> bool {
        type PreflightFn = unsafe extern "C" fn() -> bool;

        with_framework_symbol(
            CORE_GRAPHICS_PATH,
            c"CGPreflightScreenCaptureAccess",
            true,
            |func_ptr| unsafe {
                let preflight: PreflightFn = std::mem::transmute(func_ptr);
                preflight()
            },
        )
    }

    /// Grabbing global input needs accessibility trust. Shows the system prompt when
    /// the process is not trusted yet.
    pub fn check_accessibility_permission() -> bool {
        type TrustedWithOptionsFn = unsafe extern "C" fn(*const libc::c_void) -> bool;

        let trusted = with_framework_symbol(
            APPLICATION_SERVICES_PATH,
            c"AXIsProcessTrustedWithOptions",
            true,
            |func_ptr| unsafe {
                let is_trusted: TrustedWithOptionsFn = std::mem::transmute(func_ptr);
                let key = CFString::from_static_string("AXTrustedCheckOptionPrompt");
                let options = CFDictionary::from_CFType_pairs(&[(
                    key,
                    CFBoolean::true_value().as_CFType(),
                )]);
                is_trusted(options.as_concrete_TypeRef() as *const libc::c_void)
            },
        );

        log::info!("{} accessibility trusted: {}", LOG_TAG_PERMISSIONS, trusted);
        trusted
    }

    pub fn open_screen_recording_settings() {
        match Command::new("open").arg(SCREEN_CAPTURE_PANE).status() {
            Ok(status) if status.success() => {
                log::info!("{} opened screen recording settings", LOG_TAG_PERMISSIONS);
            }
            Ok(status) => log::error!(
                "{} open exited with {:?}",
                LOG_TAG_PERMISSIONS,
                status.code()
            ),
            Err(error) => log::error!(
                "{} failed to run open: {}",
                LOG_TAG_PERMISSIONS,
                error
            ),
        }
    }
}

#[cfg(not(target_os = "macos"))]
pub mod macos {
    pub fn check_screen_recording_permission() -> bool {
        true
    }

    pub fn check_accessibility_permission() -> bool {
        true
    }

    pub fn open_screen_recording_settings() {}
}

#[cfg(test)]
mod tests {
    use super::macos;

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_permissions_are_granted_off_macos() {
        assert!(macos::check_screen_recording_permission());
        assert!(macos::check_accessibility_permission());
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_screen_recording_check_does_not_panic() {
        let _ = macos::check_screen_recording_permission();
    }
}
