//! Windows Registry access.
//!
//! Reads the installed OS build number from the machine-wide version key and
//! writes the desktop icon spacing values to the current user's
//! window-metrics key. Key handles are held in a scoped guard so they are
//! released exactly once on every path.

use windows::core::PCWSTR;
use windows::Win32::Foundation::ERROR_SUCCESS;
use windows::Win32::System::Registry::{
    RegCloseKey, RegOpenKeyExW, RegQueryValueExW, RegSetValueExW, HKEY, HKEY_CURRENT_USER,
    HKEY_LOCAL_MACHINE, KEY_QUERY_VALUE, KEY_SET_VALUE, REG_EXPAND_SZ, REG_SAM_FLAGS, REG_SZ,
    REG_VALUE_TYPE,
};

use crate::error::RegistryError;
use crate::spacing::Preset;

/// First Windows 11 build number.
pub const WINDOWS_11_FIRST_BUILD: u32 = 22000;

const CURRENT_VERSION_KEY: &str = r"SOFTWARE\Microsoft\Windows NT\CurrentVersion";
const CURRENT_BUILD_VALUE: &str = "CurrentBuildNumber";

const WINDOW_METRICS_KEY: &str = r"Control Panel\Desktop\WindowMetrics\";
const ICON_SPACING_VALUE: &str = "IconSpacing";
const ICON_VERTICAL_SPACING_VALUE: &str = "IconVerticalSpacing";

/// Whether the host runs Windows 11 or later.
pub fn is_windows_eleven() -> Result<bool, RegistryError> {
    Ok(current_build_number()? >= WINDOWS_11_FIRST_BUILD)
}

/// Read the OS build number from the machine-wide version key.
pub fn current_build_number() -> Result<u32, RegistryError> {
    let key = open_key(HKEY_LOCAL_MACHINE, CURRENT_VERSION_KEY, KEY_QUERY_VALUE)?;
    let text = read_string_value(&key, CURRENT_BUILD_VALUE)?;
    let build = text.parse().map_err(|_| RegistryError::InvalidValue {
        name: CURRENT_BUILD_VALUE.to_string(),
    })?;
    tracing::debug!(build, "read current build number");
    Ok(build)
}

/// Write a preset's value to both icon spacing entries of the current
/// user's window-metrics key.
///
/// The two writes are sequential and independent; if the second fails the
/// first stays in place. The key handle is released whichever way this
/// returns.
pub fn apply_icon_spacing(preset: Preset) -> Result<(), RegistryError> {
    let key = open_key(HKEY_CURRENT_USER, WINDOW_METRICS_KEY, KEY_SET_VALUE)?;
    let value = preset.registry_value();
    set_string_value(&key, ICON_SPACING_VALUE, value)?;
    set_string_value(&key, ICON_VERTICAL_SPACING_VALUE, value)?;
    Ok(())
}

/// Open registry key handle, closed exactly once when dropped.
struct OwnedKey(HKEY);

impl OwnedKey {
    fn raw(&self) -> HKEY {
        self.0
    }
}

impl Drop for OwnedKey {
    fn drop(&mut self) {
        // SAFETY: the handle was opened by RegOpenKeyExW and is closed only
        // here. The close result is discarded so it cannot mask an earlier
        // error.
        let _ = unsafe { RegCloseKey(self.0) };
    }
}

/// Convert a Rust string to a null-terminated UTF-16 buffer for Win32 APIs.
fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

fn open_key(root: HKEY, path: &str, access: REG_SAM_FLAGS) -> Result<OwnedKey, RegistryError> {
    let path_wide = to_wide(path);
    let mut handle = HKEY::default();

    // SAFETY: path_wide is a valid null-terminated UTF-16 buffer that
    // outlives the call; handle receives the opened key.
    let result = unsafe {
        RegOpenKeyExW(
            root,
            PCWSTR::from_raw(path_wide.as_ptr()),
            0,
            access,
            &mut handle,
        )
    };

    if result != ERROR_SUCCESS {
        return Err(RegistryError::OpenKey {
            path: path.to_string(),
            code: result.0,
        });
    }

    tracing::debug!(path, "opened registry key");
    Ok(OwnedKey(handle))
}

fn read_string_value(key: &OwnedKey, name: &str) -> Result<String, RegistryError> {
    let name_wide = to_wide(name);
    let mut value_type = REG_VALUE_TYPE::default();
    let mut data_size: u32 = 0;

    // SAFETY: name_wide is a valid null-terminated UTF-16 buffer; a null
    // data pointer asks only for the value's type and size.
    let result = unsafe {
        RegQueryValueExW(
            key.raw(),
            PCWSTR::from_raw(name_wide.as_ptr()),
            None,
            Some(&mut value_type),
            None,
            Some(&mut data_size),
        )
    };
    if result != ERROR_SUCCESS {
        return Err(RegistryError::ReadValue {
            name: name.to_string(),
            code: result.0,
        });
    }
    if value_type != REG_SZ && value_type != REG_EXPAND_SZ {
        return Err(RegistryError::InvalidValue {
            name: name.to_string(),
        });
    }

    let mut buf = vec![0u16; (data_size as usize + 1) / 2];

    // SAFETY: buf is writable for data_size bytes, the size the previous
    // query reported for the value.
    let result = unsafe {
        RegQueryValueExW(
            key.raw(),
            PCWSTR::from_raw(name_wide.as_ptr()),
            None,
            None,
            Some(buf.as_mut_ptr() as *mut u8),
            Some(&mut data_size),
        )
    };
    if result != ERROR_SUCCESS {
        return Err(RegistryError::ReadValue {
            name: name.to_string(),
            code: result.0,
        });
    }

    // The reported size counts bytes including the terminating NUL.
    buf.truncate(data_size as usize / 2);
    while buf.last() == Some(&0) {
        buf.pop();
    }
    Ok(String::from_utf16_lossy(&buf))
}

fn set_string_value(key: &OwnedKey, name: &str, value: &str) -> Result<(), RegistryError> {
    let name_wide = to_wide(name);
    let value_wide = to_wide(value);

    // SAFETY: value_wide lives across the call; the byte length counts every
    // UTF-16 unit including the terminator.
    let result = unsafe {
        let data =
            std::slice::from_raw_parts(value_wide.as_ptr() as *const u8, value_wide.len() * 2);
        RegSetValueExW(
            key.raw(),
            PCWSTR::from_raw(name_wide.as_ptr()),
            0,
            REG_SZ,
            Some(data),
        )
    };

    if result != ERROR_SUCCESS {
        return Err(RegistryError::WriteValue {
            name: name.to_string(),
            code: result.0,
        });
    }

    tracing::debug!(name, value, "wrote registry value");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows::Win32::System::Registry::RegDeleteValueW;

    const TEST_VALUE_NAME: &str = "IconSpacing_Test_Value_Delete_Me";

    fn delete_test_value(key: &OwnedKey) {
        let name_wide = to_wide(TEST_VALUE_NAME);
        let _ = unsafe { RegDeleteValueW(key.raw(), PCWSTR::from_raw(name_wide.as_ptr())) };
    }

    #[test]
    fn build_number_is_readable_and_plausible() {
        let build = current_build_number().expect("read build number");
        assert!(build > 0);
    }

    #[test]
    fn string_values_round_trip_on_the_metrics_key() {
        // The window-metrics key always exists; the test writes a scratch
        // value, never the real spacing entries, and removes it afterwards.
        let key = open_key(
            HKEY_CURRENT_USER,
            WINDOW_METRICS_KEY,
            KEY_QUERY_VALUE | KEY_SET_VALUE,
        )
        .expect("open metrics key");

        set_string_value(&key, TEST_VALUE_NAME, "-1592").expect("write value");
        let read = read_string_value(&key, TEST_VALUE_NAME).expect("read value");
        delete_test_value(&key);

        assert_eq!(read, "-1592");
    }

    #[test]
    fn missing_values_report_the_failure_code() {
        let key = open_key(HKEY_LOCAL_MACHINE, CURRENT_VERSION_KEY, KEY_QUERY_VALUE)
            .expect("open version key");
        let err = read_string_value(&key, "NoSuchValueName").unwrap_err();
        match err {
            RegistryError::ReadValue { name, code } => {
                assert_eq!(name, "NoSuchValueName");
                assert_ne!(code, 0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
