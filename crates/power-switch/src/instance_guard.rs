use crate::AppResult;

#[cfg(target_os = "windows")]
use {crate::AppError, error_location::ErrorLocation, std::panic::Location};

use tracing::debug;

/// RAII guard that holds the process-wide single-instance lock.
///
/// Backed by a named mutex on Windows. Dropping the guard closes the handle,
/// letting a new instance start.
pub struct InstanceGuard {
    #[cfg(target_os = "windows")]
    handle: windows_sys::Win32::Foundation::HANDLE,
}

impl InstanceGuard {
    /// Try to become the only running instance.
    ///
    /// Returns `Ok(None)` if another instance already holds `name`.
    #[cfg(target_os = "windows")]
    #[track_caller]
    pub fn acquire(name: &str) -> AppResult<Option<Self>> {
        use windows_sys::Win32::{
            Foundation::{CloseHandle, ERROR_ALREADY_EXISTS, GetLastError},
            System::Threading::CreateMutexW,
        };

        let wide: Vec<u16> = name.encode_utf16().chain(std::iter::once(0)).collect();

        // SAFETY: `wide` is NUL-terminated and outlives the call.
        let handle = unsafe { CreateMutexW(std::ptr::null(), 0, wide.as_ptr()) };
        if handle.is_null() {
            // SAFETY: reads the calling thread's last-error value.
            let code = unsafe { GetLastError() };
            return Err(AppError::InstanceGuardFailed {
                reason: format!("CreateMutexW failed with error {}", code),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // SAFETY: reads the calling thread's last-error value.
        if unsafe { GetLastError() } == ERROR_ALREADY_EXISTS {
            // SAFETY: `handle` was returned by CreateMutexW above.
            unsafe {
                CloseHandle(handle);
            }
            return Ok(None);
        }

        debug!(name, "Single-instance lock acquired");

        Ok(Some(Self { handle }))
    }

    /// Named mutexes are Windows-only; elsewhere every launch proceeds.
    #[cfg(not(target_os = "windows"))]
    pub fn acquire(name: &str) -> AppResult<Option<Self>> {
        debug!(name, "Single-instance lock not supported on this platform");
        Ok(Some(Self {}))
    }
}

impl Drop for InstanceGuard {
    fn drop(&mut self) {
        #[cfg(target_os = "windows")]
        // SAFETY: the handle is owned by this guard and closed exactly once.
        unsafe {
            windows_sys::Win32::Foundation::CloseHandle(self.handle);
        }
    }
}
