// Copyright (c) 2026 Yusheng Hu. See LICENSE for details.

//! Pinning the generator thread to one CPU core.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum AffinityError {
    #[error("CPU affinity is not supported on this platform")]
    Unsupported,

    #[error("could not set CPU affinity to core {core}")]
    Failed {
        core: usize,
        #[source]
        source: io::Error,
    },
}

/// Restrict the calling thread to `core`.
#[cfg(target_os = "linux")]
pub fn pin_current_thread(core: usize) -> Result<(), AffinityError> {
    // CPU_SET does not bounds-check.
    if core >= libc::CPU_SETSIZE as usize {
        return Err(AffinityError::Failed {
            core,
            source: io::Error::from(io::ErrorKind::InvalidInput),
        });
    }

    // SAFETY: cpu_set_t is plain data for which all-zero is the empty set,
    // `core` is within the set, and the pointer passed is to a live local.
    let rc = unsafe {
        let mut set: libc::cpu_set_t = std::mem::zeroed();
        libc::CPU_ZERO(&mut set);
        libc::CPU_SET(core, &mut set);
        libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set)
    };

    if rc != 0 {
        return Err(AffinityError::Failed {
            core,
            source: io::Error::last_os_error(),
        });
    }
    Ok(())
}

/// Restrict the calling thread to `core`.
#[cfg(not(target_os = "linux"))]
pub fn pin_current_thread(_core: usize) -> Result<(), AffinityError> {
    Err(AffinityError::Unsupported)
}
