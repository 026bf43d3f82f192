//! OS entropy on Linux, via the `getrandom` system call.
//!
//! `getrandom` reads directly from the kernel entropy pool and is the
//! recommended source for cryptographic seeding on modern kernels.

use libc::{c_void, getrandom};

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// Calls `getrandom` repeatedly until the buffer is full; partial reads
/// (possible under signal interruption) are handled transparently.
///
/// # Panics
/// Panics if `getrandom` returns an error. That indicates a critical
/// operating system problem and is treated as unrecoverable in a
/// cryptographic context.
pub(crate) fn sys_random(buf: &mut [u8]) {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            panic!("getrandom() failed");
        }

        filled += ret as usize;
    }
}
