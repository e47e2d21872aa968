use std::ffi::CString;
use std::io;
use std::os::unix::process::CommandExt;
use std::process::Command;

/// Output file for a child, opened on the child side of the fork.
pub(super) struct StdoutRedirect {
    target: CString,
    diagnostic: Vec<u8>,
}

impl StdoutRedirect {
    pub(super) fn new(target: &str) -> io::Result<Self> {
        let target = CString::new(target).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let diagnostic = format!("sbsh: {}: cannot open for writing\n", target.to_string_lossy()).into_bytes();
        Ok(Self { target, diagnostic })
    }

    /// Truncates or creates the target and makes it the child's stdout
    /// just before exec. If that fails the child alone exits with status 1.
    pub(super) fn install(self, command: &mut Command) {
        // SAFETY: the hook only makes async-signal-safe libc calls on
        // memory allocated before the fork.
        unsafe {
            command.pre_exec(move || {
                let fd = libc::open(
                    self.target.as_ptr(),
                    libc::O_WRONLY | libc::O_CREAT | libc::O_TRUNC | libc::O_CLOEXEC,
                    0o644 as libc::c_uint,
                );
                if fd < 0 || libc::dup2(fd, libc::STDOUT_FILENO) < 0 {
                    libc::write(
                        libc::STDERR_FILENO,
                        self.diagnostic.as_ptr().cast(),
                        self.diagnostic.len(),
                    );
                    libc::_exit(1);
                }
                libc::close(fd);
                Ok(())
            });
        }
    }
}
