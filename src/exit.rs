// src/exit.rs
//! Process exit codes for the `coursecloud` binary.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CloudExit {
    /// Command completed and found what it was asked for.
    Success = 0,
    /// Generic error (I/O, malformed dataset or config).
    Error = 1,
    /// The id could not be resolved to a known course; output is best-effort.
    Unresolved = 2,
    /// A search or lookup completed but matched nothing.
    NoMatch = 3,
}

impl CloudExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

impl Termination for CloudExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
