//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// Command failed (unknown command, handler error, bad configuration)
pub const FAILURE: i32 = 1;

/// Internal software error (BSD sysexits); startup aborted before any command ran
pub const SOFTWARE: i32 = 70;
