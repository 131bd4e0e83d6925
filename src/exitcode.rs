//! Standard exit codes (BSD sysexits.h compatible)

/// Command line usage error (e.g. no course file given or configured)
pub const USAGE: i32 = 64;

/// Data format error (unknown course, dangling prerequisites)
pub const DATAERR: i32 = 65;

/// Cannot open input
pub const NOINPUT: i32 = 66;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
