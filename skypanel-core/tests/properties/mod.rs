//! Property test suites, one file per subsystem
