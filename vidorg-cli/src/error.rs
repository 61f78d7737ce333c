// vidorg-cli/src/error.rs
//
// The CLI reports core errors directly; main.rs prints them and exits with 1.

pub type CliResult<T> = vidorg_core::CoreResult<T>;
