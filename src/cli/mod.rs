//! Command-line interface.
//!
//! Without flags the binary opens the interactive screen. `--json` and
//! `--summary` fetch once, print and exit:
//!
//! | outcome | stdout | exit |
//! |---------|--------|------|
//! | profile | record / summary | 0 |
//! | empty | `No profile data available` | 0 |
//! | error | (message on stderr) | 1 |

pub mod args;
pub mod print;

pub use args::{Cli, OutputMode};
pub use print::{json_output, summary_output, summary_text, Printed};
