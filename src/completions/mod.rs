//! Shell completion support for goldleaf
//!
//! Subcommands, flags and resource names complete statically from the clap
//! definitions. The static candidate lists in `candidates` cover values clap
//! cannot know about, such as config keys.

mod candidates;

pub use candidates::*;

use clap::Command;
use clap_complete::Shell;
use std::io::Write;

/// Generate static shell completions
///
/// # Arguments
/// * `shell` - Target shell (bash, zsh, fish, powershell, elvish)
/// * `cmd` - The clap Command to generate completions for
/// * `buf` - Where to write the script
pub fn generate_static<W: Write>(shell: Shell, cmd: &mut Command, buf: &mut W) {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, buf);
}
