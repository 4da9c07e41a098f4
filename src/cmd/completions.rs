//! Completions command implementation
//!
//! Handles `carbontrack completions`, which prints a shell completion script.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Generate a completion script for `cmd` on stdout
///
/// # Examples
///
/// ```bash
/// # Bash
/// carbontrack completions bash > /etc/bash_completion.d/carbontrack
///
/// # Zsh
/// carbontrack completions zsh > ~/.zfunc/_carbontrack
///
/// # Fish
/// carbontrack completions fish > ~/.config/fish/completions/carbontrack.fish
/// ```
pub fn cmd_completions(shell: Shell, cmd: &mut Command) {
    write_completions(shell, cmd, &mut std::io::stdout());
}

/// Generate a completion script for `cmd` into `out`
pub fn write_completions<W: Write>(shell: Shell, cmd: &mut Command, out: &mut W) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}
