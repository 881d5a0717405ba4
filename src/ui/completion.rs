//! Shell completion generation for benchreport

use clap::Command;
use clap_complete::{Generator, generate};
use std::io::Write;

/// Generate shell completions for the given shell
pub fn print_completions<G: Generator>(generator: G, app: &mut Command) {
    write_completions(generator, app, &mut std::io::stdout());
}

/// Generate shell completions into any writer
pub fn write_completions<G: Generator, W: Write>(generator: G, app: &mut Command, out: &mut W) {
    let name = app.get_name().to_string();
    generate(generator, app, name, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Cli;
    use clap::CommandFactory;
    use clap_complete::Shell;

    #[test]
    fn test_completions_for_every_shell() {
        for shell in [
            Shell::Bash,
            Shell::Zsh,
            Shell::Fish,
            Shell::PowerShell,
            Shell::Elvish,
        ] {
            let mut buffer = Vec::new();
            write_completions(shell, &mut Cli::command(), &mut buffer);
            let script = String::from_utf8_lossy(&buffer);
            assert!(script.contains("benchreport"), "{shell:?} script lacks name");
        }
    }

    #[test]
    fn test_bash_completion_lists_subcommands() {
        let mut buffer = Vec::new();
        write_completions(Shell::Bash, &mut Cli::command(), &mut buffer);
        let script = String::from_utf8_lossy(&buffer);
        assert!(script.contains("table"));
        assert!(script.contains("cut"));
        assert!(script.contains("summary"));
    }
}
