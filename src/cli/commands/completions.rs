//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::TodoError;

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, TodoError> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, name, &mut buf);
    String::from_utf8(buf).map_err(|e| TodoError::InvalidArgument(format!("UTF-8 error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_bash() {
        let script = generate_completions(Shell::Bash).unwrap();
        assert!(script.contains("todo"));
        assert!(script.contains("done"));
    }

    #[test]
    fn test_generate_fish() {
        let script = generate_completions(Shell::Fish).unwrap();
        assert!(script.contains("complete -c todo"));
    }
}
