//! Command-line surface and the resolved run configuration.

use clap::Parser;
use std::path::PathBuf;

/// Where distributions install the runtime files of a given Vim version.
const SYNTAX_PATH_TEMPLATE: &str = "/usr/share/vim/vim{version}/syntax/vim.vim";

#[derive(Parser)]
#[command(name = "vimwords", about = "Read vim keywords from syntax/vim.vim")]
pub struct Cli {
    /// Vim version, used to locate the installed syntax file
    #[arg(short = 'v', long, default_value = "8.2")]
    pub version: String,

    /// Output file name
    #[arg(short = 'o', long, default_value = "vim-builtins.txt")]
    pub output: PathBuf,

    /// Vim syntax file (overrides the path derived from --version)
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Output format: sexp (default), json
    #[arg(long, default_value = "sexp")]
    pub format: String,

    /// Fail if an abbreviation does not resolve to its own keyword
    #[arg(long)]
    pub verify: bool,
}

/// Run configuration, resolved once before any I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: String,
    pub verify: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        let input = cli
            .file
            .unwrap_or_else(|| default_syntax_path(&cli.version));
        Config {
            input,
            output: cli.output,
            format: cli.format,
            verify: cli.verify,
        }
    }
}

/// "8.2" → "/usr/share/vim/vim82/syntax/vim.vim"
pub fn default_syntax_path(version: &str) -> PathBuf {
    let version = version.replace('.', "");
    PathBuf::from(SYNTAX_PATH_TEMPLATE.replace("{version}", &version))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Config {
        let argv = std::iter::once("vimwords").chain(args.iter().copied());
        Config::from_cli(Cli::parse_from(argv))
    }

    #[test]
    fn syntax_path_from_version() {
        assert_eq!(
            default_syntax_path("8.2"),
            PathBuf::from("/usr/share/vim/vim82/syntax/vim.vim")
        );
        assert_eq!(
            default_syntax_path("9.0"),
            PathBuf::from("/usr/share/vim/vim90/syntax/vim.vim")
        );
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg.input, PathBuf::from("/usr/share/vim/vim82/syntax/vim.vim"));
        assert_eq!(cfg.output, PathBuf::from("vim-builtins.txt"));
        assert_eq!(cfg.format, "sexp");
        assert!(!cfg.verify);
    }

    #[test]
    fn version_flag_changes_input() {
        let cfg = config(&["-v", "9.1"]);
        assert_eq!(cfg.input, PathBuf::from("/usr/share/vim/vim91/syntax/vim.vim"));
    }

    #[test]
    fn explicit_file_wins() {
        let cfg = config(&["--version", "9.1", "-f", "vim.vim", "-o", "out.el"]);
        assert_eq!(cfg.input, PathBuf::from("vim.vim"));
        assert_eq!(cfg.output, PathBuf::from("out.el"));
    }
}
