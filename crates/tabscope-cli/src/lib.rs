//! Shared CLI definitions for tabscope.
//!
//! Used by the main application and by the build script (manpage) and
//! gen_docs binary (command-line-options markdown).

use clap::{CommandFactory, Parser};

/// Command-line arguments for tabscope
#[derive(Clone, Parser, Debug)]
#[command(
    name = "tabscope",
    version,
    about = "Browse database tables in the terminal",
    long_about = include_str!("../long_about.txt")
)]
pub struct Args {
    /// Backend base URL, e.g. http://localhost:8888. Overrides config [server] base_url.
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Query this table once the table list has loaded
    #[arg(long = "table", value_name = "NAME")]
    pub table: Option<String>,

    /// Row limit for queries, 1 to 10000. Overrides config [display] default_limit.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<u32>,

    /// HTTP timeout in seconds. Overrides config [server] timeout_secs.
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Probe the backend health endpoint, print one status line, and exit
    #[arg(long = "check", action)]
    pub check: bool,

    /// Enable debug mode to show operational information
    #[arg(long = "debug", action)]
    pub debug: bool,

    /// Generate default configuration file at ~/.config/tabscope/config.toml
    #[arg(long = "generate-config", action)]
    pub generate_config: bool,

    /// Force overwrite existing config file when using --generate-config
    #[arg(long = "force", requires = "generate_config", action)]
    pub force: bool,
}

/// Escape `|` and newlines for use in markdown table cells.
fn escape_table_cell(s: &str) -> String {
    s.replace('|', "\\|").replace(['\n', '\r'], " ")
}

/// Render command-line options as markdown.
///
/// Used by the gen_docs binary; output is written to stdout and then
/// to `docs/reference/command-line-options.md` by the docs build process.
pub fn render_options_markdown() -> String {
    let mut cmd = Args::command();
    cmd.build();

    let mut out = String::from("# Command Line Options\n\n");

    out.push_str("## Usage\n\n```\n");
    let usage = cmd.render_usage();
    out.push_str(&usage.to_string());
    out.push_str("\n```\n\n");

    out.push_str("## Options\n\n");
    out.push_str("| Option | Description |\n");
    out.push_str("|--------|-------------|\n");

    for arg in cmd.get_arguments() {
        let id = arg.get_id().as_ref().to_string();
        if id == "help" || id == "version" {
            continue;
        }

        let option_str = if arg.is_positional() {
            let placeholder: String = arg
                .get_value_names()
                .map(|names| {
                    names
                        .iter()
                        .map(|n: &clap::builder::Str| format!("<{}>", n.as_ref() as &str))
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .unwrap_or_default();
            if arg.is_required_set() {
                placeholder
            } else {
                format!("[{placeholder}]")
            }
        } else {
            let mut parts = Vec::new();
            if let Some(s) = arg.get_short() {
                parts.push(format!("-{s}"));
            }
            if let Some(l) = arg.get_long() {
                parts.push(format!("--{l}"));
            }
            let op = parts.join(", ");
            let takes_val = arg.get_action().takes_values();
            let placeholder: String = if takes_val {
                arg.get_value_names()
                    .map(|names| {
                        names
                            .iter()
                            .map(|n: &clap::builder::Str| format!("<{}>", n.as_ref() as &str))
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .unwrap_or_default()
            } else {
                String::new()
            };
            if placeholder.is_empty() {
                op
            } else {
                format!("{op} {placeholder}")
            }
        };

        let help = arg
            .get_help()
            .map(|h| escape_table_cell(&h.to_string()))
            .unwrap_or_else(|| "-".to_string());

        out.push_str(&format!("| `{option_str}` | {help} |\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["tabscope"]).unwrap();
        assert!(args.url.is_none());
        assert!(args.table.is_none());
        assert!(args.limit.is_none());
        assert!(!args.check);
        assert!(!args.debug);
    }

    #[test]
    fn test_parse_url_and_overrides() {
        let args = Args::try_parse_from([
            "tabscope",
            "http://db-host:9000",
            "--table",
            "users",
            "--limit",
            "250",
            "--timeout",
            "5",
        ])
        .unwrap();
        assert_eq!(args.url.as_deref(), Some("http://db-host:9000"));
        assert_eq!(args.table.as_deref(), Some("users"));
        assert_eq!(args.limit, Some(250));
        assert_eq!(args.timeout, Some(5));
    }

    #[test]
    fn test_force_requires_generate_config() {
        assert!(Args::try_parse_from(["tabscope", "--force"]).is_err());
        let args = Args::try_parse_from(["tabscope", "--generate-config", "--force"]).unwrap();
        assert!(args.generate_config);
        assert!(args.force);
    }

    #[test]
    fn test_options_markdown_lists_flags() {
        let md = render_options_markdown();
        assert!(md.contains("--table"));
        assert!(md.contains("--generate-config"));
        assert!(md.contains("[<URL>]"));
    }
}
