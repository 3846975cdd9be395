// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};
use r3bl_rawline::{DEFAULT_LINE_CAPACITY, DEFAULT_LOG_FILE_NAME, HISTORY_SIZE_MAX,
                   InMemoryHistory, LineReaderConfig, TracingConfig};
use tracing_core::LevelFilter;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "rawline")]
#[command(about = "Read lines from the terminal in raw mode, with arrow key editing and history")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nType a line and press Enter. Type `exit` or `quit`, or press Ctrl+C, to stop.\nUSAGE:\n  rawline [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(
        long,
        short = 'p',
        default_value = "rawline",
        help = "Label shown before the ` > ` separator."
    )]
    pub prompt: String,

    #[arg(
        long,
        short = 'c',
        default_value_t = DEFAULT_LINE_CAPACITY,
        value_parser = parse_capacity,
        help = "Line buffer capacity in bytes, including the terminator slot. The line ends when it is full."
    )]
    pub capacity: usize,

    #[arg(long, help = "Disable up and down arrow history.")]
    pub no_history: bool,

    #[arg(
        long,
        default_value_t = HISTORY_SIZE_MAX,
        help = "Maximum number of lines kept in history."
    )]
    pub history_size: usize,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file for debugging. See `--log-file`."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        default_value = DEFAULT_LOG_FILE_NAME,
        help = "Path of the log file used with `--enable-logging`."
    )]
    pub log_file: String,
}

impl CLIArg {
    #[must_use]
    pub fn line_reader_config(&self) -> LineReaderConfig {
        LineReaderConfig::default()
            .with_prompt(self.prompt.clone())
            .with_capacity(self.capacity)
    }

    #[must_use]
    pub fn maybe_history(&self) -> Option<InMemoryHistory> {
        (!self.no_history).then(|| InMemoryHistory::new(self.history_size))
    }

    /// Logs go to a file, never to the display, since stdout is the line being edited.
    #[must_use]
    pub fn maybe_tracing_config(&self) -> Option<TracingConfig> {
        self.global_options.enable_logging.then(|| {
            TracingConfig::new_file(
                Some(self.global_options.log_file.clone()),
                LevelFilter::DEBUG,
            )
        })
    }
}

fn parse_capacity(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(0) => Err("capacity must be at least 1".to_string()),
        Ok(capacity) => Ok(capacity),
        Err(error) => Err(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use r3bl_rawline::WriterConfig;
    use test_case::test_case;

    #[test]
    fn test_defaults() {
        let cli_arg = CLIArg::try_parse_from(["rawline"]).unwrap();
        assert_eq!(cli_arg.prompt, "rawline");
        assert_eq!(cli_arg.capacity, DEFAULT_LINE_CAPACITY);
        assert!(!cli_arg.no_history);
        assert_eq!(cli_arg.history_size, HISTORY_SIZE_MAX);
        assert!(cli_arg.maybe_history().is_some());
        assert!(cli_arg.maybe_tracing_config().is_none());
        assert_eq!(cli_arg.line_reader_config().rendered_prompt(), "rawline > ");
    }

    #[test]
    fn test_all_flags() {
        let cli_arg = CLIArg::try_parse_from([
            "rawline",
            "--prompt",
            "name",
            "--capacity",
            "16",
            "--no-history",
            "-l",
            "--log-file",
            "/tmp/rawline.log",
        ])
        .unwrap();

        let config = cli_arg.line_reader_config();
        assert_eq!(config.prompt, "name");
        assert_eq!(config.capacity, 16);
        assert!(cli_arg.maybe_history().is_none());

        let tracing_config = cli_arg.maybe_tracing_config().unwrap();
        assert_eq!(
            tracing_config.get_writer_config(),
            WriterConfig::File("/tmp/rawline.log".to_string())
        );
        assert_eq!(tracing_config.get_level_filter(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_history_size() {
        let cli_arg = CLIArg::try_parse_from(["rawline", "--history-size", "3"]).unwrap();
        assert_eq!(cli_arg.maybe_history().map(|history| history.max_size), Some(3));
    }

    #[test_case("0"; "zero")]
    #[test_case("-1"; "negative")]
    #[test_case("lots"; "not a number")]
    fn test_bad_capacity_is_rejected(capacity: &str) {
        assert!(CLIArg::try_parse_from(["rawline", "--capacity", capacity]).is_err());
    }
}
