// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use miette::IntoDiagnostic;
use r3bl_rawline::{CommonResult, LineReader, TerminalMode, is_stdin_a_tty, ok,
                   try_initialize_logging_global};
use r3bl_rawline_cmdr::{CLIArg, run_session};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> CommonResult<()> {
    let cli_arg = CLIArg::parse();

    let maybe_tracing_config = cli_arg.maybe_tracing_config();
    let should_log = maybe_tracing_config.is_some();
    if let Some(tracing_config) = maybe_tracing_config {
        try_initialize_logging_global(tracing_config)?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    // Piped input has no terminal attributes to change.
    let terminal_mode = if is_stdin_a_tty() {
        TerminalMode::Raw
    } else {
        TerminalMode::Unchanged
    };
    let reader =
        LineReader::new(cli_arg.line_reader_config().with_terminal_mode(terminal_mode));

    let session_end = run_session(
        &reader,
        cli_arg.maybe_history(),
        &mut std::io::stdin(),
        &mut std::io::stdout(),
    )
    .into_diagnostic()?;

    if should_log {
        tracing::debug!(message = "Stop logging...", session_end = session_end.as_ref());
    }

    // The terminal has been restored by now.
    let exit_code = session_end.exit_code();
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    ok!()
}
