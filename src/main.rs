// SPDX-License-Identifier: MPL-2.0
use art_space::app::{self, Flags};
use art_space::config::DEFAULT_LOG_FILTER;
use std::convert::Infallible;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn print_usage() {
    eprintln!(
        r#"art_space - single-screen artwork gallery

USAGE:
    art_space [OPTIONS]

OPTIONS:
    --lang <ID>           UI language (e.g. en-US, fr)
    --catalog <FILE>      Artwork catalog (TOML) to show instead of the built-in one
    --config-dir <DIR>    Directory containing settings.toml
    --help, -h            Show this help

KEYS:
    Left / Right          Previous / Next artwork

LOGGING:
    Set RUST_LOG to change verbosity (default: {filter})
"#,
        filter = DEFAULT_LOG_FILTER
    );
}

fn parse_path(raw: &OsStr) -> Result<PathBuf, Infallible> {
    Ok(PathBuf::from(raw))
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        catalog: args.opt_value_from_os_str("--catalog", parse_path)?,
        config_dir: args.opt_value_from_os_str("--config-dir", parse_path)?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }
    Ok(flags)
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n");
            print_usage();
            return ExitCode::from(2);
        }
    };

    let startup = match app::prepare(flags) {
        Ok(startup) => startup,
        Err(err) => {
            tracing::error!(error = %err, "cannot start gallery");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = app::run(startup) {
        tracing::error!(error = %err, "UI loop failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
