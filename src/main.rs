// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use teleprompter::app::{self, paths, Flags};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const HELP: &str = "\
Teleprompter - auto-scrolling script prompter

USAGE:
  teleprompter [OPTIONS] [SCRIPT]

OPTIONS:
  --lang <LOCALE>       UI language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help

ARGS:
  SCRIPT                Plain-text script to load on startup

ENVIRONMENT:
  TELEPROMPTER_CONFIG_DIR   Config directory, overridden by --config-dir
  RUST_LOG                  Log filter (default: info)
";

fn main() -> iced::Result {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!("ignoring --config-dir: {err}");
        None
    });

    let script_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    if let Some(dir) = &config_dir {
        paths::set_cli_config_dir(PathBuf::from(dir));
    }

    app::run(Flags {
        lang,
        script_path,
        config_dir,
    })
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(env_filter),
        )
        .init();
}
