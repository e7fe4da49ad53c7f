use std::path::PathBuf;

use actifuzz::ActifuzzError;
use clap::Parser;
use colored::Colorize;

use crate::commands::{command_run, print_banner};

mod commands;

/// Run an Android activity with typed extras and FUZZ support
#[derive(Parser)]
#[command(version, about, arg_required_else_help(true))]
pub(crate) struct Cli {
    #[arg(
        short,
        long,
        help = "Full activity name (e.g. com.example/.MainActivity)"
    )]
    activity: String,

    #[arg(short, long, help = "Device serial number")]
    serial: Option<String>,

    #[arg(
        short = 'D',
        long,
        help = "Delay between adb commands in seconds (0.5 when missing or invalid)"
    )]
    delay: Option<String>,

    #[arg(short, long, help = "Data URI passed to 'am start' as -d (supports FUZZ)")]
    data: Option<String>,

    #[arg(long = "str", value_name = "KEY=VALUE", help = "String extra")]
    str_extras: Vec<String>,

    #[arg(long = "int", value_name = "KEY=VALUE", help = "Integer extra")]
    int_extras: Vec<String>,

    #[arg(long = "bool", value_name = "KEY=VALUE", help = "Boolean extra (true/1/yes)")]
    bool_extras: Vec<String>,

    #[arg(long = "float", value_name = "KEY=VALUE", help = "Float extra")]
    float_extras: Vec<String>,

    #[arg(long = "long", value_name = "KEY=VALUE", help = "Long extra")]
    long_extras: Vec<String>,

    #[arg(
        short,
        long,
        help = "Wordlist with FUZZ payloads, one per line. Blank lines and lines starting with # are ignored"
    )]
    wordlist: Option<PathBuf>,

    #[arg(long, default_value = "adb", help = "Path to the adb binary")]
    adb: PathBuf,

    #[arg(
        long,
        default_value_t = false,
        help = "Print the generated commands without running them"
    )]
    dry_run: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    print_banner();

    if let Err(err) = command_run(&cli) {
        eprintln!("{} {:#}", "[!]".red(), err);

        let code = err
            .downcast_ref::<ActifuzzError>()
            .map(ActifuzzError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
