use std::path::Path;
use std::thread;
use std::time::Duration;

use actifuzz::{
    ActivityLauncher, Adb, ExtraType, ExtrasBuilder, PLACEHOLDER, PayloadList, expand,
    fuzz_targets, load_wordlist,
};
use anyhow::Result;
use colored::Colorize;
use log::debug;

use crate::Cli;

const FALLBACK_DELAY: Duration = Duration::from_millis(500);

/// Whole seconds from `--delay`, half a second when missing or not a number
pub(crate) fn parse_delay(raw: Option<&str>) -> Duration {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(FALLBACK_DELAY)
}

pub(crate) fn command_run(cli: &Cli) -> Result<()> {
    let extras = ExtrasBuilder::new()
        .add(ExtraType::String, &cli.str_extras)?
        .add(ExtraType::Int, &cli.int_extras)?
        .add(ExtraType::Bool, &cli.bool_extras)?
        .add(ExtraType::Float, &cli.float_extras)?
        .add(ExtraType::Long, &cli.long_extras)?
        .build();

    let custom = match &cli.wordlist {
        Some(path) => Some(read_wordlist(path)?),
        None => None,
    };
    let payloads = PayloadList::new(custom);

    let variants = expand(&extras, cli.data.as_deref(), &payloads);

    let targets = fuzz_targets(&extras);
    if !targets.is_empty() {
        println!(
            "{} FUZZ detected for {} -> {} variations generated",
            "[+]".green(),
            targets.join(", ").green(),
            payloads.len().to_string().cyan()
        );
    }
    if cli.data.as_deref().is_some_and(|d| d.contains(PLACEHOLDER)) {
        println!(
            "{} FUZZ detected in --data -> {} data variations generated",
            "[+]".green(),
            payloads.len().to_string().cyan()
        );
    }

    let delay = parse_delay(cli.delay.as_deref());
    let adb = Adb::new(&cli.adb);
    let program = adb.program().display().to_string();
    let launcher = ActivityLauncher::new(adb, &cli.activity, cli.serial.clone());

    let total = variants.len();
    let mut failed = 0;

    for (idx, variant) in variants.iter().enumerate() {
        println!("\n=== Fuzzing Intent {}/{} ===", idx + 1, total);

        let command = format!("{} {}", program, launcher.start_args(variant).join(" "));
        println!("{} Running command: {}", "[*]".cyan(), command.cyan());

        if cli.dry_run {
            continue;
        }

        match launcher.launch(variant) {
            Ok(output) => {
                println!("{}", output.output.trim());

                if output.success {
                    thread::sleep(delay);
                    launcher.back();
                } else {
                    debug!("launch exited with {:?}", output.code);
                    failed += 1;
                }
            }
            Err(err) => {
                println!("{} can't run {}: {}", "[!]".red(), program, err);
                failed += 1;
            }
        }
    }

    if !cli.dry_run {
        println!(
            "\n{} Dispatched {} intents, {} failed",
            "[+]".green(),
            total.to_string().cyan(),
            failed.to_string().red()
        );
    }

    Ok(())
}

fn read_wordlist(path: &Path) -> Result<Vec<String>> {
    let payloads = load_wordlist(path)?;

    if payloads.is_empty() {
        eprintln!(
            "{} Warning: wordlist {:?} contained no usable payloads; falling back to built-in list.",
            "[-]".yellow(),
            path
        );
    } else {
        println!(
            "{} Loaded {} payloads from wordlist: {}",
            "[+]".green(),
            payloads.len(),
            path.display()
        );
    }

    Ok(payloads)
}
