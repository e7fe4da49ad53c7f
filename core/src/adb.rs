//! Thin wrapper around the `adb` binary.
//!
//! Only two commands are needed: `am start` for a variant and a BACK key event
//! afterwards. Execution goes through [`Executor`] so everything above the
//! process boundary can be driven without a device.

use std::io;
use std::path::PathBuf;
use std::process::Command;

use log::debug;

use crate::expander::Variant;
use crate::extras::ExtraValue;

const KEYCODE_BACK: &str = "4";

/// Captured result of one bridge invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
    /// stdout followed by stderr
    pub output: String,
}

/// Runs one argument list against the bridge binary
pub trait Executor {
    fn execute(&self, args: &[String]) -> io::Result<CommandOutput>;
}

/// [`Executor`] spawning the real `adb` binary
#[derive(Debug, Clone)]
pub struct Adb {
    program: PathBuf,
}

impl Adb {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }
}

impl Default for Adb {
    fn default() -> Self {
        Self::new("adb")
    }
}

impl Executor for Adb {
    fn execute(&self, args: &[String]) -> io::Result<CommandOutput> {
        debug!("exec {:?} {:?}", self.program, args);

        let output = Command::new(&self.program).args(args).output()?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            output: text,
        })
    }
}

/// `am start` flag for the kind of value
pub fn extra_flag(value: &ExtraValue) -> &'static str {
    match value {
        ExtraValue::String(_) => "-es",
        ExtraValue::Boolean(_) => "-ez",
        ExtraValue::Integer(_) => "-ei",
        ExtraValue::Float(_) => "-ef",
    }
}

/// Launches one activity, optionally on a specific device
#[derive(Debug)]
pub struct ActivityLauncher<E> {
    executor: E,
    serial: Option<String>,
    activity: String,
}

impl<E: Executor> ActivityLauncher<E> {
    pub fn new(executor: E, activity: impl Into<String>, serial: Option<String>) -> Self {
        Self {
            executor,
            serial,
            activity: activity.into(),
        }
    }

    fn base_args(&self) -> Vec<String> {
        match &self.serial {
            Some(serial) if !serial.is_empty() => vec!["-s".to_owned(), serial.clone()],
            _ => Vec::new(),
        }
    }

    /// `[-s SERIAL] shell am start [-d DATA] -n ACTIVITY [EXTRAS...]`
    pub fn start_args(&self, variant: &Variant) -> Vec<String> {
        let mut args = self.base_args();
        args.extend(["shell", "am", "start"].map(str::to_owned));

        if let Some(data) = variant.data.as_deref().filter(|d| !d.is_empty()) {
            args.push("-d".to_owned());
            args.push(data.to_owned());
        }

        args.push("-n".to_owned());
        args.push(self.activity.clone());

        for (key, value) in &variant.extras {
            args.push(extra_flag(value).to_owned());
            args.push(key.clone());
            args.push(value.to_string());
        }

        args
    }

    /// `[-s SERIAL] shell input keyevent 4`
    pub fn back_args(&self) -> Vec<String> {
        let mut args = self.base_args();
        args.extend(["shell", "input", "keyevent", KEYCODE_BACK].map(str::to_owned));
        args
    }

    pub fn launch(&self, variant: &Variant) -> io::Result<CommandOutput> {
        self.executor.execute(&self.start_args(variant))
    }

    /// Send BACK to leave the launched activity, failures are ignored
    pub fn back(&self) {
        if let Err(err) = self.executor.execute(&self.back_args()) {
            debug!("back key event failed: {err}");
        }
    }
}
