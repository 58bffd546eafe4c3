// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command-line option parsing wrapper.
//!
//! ```text
//! parse_from(args)
//!   (a) command   T::define_options(T::command()), clap help flag replaced
//!   (b) lenient   help flag present? --> write "{title}:\n{help}", stop
//!   (c) strict    clap errors --> RequiredOptionMissing | InvalidValue | Parse
//!   (d) build     T::from_arg_matches, then T::validate()
//! ```
//!
//! Asking for help never reports missing required options: the help check
//! runs on a pass that ignores parse errors.

use std::ffi::OsString;
use std::fmt;
use std::io::Write;

use bon::Builder;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Arg, ArgAction, ArgMatches, Command, CommandFactory, FromArgMatches};
use tracing::debug;

use crate::console::{ConsoleFormatter, ConsoleSettings};
use crate::error::{BluesyResult, OptionsError};

/// What an application's options type provides to [`AppOptions`].
///
/// Usually implemented on top of `#[derive(Parser, Default)]`.
pub trait ProgramOptions: Default + CommandFactory + FromArgMatches + fmt::Display {
    /// Id and long name of the help switch.
    ///
    /// If the command has no argument with this id, a `-h/--<name>` switch
    /// is added.
    fn help_flag_name() -> &'static str {
        "help"
    }

    /// Adjusts the command before parsing.
    fn define_options(cmd: Command) -> Command {
        cmd
    }

    /// Checks values that depend on the application, or on each other.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidValue`] for a rejected value.
    fn validate(&self) -> Result<(), OptionsError> {
        Ok(())
    }
}

/// How [`AppOptions::parse_from`] presents help.
#[derive(Debug, Clone, Builder)]
pub struct ParseSettings {
    /// First line of the help text.
    #[builder(setters(name = with_title), into)]
    title: String,
    /// Convert help text to the console encoding before writing it.
    #[builder(setters(name = with_convert_help), default = true)]
    convert_help: bool,
    #[builder(setters(name = with_console), default)]
    console: ConsoleSettings,
}

impl ParseSettings {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn convert_help(&self) -> bool {
        self.convert_help
    }
}

/// Parsed options of type `T`, or the record that help was shown instead.
#[derive(Debug)]
pub struct AppOptions<T> {
    options: T,
    help_shown: bool,
    title: String,
    command: Command,
    formatter: ConsoleFormatter,
}

impl<T: ProgramOptions> AppOptions<T> {
    /// Parses `args`; the first item is the program name.
    ///
    /// When the help switch is present, the help text goes to `out`,
    /// [`help_shown`](Self::help_shown) is `true`, and the options keep
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns an option error for a missing required option, a rejected
    /// value, or any other command-line error. Help output can also fail
    /// with an encoding or I/O error.
    pub fn parse_from<I, A, W>(args: I, settings: &ParseSettings, out: &mut W) -> BluesyResult<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
        W: Write + ?Sized,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let command = build_command::<T>();

        let mut parsed = Self {
            options: T::default(),
            help_shown: false,
            title: settings.title.clone(),
            command,
            formatter: ConsoleFormatter::new(settings.console.clone()),
        };

        if help_requested(&parsed.command, T::help_flag_name(), &args) {
            debug!(title = %parsed.title, "help requested");
            parsed.help_shown = true;
            parsed.show_help(out, settings.convert_help)?;
            return Ok(parsed);
        }

        let matches = parsed
            .command
            .clone()
            .try_get_matches_from(args)
            .map_err(classify)?;
        parsed.options = T::from_arg_matches(&matches).map_err(classify)?;
        parsed.options.validate()?;

        debug!(options = %parsed.options, "options parsed");
        Ok(parsed)
    }

    /// Writes the help text to `out`, converted to the console encoding if
    /// `convert` is set.
    ///
    /// # Errors
    ///
    /// Returns an encoding error if the text cannot be converted, or
    /// [`OptionsError::HelpOutput`] if writing fails.
    pub fn show_help<W: Write + ?Sized>(&self, out: &mut W, convert: bool) -> BluesyResult<()> {
        let text = self.help_text();

        if convert {
            let bytes = self.formatter.format(text.as_str())?;
            out.write_all(&bytes).map_err(OptionsError::HelpOutput)?;
        } else {
            out.write_all(text.as_bytes())
                .map_err(OptionsError::HelpOutput)?;
        }
        Ok(())
    }

    /// Title line followed by clap's rendered help.
    #[must_use]
    pub fn help_text(&self) -> String {
        let mut command = self.command.clone();
        format!("{}:\n{}", self.title, command.render_help())
    }

    #[must_use]
    pub const fn options(&self) -> &T {
        &self.options
    }

    #[must_use]
    pub const fn help_shown(&self) -> bool {
        self.help_shown
    }
}

impl<T: fmt::Display> fmt::Display for AppOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.options, f)
    }
}

fn build_command<T: ProgramOptions>() -> Command {
    let name = T::help_flag_name();
    let cmd = T::define_options(T::command()).disable_help_flag(true);

    if cmd.get_arguments().any(|arg| arg.get_id() == name) {
        cmd
    } else {
        cmd.arg(
            Arg::new(name)
                .short('h')
                .long(name)
                .action(ArgAction::SetTrue)
                .help("Print help"),
        )
    }
}

fn help_requested(command: &Command, name: &str, args: &[OsString]) -> bool {
    command
        .clone()
        .ignore_errors(true)
        .try_get_matches_from(args)
        .is_ok_and(|matches| flag_set(&matches, name))
}

fn flag_set(matches: &ArgMatches, name: &str) -> bool {
    matches!(matches.try_get_one::<bool>(name), Ok(Some(true)))
}

fn classify(err: clap::Error) -> OptionsError {
    match err.kind() {
        ErrorKind::MissingRequiredArgument => OptionsError::RequiredOptionMissing {
            option: invalid_arg(&err).unwrap_or_default(),
        },
        ErrorKind::InvalidValue
        | ErrorKind::ValueValidation
        | ErrorKind::InvalidUtf8
        | ErrorKind::WrongNumberOfValues
        | ErrorKind::TooManyValues
        | ErrorKind::TooFewValues => OptionsError::InvalidValue {
            option: invalid_arg(&err).unwrap_or_default(),
            message: value_message(&err),
        },
        _ => OptionsError::Parse(err),
    }
}

fn invalid_arg(err: &clap::Error) -> Option<String> {
    match err.get(ContextKind::InvalidArg)? {
        ContextValue::String(arg) => Some(arg.clone()),
        ContextValue::Strings(args) => Some(args.join(", ")),
        _ => None,
    }
}

fn value_message(err: &clap::Error) -> String {
    let reason = err.kind().as_str().unwrap_or("invalid value");
    match err.get(ContextKind::InvalidValue) {
        Some(ContextValue::String(value)) => format!("{reason}: '{value}'"),
        _ => reason.to_string(),
    }
}

#[cfg(test)]
mod tests;
