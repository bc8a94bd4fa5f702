//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Design
//!
//! Parsing is a pure function from raw tokens to a
//! [`LaunchRequest`]; no shared state is mutated while iterating options.
//! clap's built-in help and version handling is disabled because the
//! launcher controls the help/version exit sentinels itself, so `-h` and
//! `-v` are ordinary flags that the resolver turns into actions.
//!
//! Option-driven capability disables are collected here: `-N` turns off
//! authentication, `-T` and `-V` turn off module calls, `-M` turns off
//! single-instance enforcement. Mode-forced disables come later, in the
//! resolver's override pass.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::launcher::flags::{Capability, CapabilitySet};
use crate::launcher::request::{LaunchRequest, SessionKind};
use crate::launcher::LaunchError;

/// A libxante application interpreter.
#[derive(Parser, Debug)]
#[command(name = "xanter")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(
    about = "A libxante application interpreter",
    long_about = "A libxante application interpreter.\n\n\
        Xanter loads the application described by a JTF file and drives it \
        through the engine: authenticating the user, loading and saving the \
        runtime configuration, and running the interactive UI. It can also \
        export a JTF file as a compiled JXDB database, create an \
        application's default configuration file, or create an empty \
        authentication database."
)]
pub struct Cli {
    /// Show this help screen
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Show the xanter version
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Show the version of the application described by the JTF file
    #[arg(short = 'V')]
    pub app_version: bool,

    /// Path to the JTF file describing the application
    #[arg(short = 'j', value_name = "FILE")]
    pub jtf: Option<PathBuf>,

    /// Use an alternate UI theme file
    #[arg(short = 't', value_name = "FILE")]
    pub theme: Option<PathBuf>,

    /// Username to run the application
    #[arg(short = 'u', value_name = "USER")]
    pub username: Option<String>,

    /// Password for the given username
    #[arg(short = 'p', value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Test mode; disables all module calls
    #[arg(short = 'T')]
    pub test_mode: bool,

    /// Run without authentication
    #[arg(short = 'N')]
    pub no_auth: bool,

    /// Create the application's default configuration file; the output
    /// PATH is optional and must be attached with '=' (-C=PATH or
    /// --config=PATH), a space-separated path is not accepted
    #[arg(
        short = 'C',
        long = "config",
        value_name = "PATH",
        num_args = 0..=1,
        require_equals = true
    )]
    pub config: Option<Option<PathBuf>>,

    /// Create an empty authentication database at PATH and exit
    #[arg(short = 'D', value_name = "PATH")]
    pub create_auth_db: Option<PathBuf>,

    /// Export the JTF file as a compiled JXDB database at PATH
    #[arg(short = 'J', value_name = "PATH")]
    pub jxdb_export: Option<PathBuf>,

    /// Directory holding the authentication database
    #[arg(short = 'd', value_name = "DIR")]
    pub auth_db_dir: Option<PathBuf>,

    /// Session kind: 0 keeps the login across launches, 1 logs out on exit
    #[arg(short = 'S', value_name = "KIND", value_parser = parse_session_kind)]
    pub session: Option<SessionKind>,

    /// Allow more than one instance of the application to run
    #[arg(short = 'M', long = "multi-instance")]
    pub multi_instance: bool,
}

impl Cli {
    /// Convert parsed flags into a launch request.
    fn into_request(self) -> LaunchRequest {
        let mut flags = CapabilitySet::all();
        if self.no_auth {
            flags.remove(&Capability::UseAuth);
        }
        if self.test_mode || self.app_version {
            flags.remove(&Capability::UseModule);
        }
        if self.multi_instance {
            flags.remove(&Capability::SingleInstance);
        }

        LaunchRequest {
            schema_path: self.jtf,
            theme_path: self.theme,
            username: self.username,
            password: self.password,
            session_kind: self.session.unwrap_or_default(),
            auth_database_dir: self.auth_db_dir,
            jxdb_export_path: self.jxdb_export,
            create_config: self.config.is_some(),
            config_output_path: self.config.flatten(),
            create_auth_db_path: self.create_auth_db,
            flags,
            test_mode: self.test_mode,
            want_help: self.help,
            want_version: self.version,
            want_app_version: self.app_version,
        }
    }
}

/// Parse raw argument tokens into a launch request.
///
/// The first token is the program name, as with `std::env::args_os`.
///
/// # Errors
///
/// Returns [`LaunchError::Usage`] for unknown options, missing or
/// malformed values; the rendered message includes clap's usage line.
pub fn parse<I, T>(args: I) -> Result<LaunchRequest, LaunchError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)
        .map_err(|err| LaunchError::Usage(err.render().to_string().trim_end().to_string()))?;
    Ok(cli.into_request())
}

/// `-S` takes the wire values 0 (continuous) and 1 (single).
fn parse_session_kind(value: &str) -> Result<SessionKind, String> {
    match value {
        "0" => Ok(SessionKind::Continuous),
        "1" => Ok(SessionKind::Single),
        _ => Err(format!(
            "session kind must be 0 (continuous) or 1 (single), got '{value}'"
        )),
    }
}

/// Print the usage screen to stdout.
pub fn print_usage() {
    let _ = Cli::command().print_help();
}

/// Print the launcher's own version line to stdout.
pub fn print_version() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> Result<LaunchRequest, LaunchError> {
        parse(std::iter::once("xanter").chain(args.iter().copied()))
    }

    #[test]
    fn no_arguments_parse_to_defaults() {
        let request = parse_args(&[]).unwrap();
        assert!(request.schema_path.is_none());
        assert_eq!(request.flags, CapabilitySet::all());
        assert_eq!(request.session_kind, SessionKind::Single);
        assert!(!request.want_help);
    }

    #[test]
    fn unknown_option_is_a_usage_error() {
        match parse_args(&["-Z"]) {
            Err(LaunchError::Usage(message)) => assert!(message.contains("-Z")),
            other => panic!("unexpected parse result: {other:?}"),
        }
    }

    #[test]
    fn value_taking_option_without_value_is_a_usage_error() {
        assert!(matches!(parse_args(&["-j"]), Err(LaunchError::Usage(_))));
    }

    #[test]
    fn schema_and_credentials() {
        let request = parse_args(&["-j", "app.jtf", "-u", "alice", "-p", "secret"]).unwrap();
        assert_eq!(request.schema_path, Some("app.jtf".into()));
        assert_eq!(request.username.as_deref(), Some("alice"));
        assert_eq!(request.password.as_deref(), Some("secret"));
    }

    #[test]
    fn option_driven_disables() {
        let request = parse_args(&["-j", "a", "-N", "-T", "-M"]).unwrap();
        assert!(!request.flags.has(&Capability::UseAuth));
        assert!(!request.flags.has(&Capability::UseModule));
        assert!(!request.flags.has(&Capability::SingleInstance));
    }

    #[test]
    fn app_version_disables_module_calls() {
        let request = parse_args(&["-j", "a", "-V"]).unwrap();
        assert!(request.want_app_version);
        assert!(!request.flags.has(&Capability::UseModule));
        assert!(request.flags.has(&Capability::UseAuth));
    }

    #[test]
    fn bare_config_flag_has_no_output_path() {
        let request = parse_args(&["-j", "a", "-N", "-C"]).unwrap();
        assert!(request.create_config);
        assert!(request.config_output_path.is_none());
    }

    #[test]
    fn config_flag_with_attached_path() {
        let request = parse_args(&["-j", "a", "-N", "--config=out.cfg"]).unwrap();
        assert!(request.create_config);
        assert_eq!(request.config_output_path, Some("out.cfg".into()));
    }

    #[test]
    fn config_path_without_equals_is_a_usage_error() {
        assert!(matches!(
            parse_args(&["-j", "a", "-N", "-C", "out.cfg"]),
            Err(LaunchError::Usage(_))
        ));
    }

    #[test]
    fn config_help_spells_out_the_equals_form() {
        let mut help = Vec::new();
        Cli::command()
            .write_help(&mut help)
            .expect("help should render");
        let help = String::from_utf8(help).expect("help is UTF-8");
        assert!(help.contains("-C=PATH"));
        assert!(help.contains("--config=PATH"));
    }

    #[test]
    fn config_flag_before_schema_still_parses() {
        let request = parse_args(&["-C", "-j", "app.jtf"]).unwrap();
        assert!(request.create_config);
        assert_eq!(request.schema_path, Some("app.jtf".into()));
    }

    #[test]
    fn session_kind_values() {
        let request = parse_args(&["-S", "0"]).unwrap();
        assert_eq!(request.session_kind, SessionKind::Continuous);
        let request = parse_args(&["-S", "1"]).unwrap();
        assert_eq!(request.session_kind, SessionKind::Single);
    }

    #[test]
    fn session_kind_out_of_range_is_a_usage_error() {
        match parse_args(&["-S", "2"]) {
            Err(LaunchError::Usage(message)) => assert!(message.contains("session kind")),
            other => panic!("unexpected parse result: {other:?}"),
        }
    }

    #[test]
    fn long_forms_parse() {
        let request = parse_args(&["--help"]).unwrap();
        assert!(request.want_help);
        let request = parse_args(&["--version"]).unwrap();
        assert!(request.want_version);
        let request = parse_args(&["--multi-instance"]).unwrap();
        assert!(!request.flags.has(&Capability::SingleInstance));
    }

    #[test]
    fn create_auth_db_and_export_paths() {
        let request = parse_args(&["-D", "/tmp/auth.db"]).unwrap();
        assert_eq!(request.create_auth_db_path, Some("/tmp/auth.db".into()));
        let request = parse_args(&["-J", "out.jxdb", "-j", "a", "-N"]).unwrap();
        assert_eq!(request.jxdb_export_path, Some("out.jxdb".into()));
    }
}
