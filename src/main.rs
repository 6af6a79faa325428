use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{debug, error};
use std::error::Error;
use std::io::{self, Write};
use std::process;

use userauth::auth::read_password;
use userauth::utils::initialize_logging;
use userauth::{
    AuthConfig, CredentialStore, SharedCredentialStore, DEFAULT_PASSWORD, DEFAULT_USERNAME,
};

fn build_cli() -> Command {
    Command::new("userauth")
        .about("Register a user in an in-memory credential store and authenticate it")
        .arg(
            Arg::new("username")
                .long("username")
                .help("Username to register and authenticate")
                .value_name("USERNAME")
                .default_value(DEFAULT_USERNAME),
        )
        .arg(
            Arg::new("password")
                .long("password")
                .help("Password to register and authenticate")
                .value_name("PASSWORD")
                .default_value(DEFAULT_PASSWORD),
        )
        .arg(
            Arg::new("prompt")
                .long("prompt")
                .help("Read the password from the terminal without echo")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("algorithm")
                .long("algorithm")
                .help("Digest algorithm (SHA-256, SHA-512, PBKDF2-SHA256)")
                .value_name("NAME"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a JSON configuration file")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
}

// Stdout carries only the result line, so prompts go to the given writer (stderr in `run`)
fn write_password_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Please enter the password:")?;
    out.flush()
}

// File values first, then command-line overrides
fn resolve_config(matches: &ArgMatches) -> Result<AuthConfig, Box<dyn Error>> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => AuthConfig::load(path)?,
        None => AuthConfig::default(),
    };

    if let Some(algorithm) = matches.get_one::<String>("algorithm") {
        config.algorithm = algorithm.clone();
    }
    if matches.get_flag("verbose") {
        config.log_level = "debug".to_string();
    }
    Ok(config)
}

fn run(matches: &ArgMatches) -> Result<bool, Box<dyn Error>> {
    let config = resolve_config(matches)?;
    initialize_logging(&config.log_level, config.log_file.as_deref())?;
    debug!("Resolved configuration: {:?}", config);

    let username = matches
        .get_one::<String>("username")
        .map(String::as_str)
        .unwrap_or(DEFAULT_USERNAME);

    let password = if matches.get_flag("prompt") {
        write_password_prompt(&mut io::stderr())?;
        read_password()?
    } else {
        matches
            .get_one::<String>("password")
            .cloned()
            .unwrap_or_else(|| DEFAULT_PASSWORD.to_string())
    };

    let authenticated = if config.thread_safe {
        let store = SharedCredentialStore::with_config(&config)?;
        store.register(username, &password)?;
        store.authenticate(username, &password)
    } else {
        let mut store = CredentialStore::with_config(&config)?;
        store.register(username, &password)?;
        store.authenticate(username, &password)
    };

    Ok(authenticated)
}

fn main() {
    let matches = build_cli().get_matches();

    match run(&matches) {
        Ok(authenticated) => println!("Authentication successful: {}", authenticated),
        Err(e) => {
            error!("Fatal: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let matches = build_cli().try_get_matches_from(["userauth"]).unwrap();
        assert_eq!(
            matches.get_one::<String>("username").unwrap(),
            DEFAULT_USERNAME
        );
        assert_eq!(
            matches.get_one::<String>("password").unwrap(),
            DEFAULT_PASSWORD
        );
        assert!(!matches.get_flag("prompt"));

        let config = resolve_config(&matches).unwrap();
        assert_eq!(config, AuthConfig::default());
    }

    #[test]
    fn test_default_run_authenticates() {
        let matches = build_cli().try_get_matches_from(["userauth"]).unwrap();
        assert!(run(&matches).unwrap());
    }

    #[test]
    fn test_cli_overrides() {
        let matches = build_cli()
            .try_get_matches_from(["userauth", "--algorithm", "sha512", "--verbose"])
            .unwrap();
        let config = resolve_config(&matches).unwrap();
        assert_eq!(config.algorithm, "sha512");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_password_prompt_text() {
        let mut prompt = Vec::new();
        write_password_prompt(&mut prompt).unwrap();
        assert_eq!(String::from_utf8(prompt).unwrap(), "Please enter the password:\n");
    }

    #[test]
    fn test_unknown_algorithm_fails_run() {
        let matches = build_cli()
            .try_get_matches_from(["userauth", "--algorithm", "md5"])
            .unwrap();
        let err = run(&matches).unwrap_err();
        assert!(err.to_string().contains("md5"));
    }
}
