use super::*;
use crate::test_utils::EnvGuard;
use clap::Parser;
use serial_test::serial;

fn resolve(args: &[&str]) -> Result<Settings> {
    resolve_settings(&Cli::try_parse_from(args).expect("arguments should parse"))
}

#[test]
#[serial]
fn defaults_without_environment() {
    let _env = EnvGuard::clean();
    let settings = resolve(&["try", "true"]).unwrap();
    assert_eq!(
        settings,
        Settings {
            shell: PathBuf::from("/bin/sh"),
            interactive: false,
            color: ColorMode::Auto,
            verbose: false,
            debug: false,
        }
    );
}

#[test]
#[serial]
fn interactive_from_environment() {
    let _clean = EnvGuard::clean();
    for (value, expected) in [("1", true), ("2", true), ("0", false), ("yes", true), ("", false)] {
        let _env = EnvGuard::new(vec![("TRY_INTERACTIVE", Some(value))]);
        assert_eq!(resolve(&["try"]).unwrap().interactive, expected, "TRY_INTERACTIVE={value}");
    }
}

#[test]
#[serial]
fn interactive_flag_beats_disabled_environment() {
    let _clean = EnvGuard::clean();
    let _env = EnvGuard::new(vec![("TRY_INTERACTIVE", Some("0"))]);
    assert!(resolve(&["try", "--interactive"]).unwrap().interactive);
}

#[test]
#[serial]
fn shell_from_environment() {
    let _clean = EnvGuard::clean();
    let _env = EnvGuard::new(vec![("SHELL", Some("/bin/dummy_shell"))]);
    assert_eq!(resolve(&["try"]).unwrap().shell, PathBuf::from("/bin/dummy_shell"));
}

#[test]
#[serial]
fn empty_shell_falls_back_to_default() {
    let _clean = EnvGuard::clean();
    let _env = EnvGuard::new(vec![("SHELL", Some(""))]);
    assert_eq!(resolve(&["try"]).unwrap().shell, PathBuf::from("/bin/sh"));
    assert_eq!(
        resolve(&["try", "--shell", ""]).unwrap().shell,
        PathBuf::from("/bin/sh")
    );
}

#[test]
#[serial]
fn shell_flag_beats_environment() {
    let _clean = EnvGuard::clean();
    let _env = EnvGuard::new(vec![("SHELL", Some("/bin/dummy_shell"))]);
    assert_eq!(
        resolve(&["try", "--shell", "/bin/bash"]).unwrap().shell,
        PathBuf::from("/bin/bash")
    );
}

#[test]
#[serial]
fn color_from_environment() {
    let _clean = EnvGuard::clean();
    let _env = EnvGuard::new(vec![("TRY_COLOR", Some("Always"))]);
    assert_eq!(resolve(&["try"]).unwrap().color, ColorMode::Always);
    assert_eq!(
        resolve(&["try", "--color", "never"]).unwrap().color,
        ColorMode::Never
    );
}

#[test]
#[serial]
fn malformed_color_is_a_user_error() {
    let _clean = EnvGuard::clean();
    let _env = EnvGuard::new(vec![("TRY_COLOR", Some("sometimes"))]);
    let err = resolve(&["try"]).unwrap_err();
    assert!(is_user_error(&err));
    assert!(err.to_string().contains("TRY_COLOR"));

    // The flag wins, so the bad environment value is never consulted
    assert_eq!(
        resolve(&["try", "--color", "auto"]).unwrap().color,
        ColorMode::Auto
    );
}

#[test]
#[serial]
fn debug_from_environment() {
    let _clean = EnvGuard::clean();
    let _env = EnvGuard::new(vec![("TRY_DEBUG", Some("1"))]);
    assert!(resolve(&["try"]).unwrap().debug);
}

#[test]
fn settings_become_an_invocation() {
    let settings = Settings {
        shell: PathBuf::from("/bin/bash"),
        interactive: true,
        color: ColorMode::Never,
        verbose: true,
        debug: false,
    };
    let config = settings.into_invocation(vec!["ls".into(), "-l".into()]);
    assert_eq!(config.shell, PathBuf::from("/bin/bash"));
    assert!(config.interactive);
    assert_eq!(config.color, ColorMode::Never);
    assert!(config.echo_enabled());
    assert_eq!(config.subcommand, ["ls", "-l"]);
}
