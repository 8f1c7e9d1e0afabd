//! caseconv CLI tests.

use assert_cmd::Command;
use predicates::str::contains;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn caseconv() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("caseconv")?;
    cmd.env("CLICOLOR", "0");
    Ok(cmd)
}

#[test]
fn dies_no_args() -> TestResult {
    caseconv()?
        .assert()
        .failure()
        .stderr(contains("Usage:"))
        .stderr(contains("Commands:"));

    Ok(())
}

#[test]
fn converts_arguments() -> TestResult {
    let cases = [
        ("camel", "helloWorld"),
        ("gocamel", "helloWorld"),
        ("pascal", "HelloWorld"),
        ("gopascal", "HelloWorld"),
        ("snake", "hello_world"),
        ("uppersnake", "HELLO_WORLD"),
        ("kebab", "hello-world"),
        ("upperkebab", "HELLO-WORLD"),
    ];

    for (command, expected) in cases {
        caseconv()?
            .args([command, "hello", "world"])
            .assert()
            .success()
            .stdout(format!("{expected}\n"));
    }

    Ok(())
}

#[test]
fn snake_splits_pascal_input() -> TestResult {
    caseconv()?
        .args(["snake", "HelloWorld"])
        .assert()
        .success()
        .stdout("hello_world\n");

    Ok(())
}

#[test]
fn piped_input_matches_arguments() -> TestResult {
    let piped = caseconv()?
        .arg("pascal")
        .write_stdin("hello world\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let from_args = caseconv()?
        .args(["pascal", "hello world"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(piped, b"HelloWorld\n");
    assert_eq!(piped, from_args);
    Ok(())
}

#[test]
fn multiline_pipe_is_one_identifier() -> TestResult {
    caseconv()?
        .arg("kebab")
        .write_stdin("first line\r\nsecond line\n")
        .assert()
        .success()
        .stdout("first-line-second-line\n");

    Ok(())
}

#[test]
fn empty_pipe_prints_empty_line() -> TestResult {
    caseconv()?
        .arg("camel")
        .write_stdin("")
        .assert()
        .success()
        .stdout("\n");

    Ok(())
}

#[test]
fn go_flavored_commands_keep_initialisms() -> TestResult {
    caseconv()?
        .args(["gopascal", "api_base_url"])
        .assert()
        .success()
        .stdout("APIBaseURL\n");

    caseconv()?
        .args(["gocamel", "user", "id"])
        .assert()
        .success()
        .stdout("userID\n");

    Ok(())
}

#[test]
fn debug_logs_stay_off_stdout() -> TestResult {
    caseconv()?
        .args(["--debug", "uppersnake", "helloWorld"])
        .assert()
        .success()
        .stdout("HELLO_WORLD\n");

    Ok(())
}

#[test]
fn help_lists_every_command() -> TestResult {
    let output = caseconv()?.arg("--help").output()?;
    assert!(output.status.success());
    let help = String::from_utf8(output.stdout)?;
    for name in [
        "camel",
        "gocamel",
        "pascal",
        "gopascal",
        "snake",
        "uppersnake",
        "kebab",
        "upperkebab",
    ] {
        assert!(help.contains(name), "help is missing {name}");
    }
    assert!(help.contains("echo \"hello world\" | caseconv pascal"));

    caseconv()?
        .args(["snake", "--help"])
        .assert()
        .success()
        .stdout(contains("'hello world' -> 'hello_world'"));

    Ok(())
}
