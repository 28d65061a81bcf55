use std::process::{Command, Output, Stdio};

fn godsays(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_godsays"))
        .args(args)
        .env_remove("GODSAYS_AMOUNT")
        .output()
        .expect("failed to run godsays")
}

#[test]
fn prints_a_phrase_by_default() {
    let output = godsays(&[]);

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with('\n'));
    assert!(stdout.split_whitespace().count() >= 32);
}

#[test]
fn honors_amount() {
    for args in [&["-amount", "5"][..], &["--amount", "5"][..], &["-amount=5"][..]] {
        let output = godsays(args);
        assert!(output.status.success(), "{args:?}: {output:?}");
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.split_whitespace().count() >= 5, "{stdout}");
    }
}

#[test]
fn rejects_invalid_amounts() {
    for amount in ["0", "-1", "1001", "abc"] {
        let output = godsays(&["-amount", amount]);
        assert_eq!(output.status.code(), Some(1), "{amount}: {output:?}");
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("1000"), "{amount}: {stderr}");
    }
}

#[test]
fn help_exits_cleanly() {
    let output = godsays(&["-help"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("--amount"), "{stdout}");
    assert!(stdout.contains("Examples:"), "{stdout}");
}

#[test]
fn closed_stdout_is_not_an_error() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_godsays"))
        .args(["-amount", "1000"])
        .env_remove("GODSAYS_AMOUNT")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run godsays");
    drop(child.stdout.take());

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "{output:?}");
}
