use std::io::Write;
use std::process::{Command, Output, Stdio};

fn score_events(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_score-events"))
        .args(args)
        .env("TENNIS_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn accepted_events_print_one_snapshot_each() {
    let input = concat!(
        r#"{"kind":"PointScored","player":"Player2"}"#,
        "\n",
        r#"{"kind":"NewMatch"}"#,
        "\n",
    );
    let output = score_events(&[], input);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["currentGame"]["player2Point"], "FIFTEEN");
    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["currentGame"]["player2Point"], "LOVE");
}

#[test]
fn rejected_line_goes_to_stderr_and_exit_is_clean() {
    let input = concat!(
        r#"{"kind":"Fault"}"#,
        "\n",
        r#"{"kind":"PointScored","player":"Player1"}"#,
        "\n",
    );
    let output = score_events(&[], input);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 1);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line 1: unknown event kind: Fault"));
}

#[test]
fn invalid_resume_snapshot_exits_non_zero() {
    let path = std::env::temp_dir().join(format!("score-events-bad-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"sets":[[9,0],[0,0],[0,0]]}"#).unwrap();

    let output = score_events(&[path.to_str().unwrap()], "");
    std::fs::remove_file(&path).unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
