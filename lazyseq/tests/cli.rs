use std::io::{self, Write};
use std::process::{Command, Output, Stdio};

fn run(args: &[&str], stdin: &str) -> io::Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lazyseq"))
        .args(args)
        .env("LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child.stdin.take().unwrap().write_all(stdin.as_bytes())?;
    child.wait_with_output()
}

fn give(args: &[&str], stdin: &str, expect: &str) {
    let out = run(args, stdin).unwrap();
    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(out.status.success(), "stderr: {stderr}");
    assert_eq!(stdout.trim(), expect.trim());
}

fn fail(args: &[&str], stdin: &str, code: i32, msg: &str) {
    let out = run(args, stdin).unwrap();
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(out.status.code(), Some(code));
    assert!(stderr.contains(msg), "stderr: {stderr}");
}

#[test]
fn zip_tuples() {
    give(&["zip", "[1,2]", "[3,4]"], "", "[1,3]\n[2,4]");
    give(&["zip", "[1,2,3]", "[\"a\"]"], "", "[1,\"a\"]");
}

#[test]
fn zip_objects() {
    give(&["zip", r#"{"a":1,"b":2}"#, "[3,4]"], "", "[1,3]\n[2,4]");
}

#[test]
fn zip_with() {
    give(&["zip", "--with", "sum", "[1,2]", "[3,4]"], "", "4\n6");
    give(&["zip", "--with", "max", "[1,5]", "[2,4]", "[0,0]"], "", "2\n5");
    give(&["zip", "--with", "concat", r#"["a","b"]"#, r#"["c","d"]"#], "", "\"ac\"\n\"bd\"");
    give(&["zip", "--with", "sub", "[5,1]", "[2,4]"], "", "3\n-3");
}

#[test]
fn zip_stdin() {
    give(&["zip"], "[1,2]\n[3,4]", "[1,3]\n[2,4]");
    give(&["zip"], "", "");
}

#[test]
fn zip_errors() {
    fail(&["zip", "--with", "sub", "[1]", "[2]", "[3]"], "", 5, "takes 2 values");
    fail(&["zip", "--with", "sum", "[1]", "[\"a\"]"], "", 5, "cannot add");
    fail(&["zip", "1"], "", 5, "cannot iterate over 1");
    fail(&["zip", "[1"], "", 2, "failed to parse");
}

#[test]
fn buffer_passes() {
    give(&["buffer", "[1,2]"], "", "[0,1]\n[1,2]\n[0,1]\n[1,2]");
    give(&["buffer", "--passes", "1", r#"{"a":true}"#], "", "[\"a\",true]");
}

#[test]
fn buffer_take() {
    let expect = "[0,\"x\"]\n[0,\"x\"]\n[1,\"y\"]";
    give(&["buffer", "--passes", "1", "--take", "1", r#"["x","y"]"#], "", expect);
}

#[test]
fn buffer_stdin() {
    give(&["buffer", "--passes", "1"], "[7]", "[0,7]");
}
