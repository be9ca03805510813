use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn tally(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tally")).args(args)
                                                            .stdin(Stdio::piped())
                                                            .stdout(Stdio::piped())
                                                            .stderr(Stdio::piped())
                                                            .spawn()
                                                            .unwrap_or_else(|e| panic!("Failed to start tally: {e}"));
    // A rejected command line exits before reading, so the pipe may be closed.
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }
    child.wait_with_output().unwrap()
}

#[test]
fn end_of_input_exits_successfully() {
    let output = tally(&[], "a = 4 ; b = a * 2 ; c = missing ;");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "val=4\nval=8\nval=0\n");
    assert!(String::from_utf8(output.stderr).unwrap()
                                            .contains("Invalid variable missing"));
}

#[test]
fn verbose_flag_traces_tokens_on_stderr() {
    let output = tally(&["-v"], "a = 1 ;");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "val=1\n");
    assert!(String::from_utf8(output.stderr).unwrap()
                                            .contains("Token: Identifier value: a (line 1)"));
}

#[test]
fn unknown_arguments_print_usage_and_fail() {
    for args in [&["input.txt"][..], &["--bogus"][..]] {
        let output = tally(args, "a = 1 ;");
        assert_eq!(output.status.code(), Some(2), "Unexpected status for {args:?}");
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8(output.stderr).unwrap().contains("Usage"));
    }
}
