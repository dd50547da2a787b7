//! Integration tests that run the CLI binary.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::process::Stdio;

fn bin() -> std::process::Command {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_textscrub"));
    cmd.env_remove("OPENROUTER_API_KEY");
    cmd.env_remove("OPENROUTER_BASE_URL");
    cmd.env_remove("OPENROUTER_MODEL");
    cmd
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = bin()
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("textscrub"));
    assert!(stdout.contains("--remove"));
}

#[test]
fn cli_version_succeeds() {
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("textscrub"));
}

#[test]
fn one_shot_removal_is_case_insensitive_and_global() {
    let output = bin()
        .args(["-r", "foo", "-t", "foo bar FOO"])
        .output()
        .expect("binary not found");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), " bar \n");
}

#[test]
fn one_shot_removal_treats_metacharacters_literally() {
    let output = bin()
        .args(["-r", ".*", "-t", "a.*b"])
        .output()
        .expect("binary not found");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "ab\n");
}

#[test]
fn one_shot_removal_reads_stdin_when_no_text_flag() {
    let mut child = bin()
        .args(["-r", "world"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary not found");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(b"hello world")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait for child");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "hello \n");
}

#[test]
fn one_shot_removal_rejects_empty_source_text() {
    let output = bin()
        .args(["-r", "foo", "-t", ""])
        .output()
        .expect("binary not found");

    assert!(!output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("Please enter some text first"),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn ask_without_api_key_fails_without_network() {
    // Run from a temp dir so dotenv() won't load .env from the project root,
    // and point the config dir somewhere empty so no key file is found.
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["-r", "foo", "-t", "foo question", "--ask"])
        .current_dir(tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path())
        .env("HOME", tmp.path())
        .output()
        .expect("binary not found");

    assert!(!output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("OPENROUTER_API_KEY is not set"),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// One-shot HTTP stub for the --ask flow.
fn stub_completion_server(body: &'static str) -> (String, std::thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut received = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).expect("read request");
            received.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&received).into_owned();
            if n == 0 {
                break;
            }
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text
                    .lines()
                    .find_map(|l| {
                        l.to_ascii_lowercase()
                            .strip_prefix("content-length:")
                            .and_then(|v| v.trim().parse::<usize>().ok())
                    })
                    .unwrap_or(0);
                if received.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).expect("write response");
        String::from_utf8_lossy(&received).into_owned()
    });
    (format!("http://{}", addr), handle)
}

#[test]
fn ask_prints_the_model_reply() {
    let (base_url, handle) =
        stub_completion_server(r#"{"choices":[{"message":{"content":"looks fine"}}]}"#);
    let tmp = tempfile::TempDir::new().expect("temp dir");

    let output = bin()
        .args(["-r", "secret ", "-t", "review this secret text"])
        .arg("--ask")
        .current_dir(tmp.path())
        .env("OPENROUTER_API_KEY", "sk-or-test")
        .env("OPENROUTER_BASE_URL", &base_url)
        .output()
        .expect("binary not found");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), "looks fine\n");

    // The scrubbed text, not the original, is what went over the wire.
    let request = handle.join().expect("stub thread");
    assert!(request.contains("review this text"));
    assert!(!request.contains("secret"));
}
