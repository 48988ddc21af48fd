#![cfg(feature = "cli")]

use std::path::PathBuf;
use std::process::{Command, Output};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "multicodec-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn multicodec(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_multicodec"))
        .env_remove("MULTICODEC_TABLE")
        .args(["--log-level", "error"])
        .args(args)
        .output()
        .expect("multicodec should run")
}

#[test]
fn tag_raw_matches_interop_vector() {
    let output = multicodec(&[
        "--format",
        "raw",
        "tag",
        "sha2-256",
        "--data",
        "EiC5TSe5k00",
    ]);

    assert!(output.status.success());
    let mut expected = vec![0x12];
    expected.extend_from_slice(b"EiC5TSe5k00");
    assert_eq!(output.stdout, expected);
}

#[test]
fn tag_json_reports_prefix() {
    let output = multicodec(&[
        "--format",
        "json",
        "tag",
        "blake2b-120",
        "--data",
        "EiC5TSe5k00",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"code\":\"0xb20f\""));
    assert!(stdout.contains("\"prefix_len\":3"));
    assert!(stdout.contains("\"tagged\":\"8fe402"));
}

#[test]
fn untag_json_recovers_codec_and_payload() {
    let output = multicodec(&["--format", "json", "untag", "--hex", "1268656c6c6f"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"codec\":\"sha2-256\""));
    assert!(stdout.contains("\"code\":\"0x12\""));
    assert!(stdout.contains("\"payload\":\"hello\""));
    assert!(stdout.contains("\"prefix_len\":1"));
}

#[test]
fn untag_json_reports_multibyte_code() {
    let output = multicodec(&["--format", "json", "untag", "--hex", "8fe4026869"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"codec\":\"blake2b-120\""));
    assert!(stdout.contains("\"code\":\"0xb20f\""));
    assert!(stdout.contains("\"prefix_len\":3"));
    assert!(stdout.contains("\"payload_size\":2"));
}

#[test]
fn untag_raw_from_file() {
    let dir = unique_temp_dir("untag-file");
    let path = dir.join("tagged.bin");
    std::fs::write(&path, [0x8F, 0xE4, 0x02, 0x00, 0xFF]).expect("write should succeed");

    let output = multicodec(&[
        "--format",
        "raw",
        "untag",
        "--file",
        path.to_str().expect("utf-8 temp path"),
    ]);

    assert!(output.status.success());
    assert_eq!(output.stdout, vec![0x00, 0xFF]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unknown_codec_returns_60() {
    let output = multicodec(&["tag", "not-a-real-codec", "--data", "x"]);

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown codec: not-a-real-codec"));
}

#[test]
fn unknown_code_returns_60() {
    let output = multicodec(&["untag", "--hex", "f7ee01"]);
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn truncated_prefix_returns_60() {
    let output = multicodec(&["untag", "--hex", "8080"]);

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("truncated varint"));
}

#[test]
fn custom_table_is_used() {
    let dir = unique_temp_dir("custom-table");
    let path = dir.join("table.csv");
    std::fs::write(
        &path,
        "name,tag,code,description\nmy-codec,private,0x300001,\nnot a row\n",
    )
    .expect("write should succeed");

    let output = multicodec(&[
        "--table",
        path.to_str().expect("utf-8 temp path"),
        "--format",
        "raw",
        "list",
    ]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "my-codec\n");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn duplicate_codes_rejected_on_request() {
    let dir = unique_temp_dir("duplicates");
    let path = dir.join("table.csv");
    std::fs::write(&path, "first,x,0x10\nsecond,x,0x10\n").expect("write should succeed");
    let table = path.to_str().expect("utf-8 temp path");

    let rejected = multicodec(&["--table", table, "--duplicates", "reject", "list"]);
    assert_eq!(rejected.status.code(), Some(1));

    let kept = multicodec(&["--table", table, "--format", "raw", "list"]);
    assert!(kept.status.success());
    assert_eq!(String::from_utf8_lossy(&kept.stdout), "first\n");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn list_filter_json() {
    let output = multicodec(&["--format", "json", "list", "--filter", "sha2-"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"name\":\"sha2-256\""));
    assert!(stdout.contains("\"name\":\"sha2-512\""));
    assert!(!stdout.contains("blake2b"));
}

#[test]
fn varint_encode_and_decode() {
    let encoded = multicodec(&["--format", "json", "varint", "encode", "300"]);
    assert!(encoded.status.success());
    let stdout = String::from_utf8_lossy(&encoded.stdout);
    assert!(stdout.contains("\"bytes\":\"ac02\""));
    assert!(stdout.contains("\"bits\":\"10101100 00000010\""));

    let decoded = multicodec(&["--format", "json", "varint", "decode", "808001"]);
    assert!(decoded.status.success());
    let stdout = String::from_utf8_lossy(&decoded.stdout);
    assert!(stdout.contains("\"value\":16384"));
    assert!(stdout.contains("\"len\":3"));
}

#[test]
fn varint_encode_negative_returns_64() {
    let output = multicodec(&["varint", "encode", "-1"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn varint_encode_rejects_doubled_sign() {
    for value in ["-0x-5", "-+5", "0x+ff"] {
        let output = multicodec(&["varint", "encode", "--", value]);

        assert!(!output.status.success(), "value {value}");
        assert!(output.stdout.is_empty(), "value {value}");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("invalid integer"), "value {value}");
    }
}

#[test]
fn version_reports_package() {
    let output = multicodec(&["version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("multicodec "));
}

#[test]
fn version_extended_counts_builtin_registry() {
    let output = multicodec(&["version", "--extended"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("name: multicodec\n"));
    assert!(stdout.contains("builtin_codecs: 214\n"));
}
