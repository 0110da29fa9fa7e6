use std::{
    path::Path,
    process::{Command, Output},
};

fn inline(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_inline"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs")
}

#[test]
fn missing_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "hello").unwrap();

    let out = inline(dir.path(), &["-p", "assets", "a.txt", "missing.txt"]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with(
        "// Code generated by \"inline -p assets a.txt missing.txt\" -- DO NOT EDIT --\n"
    ));
    assert!(stdout.contains("\npackage assets\n"));
    assert!(stdout.contains("func ReadAsset(file string, useLocal bool) ([]byte, error) {"));
    assert!(stdout.contains("var files = map[string]string{\n\t\"a.txt\": `hello`,\n}\n"));

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("missing.txt"), "{stderr}");
}

#[test]
fn writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "hello").unwrap();

    let out = inline(dir.path(), &["-o", "assets.go", "a.txt"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());

    let written = std::fs::read_to_string(dir.path().join("assets.go")).unwrap();
    assert!(written.contains("\npackage main\n"));
    assert!(written.contains("\t\"a.txt\": `hello`,\n"));
}

#[test]
fn same_invocation_same_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "a`b\r\n").unwrap();
    std::fs::write(dir.path().join("b.bin"), [0u8, 255, 10]).unwrap();

    let args = ["a.txt", "b.bin"];
    let one = inline(dir.path(), &args);
    let two = inline(dir.path(), &args);
    assert!(one.status.success());
    assert_eq!(one.stdout, two.stdout);

    let stdout = String::from_utf8(one.stdout).unwrap();
    assert!(stdout.contains("\t\"a.txt\": \"a`b\\r\\n\",\n"));
    assert!(stdout.contains("\t\"b.bin\": \"\\x00\\xff\\n\",\n"));
}

#[test]
fn rust_target() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "hello").unwrap();

    let out = inline(dir.path(), &["--lang", "rust", "-p", "assets", "a.txt"]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("\npub mod assets {\n"));
    assert!(stdout.contains("        (\"a.txt\", r\"hello\".as_bytes()),\n"));
}

#[test]
fn invalid_package_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "hello").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_inline"))
        .current_dir(dir.path())
        .args(["-p", "my-assets", "-o", "assets.go", "a.txt"])
        .env("RUST_LOG", "off")
        .output()
        .expect("binary runs");
    assert_eq!(out.status.code(), Some(1));
    assert!(!dir.path().join("assets.go").exists());

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("'my-assets' is not a valid go package name"), "{stderr}");
}

#[test]
fn files_are_required() {
    let dir = tempfile::tempdir().unwrap();
    let out = inline(dir.path(), &["-p", "assets"]);
    assert!(!out.status.success());
}

// Built next to the generated module; exits non-zero on the first failed check.
const ACCESSOR_CHECK: &str = r###"include!("assets.rs");

fn main() {
    let every_byte: Vec<u8> = (0..=255).collect();
    let embedded = assets::read_asset("bytes.bin", false).unwrap();
    assert_eq!(&*embedded, &every_byte[..]);

    let rtl = "rtl\u{202e}.txt";
    let embedded = assets::read_asset(rtl, false).unwrap();
    assert_eq!(&*embedded, "abc \u{202e} def `x` \"# y\"##".as_bytes());

    let embedded = assets::read_asset("stale.txt", false).unwrap();
    assert_eq!(&*embedded, b"embedded");
    let local = assets::read_asset("stale.txt", true).unwrap();
    assert_eq!(&*local, b"on disk");

    let absent = assets::read_asset("absent.txt", false).unwrap_err();
    assert!(matches!(absent, assets::AssetError::NotExist));
    assert_eq!(absent.to_string(), "file doesn't exist.");

    let unreadable = assets::read_asset("absent.txt", true).unwrap_err();
    assert!(matches!(unreadable, assets::AssetError::Io(_)));
}
"###;

#[test]
fn rust_accessor_compiles_and_reads() {
    let dir = tempfile::tempdir().unwrap();
    let every_byte: Vec<u8> = (0..=255).collect();
    std::fs::write(dir.path().join("bytes.bin"), &every_byte).unwrap();
    std::fs::write(
        dir.path().join("rtl\u{202e}.txt"),
        "abc \u{202e} def `x` \"# y\"##",
    )
    .unwrap();
    std::fs::write(dir.path().join("stale.txt"), "embedded").unwrap();

    let out = inline(
        dir.path(),
        &[
            "-l",
            "rust",
            "-p",
            "assets",
            "-o",
            "assets.rs",
            "bytes.bin",
            "rtl\u{202e}.txt",
            "stale.txt",
        ],
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    std::fs::write(dir.path().join("stale.txt"), "on disk").unwrap();
    std::fs::write(dir.path().join("check.rs"), ACCESSOR_CHECK).unwrap();

    let check = format!("check{}", std::env::consts::EXE_SUFFIX);
    let rustc = std::env::var_os("RUSTC").unwrap_or_else(|| "rustc".into());
    let build = Command::new(rustc)
        .current_dir(dir.path())
        .args(["--edition", "2021", "-o", check.as_str(), "check.rs"])
        .output()
        .expect("rustc runs");
    assert!(
        build.status.success(),
        "{}",
        String::from_utf8_lossy(&build.stderr)
    );

    let run = Command::new(dir.path().join(&check))
        .current_dir(dir.path())
        .output()
        .expect("check runs");
    assert!(run.status.success(), "{}", String::from_utf8_lossy(&run.stderr));
}
