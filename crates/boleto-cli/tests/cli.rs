use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SANTANDER: &str = r#"{
    "bank": {"kind": "santander", "agency": "1333", "assignee_code": "0707077", "wallet": "102", "document_number": "000001234567"},
    "amount": "2952.95",
    "due_date": "2012-12-28",
    "payee": {"name": "Empresa Exemplo Ltda"},
    "payer": {"name": "Fulano de Tal", "document": "123.456.789-09"}
}"#;

const CAIXA: &str = r#"{
    "bank": {"kind": "caixa", "agency": "1333", "assignee_code": "792157",
             "wallet": "14", "document_number": "946375189643625"},
    "amount": "2952.95",
    "due_date": "2015-03-16",
    "payee": {"name": "Empresa Exemplo Ltda"},
    "payer": {"name": "Fulano de Tal"}
}"#;

const SANTANDER_BARCODE: &str = "03391556100002952959070707700000123456790102";
const SANTANDER_LINE: &str = "03399.07073 07700.000123 34567.901029 1 55610000295295";

/// `boleto` with its config directory isolated in `home`.
fn boleto(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("boleto").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"));
    cmd
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_line_from_barcode() {
    let home = TempDir::new().unwrap();
    boleto(&home)
        .args(["line", SANTANDER_BARCODE])
        .assert()
        .success()
        .stdout(format!("{SANTANDER_LINE}\n"));
}

#[test]
fn test_line_of_malformed_barcode_is_empty() {
    let home = TempDir::new().unwrap();
    boleto(&home)
        .args(["line", "0339155610000295295"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_line_reverse() {
    let home = TempDir::new().unwrap();
    boleto(&home)
        .args(["line", "--reverse", SANTANDER_LINE])
        .assert()
        .success()
        .stdout(format!("{SANTANDER_BARCODE}\n"));

    boleto(&home)
        .args(["line", "-r", "03399.07073 07700.000123 34567.901028 1 55610000295295"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid digitable line"));
}

#[test]
fn test_line_reverse_keeps_barcode_check_digit_as_printed() {
    let home = TempDir::new().unwrap();
    boleto(&home)
        .args([
            "line",
            "--reverse",
            "34191.09123 34567.880058 71234.570001 6 16670000012345",
        ])
        .assert()
        .success()
        .stdout("34196166700000123451091234567880057123457000\n");
}

#[test]
fn test_generate_json() {
    let home = TempDir::new().unwrap();
    let record = write(home.path(), "santander.json", SANTANDER);

    boleto(&home)
        .args(["generate", &record])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("\"barcode\": \"{SANTANDER_BARCODE}\"")))
        .stdout(predicate::str::contains("\"our_number\": \"000001234567-9\""))
        .stdout(predicate::str::contains("\"bank_code\": \"033-7\""));
}

#[test]
fn test_generate_text_to_file() {
    let home = TempDir::new().unwrap();
    let record = write(home.path(), "caixa.json", CAIXA);
    let output = home.path().join("caixa.txt");

    boleto(&home)
        .args(["generate", &record, "--format", "text", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Output written to"));

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("104-0 | 10497.92151 78946.137540 18964.362505 2 63690000295295\n"));
    assert!(text.contains("Wallet: RG\n"));
}

#[test]
fn test_generate_validate_reports_issues() {
    let home = TempDir::new().unwrap();
    let record = write(home.path(), "caixa.json", CAIXA);

    boleto(&home)
        .args(["generate", &record, "--validate"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Missing payer document"));
}

#[test]
fn test_generate_rejects_bad_record() {
    let home = TempDir::new().unwrap();
    let record = write(
        home.path(),
        "bad.json",
        r#"{"bank": {"kind": "caixa", "assignee_code": "792157", "wallet": "10",
                     "document_number": "1"}, "due_date": "2015-03-16"}"#,
    );

    boleto(&home)
        .args(["generate", &record])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not support wallet"));
}

#[test]
fn test_generate_missing_file() {
    let home = TempDir::new().unwrap();
    boleto(&home)
        .args(["generate", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_batch_with_summary() {
    let home = TempDir::new().unwrap();
    let records = home.path().join("records");
    fs::create_dir_all(&records).unwrap();
    write(&records, "a.json", SANTANDER);
    write(&records, "b.json", CAIXA);
    write(&records, "c.json", r#"{"bank": {"kind": "hsbc"}}"#);
    let out = home.path().join("out");
    let pattern = format!("{}/*.json", records.display());

    boleto(&home)
        .args(["batch", &pattern, "--summary", "--continue-on-error", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 successful, 1 failed"));

    assert!(out.join("a.json").exists());
    assert!(out.join("b.json").exists());
    assert!(!out.join("c.json").exists());

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("filename,status,bank"));
    assert!(lines[1].starts_with("a.json,success,Santander,000001234567-9,2952.95,2012-12-28,"));
    assert!(lines[3].starts_with("c.json,error,"));
}

#[test]
fn test_batch_same_stem_in_two_directories() {
    let home = TempDir::new().unwrap();
    for month in ["2012-12", "2015-03"] {
        fs::create_dir_all(home.path().join("records").join(month)).unwrap();
    }
    write(&home.path().join("records/2012-12"), "slip.json", SANTANDER);
    write(&home.path().join("records/2015-03"), "slip.json", CAIXA);
    let out = home.path().join("out");
    let pattern = format!("{}/records/*/slip.json", home.path().display());

    boleto(&home)
        .args(["batch", &pattern, "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 successful, 0 failed"));

    let first = fs::read_to_string(out.join("slip.json")).unwrap();
    let second = fs::read_to_string(out.join("slip-2.json")).unwrap();
    assert!(first.contains(SANTANDER_BARCODE));
    assert!(second.contains("10492636900002952957921578946137541896436250"));
}

#[test]
fn test_batch_stops_on_first_error() {
    let home = TempDir::new().unwrap();
    write(home.path(), "bad.json", r#"{"bank": {"kind": "hsbc"}}"#);
    let pattern = format!("{}/*.json", home.path().display());

    boleto(&home)
        .args(["batch", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed"));
}

#[test]
fn test_config_init_set_get() {
    let home = TempDir::new().unwrap();

    boleto(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not created"));

    boleto(&home).args(["config", "init"]).assert().success();
    boleto(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    boleto(&home)
        .args(["config", "set", "expiration.overflow", "reject"])
        .assert()
        .success();
    boleto(&home)
        .args(["config", "get", "expiration.overflow"])
        .assert()
        .success()
        .stdout("\"reject\"\n");

    boleto(&home)
        .args(["config", "set", "currency_code", "\"99\""])
        .assert()
        .failure();
    boleto(&home)
        .args(["config", "get", "no_such_key"])
        .assert()
        .failure();
}

#[test]
fn test_config_file_affects_generation() {
    let home = TempDir::new().unwrap();
    let config = write(
        home.path(),
        "strict.json",
        r#"{"expiration": {"overflow": "reject"}}"#,
    );
    let record = write(
        home.path(),
        "late.json",
        r#"{"bank": {"kind": "bradesco", "agency": "1172", "account": "403005",
                     "wallet": "6", "document_number": "75896452"},
            "amount": "100", "due_date": "2025-03-01"}"#,
    );

    boleto(&home)
        .args(["generate", &record, "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("23791100700000100001172060007589645204030050"));

    boleto(&home)
        .args(["--config", &config, "generate", &record])
        .assert()
        .failure();
}

#[test]
fn test_config_commands_follow_config_flag() {
    let home = TempDir::new().unwrap();
    let settings = home.path().join("settings").join("boleto.json");

    boleto(&home)
        .arg("--config")
        .arg(&settings)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(settings.exists());

    boleto(&home)
        .arg("--config")
        .arg(&settings)
        .args(["config", "set", "species", "US$"])
        .assert()
        .success();
    boleto(&home)
        .arg("--config")
        .arg(&settings)
        .args(["config", "get", "species"])
        .assert()
        .success()
        .stdout("\"US$\"\n");

    boleto(&home)
        .args(["config", "get", "species"])
        .assert()
        .success()
        .stdout("\"R$\"\n");
}
