use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn floorpay() -> Command {
    let mut cmd = Command::cargo_bin("floorpay").unwrap();
    // Keep developer config out of the way
    cmd.env_remove("FLOORPAY_ORIGIN")
        .env_remove("FLOORPAY_TIMEOUT_MS")
        .env("XDG_CONFIG_HOME", "/nonexistent-floorpay-config");
    cmd
}

const PAYMENT: &str = r#"{
    "status": "DONE",
    "id": "tgen_1",
    "version": "2022-11-16",
    "requestdAt": "2024-03-01T09:00:00+09:00",
    "statusChangedAt": "2024-03-01T09:00:03+09:00",
    "orderName": "Position B2-07",
    "amount": { "total": 5500, "taxFree": 0, "vat": 500, "supply": 5000,
                "discount": 0, "cancelled": 0, "cancelledTaxFree": 0 },
    "currency": "KRW",
    "paidAt": "2024-03-01T09:00:02+09:00",
    "receiptUrl": "https://receipts.example/r/1",
    "macAddress": "AA:BB:CC:DD:EE:01"
}"#;

#[test]
fn routes_lists_every_view() {
    floorpay()
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("node-manage"))
        .stdout(predicate::str::contains("/payment-success"))
        .stdout(predicate::str::contains("/generate-qr"))
        .stdout(predicate::str::contains("protected"));
}

#[test]
fn navigate_to_unprotected_view_does_not_prompt() {
    floorpay()
        .args(["navigate", "/payment"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("payment (/payment)"));
}

#[test]
fn navigate_to_unknown_path_fails() {
    floorpay()
        .args(["navigate", "/nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Route '/nowhere' not found"));
}

#[test]
fn login_without_password_is_refused() {
    floorpay()
        .arg("login")
        .write_stdin("   \n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Not logged in, back at home"))
        .stderr(predicate::str::contains("incorrect").not());
}

#[test]
fn protected_view_redirects_when_server_unreachable() {
    floorpay()
        .args(["--origin", "http://127.0.0.1:9", "--timeout-ms", "300"])
        .args(["navigate", "/manage"])
        .write_stdin("secret\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("node-manage refused, redirected to home"))
        .stderr(predicate::str::contains("The password is incorrect."));
}

#[test]
fn payment_record_is_shown() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("payment.json");
    std::fs::write(&file, PAYMENT).unwrap();

    floorpay()
        .arg("payment")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Position B2-07 [DONE]"))
        .stdout(predicate::str::contains("5500 KRW"))
        .stdout(predicate::str::contains("do not").not());
}

#[test]
fn payment_amount_mismatch_is_flagged() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("payment.json");
    std::fs::write(&file, PAYMENT.replace("\"total\": 5500", "\"total\": 6000")).unwrap();

    floorpay()
        .arg("payment")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "amount components sum to 5500 but total is 6000",
        ));
}

#[test]
fn slaves_filtered_by_floor() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("slaves.json");
    std::fs::write(
        &file,
        r#"{ "slaves": [
            { "macAddress": "AA:00:00:00:00:01", "position": { "floor": 1, "x": 1, "y": 2 } },
            { "macAddress": "AA:00:00:00:00:02", "position": { "floor": 2, "x": 3, "y": 4 } }
        ] }"#,
    )
    .unwrap();

    floorpay()
        .arg("slaves")
        .arg(&file)
        .args(["--floor", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AA:00:00:00:00:02"))
        .stdout(predicate::str::contains("AA:00:00:00:00:01").not())
        .stdout(predicate::str::contains("1 device(s)"));
}

#[test]
fn malformed_record_file_fails() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("broken.json");
    std::fs::write(&file, "{ not json").unwrap();

    floorpay()
        .arg("payment")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn payment_with_extreme_amounts_is_flagged_not_fatal() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("payment.json");
    let extreme = PAYMENT
        .replace("\"total\": 5500", "\"total\": 9223372036854775807")
        .replace("\"supply\": 5000", "\"supply\": 9223372036854775807")
        .replace("\"vat\": 500", "\"vat\": 1");
    std::fs::write(&file, extreme).unwrap();

    floorpay()
        .arg("payment")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "amount components sum to 9223372036854775808 but total is 9223372036854775807",
        ));
}
