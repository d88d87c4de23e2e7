use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{json, Value};
use wiremock::matchers::{method, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_bookings"))
}

fn temp_xdg_dirs(prefix: &str) -> (PathBuf, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time")
        .as_nanos();
    let base = std::env::temp_dir().join(format!(
        "bk_{}_{}_{}",
        prefix,
        std::process::id(),
        nanos
    ));
    let config = base.join("c");
    let data = base.join("d");
    std::fs::create_dir_all(&config).expect("create config dir");
    std::fs::create_dir_all(&data).expect("create data dir");
    (config, data)
}

fn apply_xdg_env(cmd: &mut Command, config: &Path, data: &Path) {
    cmd.env("XDG_CONFIG_HOME", config)
        .env("XDG_DATA_HOME", data)
        .env_remove("BOOKINGS_STORE")
        .env_remove("BOOKINGS_CONFIG")
        .env_remove("BOOKINGS_LOG")
        .env_remove("RUST_LOG")
        .env_remove("GEMINI_API_KEY")
        .env("NO_COLOR", "1");
}

struct Env {
    config: PathBuf,
    data: PathBuf,
}

impl Env {
    fn new(prefix: &str) -> Self {
        let (config, data) = temp_xdg_dirs(prefix);
        Self { config, data }
    }

    fn cmd(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(bin());
        apply_xdg_env(&mut cmd, &self.config, &self.data);
        cmd.args(args);
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.cmd(args).output().expect("run bookings")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "bookings {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let stdout = self.run_ok(args);
        serde_json::from_str(&stdout).expect("valid json output")
    }

    fn store_dir(&self) -> PathBuf {
        self.data.join("bookings")
    }
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_init_writes_config_and_seeds_store() {
    let env = Env::new("init");
    env.run_ok(&["init", "--seed", "--timezone", "Asia/Kolkata"]);

    let config = std::fs::read_to_string(env.config.join("bookings").join("config.toml"))
        .expect("config written");
    assert!(config.contains("[store]"));
    assert!(config.contains(&env.store_dir().to_string_lossy().to_string()));
    assert!(config.contains("Asia/Kolkata"));
    assert!(env.store_dir().join("event_bookings.json").exists());

    let list = env.run_json(&["list", "--json"]);
    assert_eq!(list.as_array().map(Vec::len), Some(4));

    let again = env.run(&["init"]);
    assert_eq!(again.status.code(), Some(4));
    assert!(stderr(&again).contains("--force"));
}

#[test]
fn test_plain_init_starts_empty() {
    let env = Env::new("initempty");
    env.run_ok(&["init"]);
    assert_eq!(
        env.run_json(&["list", "--json"]).as_array().map(Vec::len),
        Some(0)
    );

    let help = env.run_ok(&["init", "--help"]);
    assert!(help.contains("stores start empty otherwise"));
}

#[test]
fn test_stats_over_seeded_ledger() {
    let env = Env::new("stats");
    env.run_ok(&["init", "--seed"]);

    let stats = env.run_json(&["stats", "--json"]);
    assert_eq!(stats["bookings"], 4);
    assert_eq!(stats["totals"]["paid"], 25200);
    assert_eq!(stats["totals"]["pending"], 11500);
    assert_eq!(stats["totals"]["total"], 36700);
    assert_eq!(stats["totals"]["pax"], 11);
    assert_eq!(stats["capacity"]["remaining"], 246);
}

#[test]
fn test_add_show_search_remove() {
    let env = Env::new("add");
    env.run_ok(&["init"]);

    let added = env.run_json(&[
        "add", "--name", "Ravi Kumar", "--phone", "9000012345", "--stag", "1", "--couple", "1",
        "--paid", "5000", "--json",
    ]);
    assert_eq!(added["totalPax"], 3);
    assert_eq!(added["totalCost"], 12500);
    assert_eq!(added["amountPending"], 7500);
    let id = added["id"].as_str().expect("id").to_string();

    let shown = env.run_json(&["show", &id[..8], "--json"]);
    assert_eq!(shown["name"], "Ravi Kumar");

    let found = env.run_json(&["search", "12345", "--json"]);
    assert_eq!(found.as_array().map(Vec::len), Some(1));
    let none = env.run_json(&["search", "nobody", "--json"]);
    assert_eq!(none.as_array().map(Vec::len), Some(0));

    env.run_ok(&["remove", &id]);
    let list = env.run_json(&["list", "--json"]);
    assert_eq!(list.as_array().map(Vec::len), Some(0));

    let missing = env.run(&["show", &id]);
    assert_eq!(missing.status.code(), Some(3));
}

#[test]
fn test_add_rejects_bad_input() {
    let env = Env::new("addbad");
    env.run_ok(&["init"]);

    let no_tickets = env.run(&["add", "--name", "A", "--phone", "1", "--no-input"]);
    assert_eq!(no_tickets.status.code(), Some(4));
    assert!(stderr(&no_tickets).contains("No tickets selected"));

    let no_phone = env.run(&["add", "--name", "A", "--stag", "1", "--no-input"]);
    assert_eq!(no_phone.status.code(), Some(4));
    assert!(stderr(&no_phone).contains("phone"));

    let list = env.run_json(&["list", "--json"]);
    assert_eq!(list.as_array().map(Vec::len), Some(0));
}

#[test]
fn test_add_rejects_oversized_payment() {
    let env = Env::new("addbig");
    env.run_ok(&["init"]);

    let args = [
        "add", "--name", "A", "--phone", "1", "--stag", "1", "--paid", "10000000000000000000",
        "--no-input",
    ];
    let first = env.run(&args);
    assert_eq!(first.status.code(), Some(4));
    assert!(stderr(&first).contains("Amount too large"));
    let second = env.run(&args);
    assert_eq!(second.status.code(), Some(4));

    let largest = env.run_json(&[
        "add", "--name", "B", "--phone", "2", "--stag", "1", "--paid", "9223372036854775807",
        "--json",
    ]);
    assert_eq!(largest["amountPending"], 6500 - i64::MAX);
    env.run_ok(&[
        "add", "--name", "C", "--phone", "3", "--stag", "1", "--paid", "9223372036854775807",
    ]);

    let stats = env.run_json(&["stats", "--json"]);
    assert_eq!(stats["bookings"], 2);
    assert_eq!(stats["totals"]["paid"], u64::MAX - 1);
    assert_eq!(stats["totals"]["pending"], i64::MIN);
    env.run_ok(&["stats"]);
    env.run_ok(&["list"]);
}

#[test]
fn test_clear_requires_confirmation() {
    let env = Env::new("clear");
    env.run_ok(&["init", "--seed"]);

    let refused = env.run(&["clear"]);
    assert_eq!(refused.status.code(), Some(4));
    assert!(stderr(&refused).contains("--yes"));
    assert_eq!(
        env.run_json(&["list", "--json"]).as_array().map(Vec::len),
        Some(4)
    );

    env.run_ok(&["clear", "--yes"]);
    assert_eq!(
        env.run_json(&["list", "--json"]).as_array().map(Vec::len),
        Some(0)
    );
}

#[test]
fn test_export_csv_and_json_file() {
    let env = Env::new("export");
    env.run_ok(&["init", "--seed"]);

    let csv = env.run_ok(&["export"]);
    let mut lines = csv.lines();
    assert!(lines.next().unwrap_or_default().starts_with("ID,Name,Phone"));
    assert_eq!(lines.count(), 4);

    let out = env.data.join("bookings.json");
    env.run_ok(&[
        "export",
        "--format",
        "json",
        "--output",
        &out.to_string_lossy(),
    ]);
    let exported: Value =
        serde_json::from_str(&std::fs::read_to_string(&out).expect("export file")).unwrap();
    assert_eq!(exported.as_array().map(Vec::len), Some(4));

    let bad = env.run(&["export", "--format", "xml"]);
    assert_eq!(bad.status.code(), Some(4));
}

#[test]
fn test_missing_store_points_at_init() {
    let env = Env::new("nostore");
    let output = env.run(&["list"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("bookings init"));
}

#[test]
fn test_insights_on_empty_ledger_needs_no_key() {
    let env = Env::new("insempty");
    env.run_ok(&["init"]);

    let stdout = env.run_ok(&["insights"]);
    assert!(stdout.contains("Add some bookings to generate AI insights."));

    let value = env.run_json(&["insights", "--json"]);
    assert_eq!(value["insights"], "Add some bookings to generate AI insights.");
}

#[test]
fn test_insights_without_key_is_external_error() {
    let env = Env::new("inskey");
    env.run_ok(&["init", "--seed"]);

    let output = env.run(&["insights"]);
    assert_eq!(output.status.code(), Some(6));
    assert!(stderr(&output).contains("GEMINI_API_KEY"));
}

#[test]
fn test_scan_rejects_unsupported_image() {
    let env = Env::new("scanext");
    env.run_ok(&["init"]);
    let sheet = env.data.join("sheet.pdf");
    std::fs::write(&sheet, b"%PDF").unwrap();

    let output = env.run(&["scan", &sheet.to_string_lossy()]);
    assert_eq!(output.status.code(), Some(4));
}

fn gemini_answer(text: &str) -> Value {
    json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    })
}

fn point_config_at(env: &Env, server: &MockServer) {
    let path = env.config.join("bookings").join("config.toml");
    let contents = format!(
        "[store]\npath = \"{}\"\n\n[gemini]\nbase_url = \"{}\"\n",
        env.store_dir().to_string_lossy(),
        server.uri()
    );
    std::fs::write(path, contents).expect("write config");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_scan_imports_valid_rows() {
    let env = Env::new("scan");
    env.run_ok(&["init"]);

    let server = MockServer::start().await;
    let rows = r#"[
        {"name":"Ms.Deepa","phone":"9486610479","tickets":{"Angels":1},"totalPax":2,"amountPaid":2000,"totalCost":4000,"amountPending":2000},
        {"name":"","phone":"8270580083","tickets":{"Couple":1},"totalPax":2,"amountPaid":1200,"totalCost":1200,"amountPending":0}
    ]"#;
    Mock::given(method("POST"))
        .and(path_regex(r":generateContent$"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_answer(rows)))
        .mount(&server)
        .await;
    point_config_at(&env, &server);

    let sheet = env.data.join("sheet.png");
    std::fs::write(&sheet, [137u8, 80, 78, 71]).unwrap();
    let sheet = sheet.to_string_lossy().to_string();

    let preview = env
        .cmd(&["scan", &sheet, "--dry-run", "--json"])
        .env("GEMINI_API_KEY", "test-key")
        .output()
        .expect("run scan");
    assert!(preview.status.success(), "{}", stderr(&preview));
    let preview: Value = serde_json::from_slice(&preview.stdout).unwrap();
    assert_eq!(preview.as_array().map(Vec::len), Some(1));
    assert!(env.run_json(&["list", "--json"]).as_array().unwrap().is_empty());

    let output = env
        .cmd(&["scan", &sheet, "--json"])
        .env("GEMINI_API_KEY", "test-key")
        .output()
        .expect("run scan");
    assert!(output.status.success(), "{}", stderr(&output));
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["found"], 1);
    assert_eq!(report["invalid"], 1);
    assert_eq!(report["accepted"], 1);

    let list = env.run_json(&["list", "--json"]);
    assert_eq!(list[0]["name"], "Ms.Deepa");
    assert_eq!(list[0]["amountPending"], 2000);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_scan_service_failure_exits_with_external_code() {
    let env = Env::new("scanfail");
    env.run_ok(&["init"]);

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    point_config_at(&env, &server);

    let sheet = env.data.join("sheet.jpg");
    std::fs::write(&sheet, [0xffu8, 0xd8]).unwrap();

    let output = env
        .cmd(&["scan", &sheet.to_string_lossy()])
        .env("GEMINI_API_KEY", "test-key")
        .output()
        .expect("run scan");
    assert_eq!(output.status.code(), Some(6));
    assert!(stderr(&output).contains("Failed to scan. Ensure image is clear."));
}
