use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

const LABEL_ENV_VARS: [&str; 9] = [
    "LABEL_TENANT",
    "LABEL_ENVIRONMENT",
    "LABEL_STAGE",
    "LABEL_WORKSPACE",
    "LABEL_NAMESPACE",
    "LABEL_DELIMITER",
    "LABEL_SEGMENT_POLICY",
    "LABEL_CONFIG",
    "RUST_LOG",
];

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "label-cli-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_label_with_env<I, S>(args: I, env: &[(&str, &str)]) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_label");
    let mut command = Command::new(bin);
    for key in LABEL_ENV_VARS {
        command.env_remove(key);
    }
    command
        .args(args)
        .envs(env.iter().copied())
        .output()
        .expect("label command should execute")
}

fn run_label<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_label_with_env(args, &[])
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "command failed with status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn assert_failure(output: &Output) {
    if output.status.success() {
        panic!(
            "command unexpectedly succeeded\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn parse_json_stdout(output: &Output) -> Value {
    serde_json::from_slice::<Value>(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "expected valid JSON stdout, got error: {e}\nstdout:\n{}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

const BASE_FLAGS: [&str; 10] = [
    "--tenant",
    "dpl",
    "--environment",
    "ane2",
    "--stage",
    "dev",
    "--workspace",
    "data-sales-api",
    "--namespace",
    "acme",
];

fn with_base(args: &[&str]) -> Vec<String> {
    args.iter()
        .chain(BASE_FLAGS.iter())
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn id_from_flags() {
    let output = run_label(with_base(&["id", "--resource-type", "sg", "--qualifier", "emr"]));
    assert_success(&output);
    assert_eq!(stdout_text(&output), "dpl-ane2-sg-dev-emr-sales-api\n");
}

#[test]
fn id_from_environment() {
    let output = run_label_with_env(
        ["id", "-t", "emr", "-k", "shared-pii"],
        &[
            ("LABEL_TENANT", "dpl"),
            ("LABEL_ENVIRONMENT", "ane2"),
            ("LABEL_STAGE", "dev"),
            ("LABEL_WORKSPACE", "sales-api"),
            ("LABEL_SEGMENT_POLICY", "full-split"),
        ],
    );
    assert_success(&output);
    assert_eq!(stdout_text(&output), "dpl-ane2-emr-dev-sales-api-shared-pii\n");
}

#[test]
fn flag_overrides_environment() {
    let output = run_label_with_env(
        [
            "id",
            "-t",
            "sg",
            "-q",
            "emr",
            "--tenant",
            "dpl",
            "--environment",
            "ane2",
            "--stage",
            "prd",
            "--workspace",
            "data-sales-api",
        ],
        &[("LABEL_STAGE", "qa"), ("LABEL_TENANT", "other")],
    );
    assert_success(&output);
    assert_eq!(stdout_text(&output), "dpl-ane2-sg-prd-emr-sales-api\n");
}

#[test]
fn config_file_fills_remaining_values() {
    let temp = TempDirGuard::new("config-file");
    let config_path = temp.path().join("label.toml");
    fs::write(
        &config_path,
        r#"
tenant = "dpl"
environment = "ane2"
stage = "dev"
workspace = "data-sales-api"
delimiter = "_"
"#,
    )
    .expect("config file should be written");

    let output = run_label_with_env(
        [
            "id",
            "--config",
            config_path.to_str().expect("utf-8 path"),
            "-t",
            "db",
            "-q",
            "refined",
        ],
        &[("LABEL_STAGE", "prd"), ("LABEL_TENANT", "")],
    );
    assert_success(&output);
    assert_eq!(stdout_text(&output), "dpl_ane2_db_prd_refined_sales_api\n");
}

#[test]
fn default_delimiter_flag_after_subcommand() {
    let output = run_label(with_base(&[
        "id",
        "-t",
        "db",
        "-q",
        "refined",
        "--default-delimiter",
        "_",
    ]));
    assert_success(&output);
    assert_eq!(stdout_text(&output), "dpl_ane2_db_dev_refined_sales_api\n");
}

#[test]
fn default_delimiter_flag_before_subcommand() {
    let mut args = vec!["--default-delimiter".to_string(), "_".to_string()];
    args.extend(with_base(&["id", "-t", "sg"]));
    let output = run_label(args);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "dpl_ane2_sg_dev_sales_api\n");
}

#[test]
fn delimiter_environment_overrides_config_file() {
    let temp = TempDirGuard::new("delimiter-env");
    let config_path = temp.path().join("label.toml");
    fs::write(
        &config_path,
        r#"
tenant = "dpl"
environment = "ane2"
stage = "dev"
workspace = "data-sales-api"
delimiter = "."
"#,
    )
    .expect("config file should be written");

    let output = run_label_with_env(
        [
            "id",
            "--config",
            config_path.to_str().expect("utf-8 path"),
            "-t",
            "db",
            "-q",
            "refined",
        ],
        &[("LABEL_DELIMITER", "_")],
    );
    assert_success(&output);
    assert_eq!(stdout_text(&output), "dpl_ane2_db_dev_refined_sales_api\n");
}

#[test]
fn per_call_delimiter_wins_over_environment_default() {
    let output = run_label_with_env(
        with_base(&["generate", "-t", "sg", "-q", "emr", "--delimiter=-", "--json"]),
        &[("LABEL_DELIMITER", "_")],
    );
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["id"], "dpl-ane2-sg-dev-emr-sales-api");
    assert_eq!(payload["tags"]["Attributes"], "emr-sales-api");
}

#[test]
fn config_reports_default_delimiter_from_flag() {
    let output = run_label(["config", "--json", "--default-delimiter", "_"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["config"]["delimiter"], "_");
}

#[test]
fn unreadable_config_file_fails() {
    let temp = TempDirGuard::new("missing-config");
    let config_path = temp.path().join("absent.toml");
    let output = run_label(with_base(&[
        "id",
        "-t",
        "sg",
        "--config",
        config_path.to_str().expect("utf-8 path"),
    ]));
    assert_failure(&output);
    assert!(
        stderr_text(&output).contains("failed to read config file"),
        "stderr: {}",
        stderr_text(&output)
    );
}

#[test]
fn incomplete_configuration_lists_every_missing_value() {
    let output = run_label(["id", "-t", "sg", "--environment", "ane2"]);
    assert_failure(&output);
    assert!(stdout_text(&output).is_empty());
    assert!(
        stderr_text(&output)
            .contains("missing required configuration values: tenant, stage, workspace"),
        "stderr: {}",
        stderr_text(&output)
    );
}

#[test]
fn tags_json_output() {
    let output = run_label(with_base(&["tags", "-t", "sg", "-q", "emr"]));
    assert_success(&output);
    let tags = parse_json_stdout(&output);
    assert_eq!(
        tags,
        serde_json::json!({
            "Name": "dpl-ane2-sg-dev-emr-sales-api",
            "Tenant": "dpl",
            "Environment": "ane2",
            "Stage": "dev",
            "Namespace": "acme",
            "Attributes": "emr-sales-api"
        })
    );
}

#[test]
fn tags_without_name() {
    let output = run_label(with_base(&["tags", "-t", "sg", "--without-name"]));
    assert_success(&output);
    let tags = parse_json_stdout(&output);
    assert!(tags.get("Name").is_none());
    assert_eq!(tags["Attributes"], "sales-api");
}

#[test]
fn generate_json_keeps_attributes_dash_joined() {
    let output = run_label(with_base(&[
        "generate", "-t", "db", "-q", "refined", "-d", "_", "--json",
    ]));
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["id"], "dpl_ane2_db_dev_refined_sales_api");
    assert_eq!(payload["tags"]["Name"], payload["id"]);
    assert_eq!(payload["tags"]["Attributes"], "refined-sales-api");
    assert!(payload["tags_without_name"].get("Name").is_none());
    assert_eq!(payload["tags_without_name"]["Namespace"], "acme");
}

#[test]
fn generate_text_output() {
    let output = run_label(with_base(&["generate", "-t", "sg"]));
    assert_success(&output);
    let stdout = stdout_text(&output);
    assert!(stdout.starts_with("id: dpl-ane2-sg-dev-sales-api\n"), "{stdout}");
    assert!(stdout.contains("  Attributes: sales-api\n"), "{stdout}");
}

#[test]
fn single_piece_workspace_has_no_attributes() {
    let output = run_label([
        "tags",
        "-t",
        "sg",
        "--tenant",
        "dpl",
        "--environment",
        "ane2",
        "--stage",
        "dev",
        "--workspace",
        "vpc",
    ]);
    assert_success(&output);
    let tags = parse_json_stdout(&output);
    assert_eq!(tags["Name"], "dpl-ane2-sg-dev");
    assert!(tags.get("Attributes").is_none());
    assert!(tags.get("Namespace").is_none());
}

#[test]
fn invalid_segment_policy_fails() {
    let output = run_label(with_base(&["id", "-t", "sg", "--segment-policy", "middle"]));
    assert_failure(&output);
    assert!(
        stderr_text(&output).contains("unknown segment policy"),
        "stderr: {}",
        stderr_text(&output)
    );
}

#[test]
fn config_reports_missing_without_failing() {
    let output = run_label(["config", "--json", "--tenant", "dpl", "--workspace", "vpc"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["complete"], false);
    assert_eq!(payload["missing"], serde_json::json!(["environment", "stage"]));
    assert_eq!(payload["config"]["delimiter"], "-");
    assert_eq!(payload["config"]["segment_policy"], "drop-first");
    assert_eq!(payload["domain"], serde_json::json!([]));
}
