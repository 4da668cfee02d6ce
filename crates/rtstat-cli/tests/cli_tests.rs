use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use rtstat_testing::{SessionBuilder, TestWorld};

fn rtstat(world: &TestWorld) -> Command {
    let mut cmd = cargo_bin_cmd!("rtstat");
    world.configure_command(&mut cmd);
    cmd
}

fn two_groups() -> TestWorld {
    TestWorld::new()
        .with_session(
            "a1.csv",
            SessionBuilder::new("P001", "A").trials(&[(100.0, 1), (200.0, 0)]),
        )
        .with_session("a2.csv", SessionBuilder::new("P002", "A").trial(300.0, 1))
        .with_session(
            "b1.csv",
            SessionBuilder::new("P003", "B").trials(&[(140.0, 1), (160.0, 1)]),
        )
}

#[test]
fn test_summary_plain() {
    let world = two_groups();

    rtstat(&world)
        .arg("summary")
        .arg(world.data_path("a1.csv"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Session summary:\n"))
        .stdout(predicate::str::contains("participant_id: P001\n"))
        .stdout(predicate::str::contains("mean_rt: 150.00\n"))
        .stdout(predicate::str::contains("sd_rt: 50.00\n"))
        .stdout(predicate::str::contains("error_rate: 50.00\n"));
}

#[test]
fn test_summary_json() {
    let world = two_groups();

    let output = rtstat(&world)
        .args(["--format", "json", "summary"])
        .arg(world.data_path("b1.csv"))
        .output()
        .expect("Failed to run summary");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Parse failed");
    assert_eq!(json["participant_id"], "P003");
    assert_eq!(json["valid_trials"], 2);
    assert_eq!(json["mean_rt"], 150.0);
    assert_eq!(json["errors"], 0);
}

#[test]
fn test_load_session_plain() {
    let world = TestWorld::new().with_session(
        "p001.csv",
        SessionBuilder::new("P001", "A")
            .trial(250.5, 1)
            .raw_trial("bad", "1")
            .trial(300.0, 0),
    );

    rtstat(&world)
        .arg("load-session")
        .arg(world.data_path("p001.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Session data:\n"))
        .stdout(predicate::str::contains("trials: 3\n"))
        .stdout(predicate::str::contains("valid_trials: 2\n"))
        .stdout(predicate::str::contains("rts: [250.5, 300.0]\n"))
        .stdout(predicate::str::contains("correct_flags: [1, 0]\n"));
}

#[test]
fn test_participants_uses_configured_data_dir() {
    let world = two_groups().with_raw_file("broken.csv", "not,a\nsession,file\n");
    let config = format!("data_dir = {:?}\n", world.data_dir().display().to_string());
    let world = world.with_config(&config);

    let output = rtstat(&world)
        .args(["--format", "json", "participants"])
        .output()
        .expect("Failed to run participants");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Parse failed");
    assert_eq!(json, serde_json::json!(["P001", "P002", "P003"]));
}

#[test]
fn test_participants_explicit_dir_plain() {
    let world = TestWorld::new()
        .with_session("x.csv", SessionBuilder::new("P001", "A").trial(250.0, 1))
        .with_raw_file("y.csv", "participant_id,condition\nP009,A\n");

    rtstat(&world)
        .arg("participants")
        .arg(world.data_dir())
        .assert()
        .success()
        .stdout("Participants:\nP001\n");
}

#[test]
fn test_participants_empty_directory() {
    let world = TestWorld::new();

    rtstat(&world)
        .arg("participants")
        .arg(world.data_dir())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("No participants found"));
}

#[test]
fn test_missing_directory_exit_code() {
    let world = TestWorld::new();

    rtstat(&world)
        .arg("participants")
        .arg(world.path("nowhere"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_missing_file_exit_code() {
    let world = TestWorld::new();

    rtstat(&world)
        .arg("summary")
        .arg(world.data_path("ghost.csv"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_schema_error_exit_code() {
    let world = TestWorld::new().with_raw_file(
        "no_correct.csv",
        "participant_id,condition,trial,rt\nP001,A,1,200\n",
    );

    rtstat(&world)
        .arg("summary")
        .arg(world.data_path("no_correct.csv"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("correct"));
}

#[test]
fn test_compare_plain() {
    let world = two_groups();
    let group_a = format!(
        "{},{}",
        world.data_path("a1.csv").display(),
        world.data_path("a2.csv").display()
    );

    rtstat(&world)
        .arg("compare")
        .arg(&group_a)
        .arg(world.data_path("b1.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Group comparison:\n"))
        .stdout(predicate::str::contains("  n_sessions: 2\n"))
        .stdout(predicate::str::contains("diff_mean_rt: -50.00\n"))
        .stdout(predicate::str::contains("diff_error_rate: -33.33\n"));
}

#[test]
fn test_compare_empty_group_is_invalid_input() {
    let world = two_groups();

    rtstat(&world)
        .arg("compare")
        .arg(world.data_path("a1.csv"))
        .arg(" , ")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_compare_writes_report() {
    let world = two_groups();
    let group_a = format!(
        "{},{}",
        world.data_path("a1.csv").display(),
        world.data_path("a2.csv").display()
    );

    rtstat(&world)
        .arg("compare")
        .arg(&group_a)
        .arg(world.data_path("b1.csv"))
        .arg("--report")
        .arg(world.path("reports/cmp"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Report generated at"));

    let text = world.read("reports/cmp.txt").expect("report missing");
    assert!(text.starts_with("Relatório de comparação de grupos\n"));
    assert!(text.contains("  Δ TR médio: -50.00 ms\n"));
    assert!(text.contains("  Δ taxa de erros: -33.33 pontos percentuais\n"));
}

#[test]
fn test_report_writes_session_file() {
    let world = two_groups();

    rtstat(&world)
        .arg("report")
        .arg(world.data_path("a1.csv"))
        .arg(world.path("out/p001.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Report generated at"))
        .stdout(predicate::str::contains("Relatório de sessão").not());

    let text = world.read("out/p001.txt").expect("report missing");
    assert_eq!(
        text,
        "Relatório de sessão\n\
         Participante: P001\n\
         Condição: A\n\
         Trials totais: 2\n\
         Trials válidos: 2\n\
         Tempo de reação médio: 150.00 ms\n\
         Desvio padrão do TR: 50.00 ms\n\
         Erros: 1 (50.00%)\n"
    );
}

#[test]
fn test_report_honours_config() {
    let world = two_groups().with_config("output_extension = \"rpt\"\ninclude_summary = true\n");

    rtstat(&world)
        .arg("report")
        .arg(world.data_path("b1.csv"))
        .arg(world.path("out/p003"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Participante: P003\n"))
        .stdout(predicate::str::contains("p003.rpt"));

    assert!(world.path("out/p003.rpt").exists());
}

#[test]
fn test_config_init_and_show() {
    let world = TestWorld::new();

    rtstat(&world)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration written to"));
    assert!(world.config_path().exists());

    rtstat(&world)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    rtstat(&world)
        .args(["config", "init", "--force"])
        .assert()
        .success();

    rtstat(&world)
        .args(["--format", "json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"output_extension\": \"txt\""));
}

#[test]
fn test_malformed_config_fails() {
    let world = two_groups().with_config("include_summary = \"sometimes\"\n");

    rtstat(&world)
        .arg("summary")
        .arg(world.data_path("a1.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_main_help_lists_commands() {
    let world = TestWorld::new();

    rtstat(&world)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("load-session"))
        .stdout(predicate::str::contains("participants"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("report"));
}
