use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn cropcal_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cropcal").expect("Failed to find cropcal binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_catalog_lists_builtin_plants() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    cropcal_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "catalog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Plant Catalog"))
        .stdout(predicate::str::contains("1. Pea"))
        .stdout(predicate::str::contains("3. Tomato"));
}

#[test]
fn test_cli_show_plant_summary() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    cropcal_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Pea"))
        .stdout(predicate::str::contains("- Category: Legume"))
        .stdout(predicate::str::contains("- Fruit Development Time: N/A"))
        .stdout(predicate::str::contains("- Total Growth Time: 56 days"));
}

#[test]
fn test_cli_show_unknown_plant_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    cropcal_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No plant found with id 99"));
}

#[test]
fn test_cli_plan_computes_harvest_date() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    cropcal_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "plan",
            "--select",
            "3",
            "--date-type",
            "planting",
            "--date",
            "2024-03-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Your Crop Schedule"))
        .stdout(predicate::str::contains("| Plant | Planting Date | Harvest Date |"))
        .stdout(predicate::str::contains("| Tomato | 2024-03-01 | 2024-06-05 |"));
}

#[test]
fn test_cli_plan_back_computes_planting_date() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    cropcal_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "plan",
            "--select",
            "3",
            "--date-type",
            "harvest",
            "--date",
            "2024-06-05",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Plant | Harvest Date | Planting Date |"))
        .stdout(predicate::str::contains("| Tomato | 2024-06-05 | 2024-03-01 |"));
}

#[test]
fn test_cli_plan_rejects_bad_date() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    cropcal_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "plan",
            "--select",
            "3",
            "--date",
            "03-01-2024",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_cli_plan_rejects_bad_selection() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    cropcal_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "plan",
            "--select",
            "1,abc",
            "--date",
            "2024-03-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid plant index"));
}

#[test]
fn test_cli_plan_stores_results_for_lookup() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    cropcal_cmd()
        .args([
            "--database-file",
            db_arg,
            "plan",
            "--select",
            "1,3",
            "--date",
            "2024-03-01",
            "--email",
            "gardener@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 2 result(s) under gardener@example.com."));

    cropcal_cmd()
        .args(["--database-file", db_arg, "lookup", "gardener@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Email | Plant | Date Type | Date | Corresponding Date |"))
        .stdout(predicate::str::contains("| gardener@example.com | Pea |"))
        .stdout(predicate::str::contains("| gardener@example.com | Tomato |"));

    cropcal_cmd()
        .args(["--database-file", db_arg, "lookup", "someone.else@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved results found."));
}

#[test]
fn test_cli_lookup_json_output() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    cropcal_cmd()
        .args([
            "--database-file",
            db_arg,
            "plan",
            "--select",
            "3",
            "--date",
            "2024-03-01",
            "--email",
            "gardener@example.com",
        ])
        .assert()
        .success();

    cropcal_cmd()
        .args([
            "--database-file",
            db_arg,
            "lookup",
            "gardener@example.com",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"plant_name\": \"Tomato\""))
        .stdout(predicate::str::contains("\"corresponding_date\": \"2024-06-05\""));
}

#[test]
fn test_cli_ledger_file_gets_header_row() {
    let temp_dir = create_cli_test_environment();
    let ledger_path = temp_dir.path().join("ledger.csv");
    let ledger_arg = ledger_path.to_str().unwrap();

    cropcal_cmd()
        .args([
            "--ledger-file",
            ledger_arg,
            "plan",
            "--select",
            "3",
            "--date",
            "2024-03-01",
            "--email",
            "gardener@example.com",
        ])
        .assert()
        .success();

    let contents = std::fs::read_to_string(&ledger_path).expect("ledger file written");
    assert!(contents.starts_with("Email,Plant,Date Type,Date,Corresponding Date"));
    assert!(contents.contains("gardener@example.com,Tomato,Planting Date,2024-03-01,2024-06-05"));

    cropcal_cmd()
        .args(["--ledger-file", ledger_arg, "lookup", "gardener@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| gardener@example.com | Tomato |"));
}

#[test]
fn test_cli_custom_catalog_file() {
    let temp_dir = create_cli_test_environment();
    let catalog_path = temp_dir.path().join("catalog.csv");
    std::fs::write(
        &catalog_path,
        "id,Name,Category,Germination,Seedling Stage,Vegetative Growth,Flowering/Root Development,Fruit Development,Description\n\
         1,Kale,Leafy Green,6,12,40,10,,Hardy green\n",
    )
    .expect("Failed to write catalog");

    cropcal_cmd()
        .args([
            "--catalog-file",
            catalog_path.to_str().unwrap(),
            "--database-file",
            temp_dir.path().join("cli_test.db").to_str().unwrap(),
            "plan",
            "--select",
            "1",
            "--date",
            "2024-04-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Kale | 2024-04-01 | 2024-06-08 |"));
}

#[test]
fn test_cli_interactive_session() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    cropcal_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "interactive"])
        .write_stdin("1\n3\n1\n2024-03-01\nn\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the Crop Calendar Planner!"))
        .stdout(predicate::str::contains("# Plant Catalog"))
        .stdout(predicate::str::contains("| Tomato | 2024-03-01 | 2024-06-05 |"))
        .stdout(predicate::str::contains("Happy gardening!"));
}

#[test]
fn test_cli_interactive_reprompts_on_invalid_input() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    // bad selection, then a good one; bad date, then a good one; don't save
    cropcal_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "interactive"])
        .write_stdin("1\nabc\n-2\n3\n1\n2024-3-1\n2024-03-01\nn\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid number: 'abc'"))
        .stdout(predicate::str::contains("must be positive"))
        .stdout(predicate::str::contains("Invalid date format: '2024-3-1'"))
        .stdout(predicate::str::contains("| Tomato | 2024-03-01 | 2024-06-05 |"));
}

#[test]
fn test_cli_interactive_saves_and_looks_up() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    cropcal_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "interactive"])
        .write_stdin("1\n3\n1\n2024-03-01\ny\ngardener@example.com\n2\ngardener@example.com\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 1 result(s) under gardener@example.com."))
        .stdout(predicate::str::contains("# Saved Results for gardener@example.com"))
        .stdout(predicate::str::contains("| gardener@example.com | Tomato |"));
}
