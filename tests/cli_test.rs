use anyhow::Result;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_seeder(dir: &TempDir, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_package-seeder"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

#[test]
fn test_success_prints_generated_path() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("final_customer_data.json"),
        r#"[{"package": "Paket Free", "price": 0, "bandwidth": "Free"}]"#,
    )?;

    let output = run_seeder(&temp_dir, &[])?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "Successfully generated database/seeders/ImportPackagesSeeder.php\n"
    );
    assert!(temp_dir
        .path()
        .join("database/seeders/ImportPackagesSeeder.php")
        .exists());

    Ok(())
}

#[test]
fn test_missing_input_prints_error_and_exits_zero() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = run_seeder(&temp_dir, &[])?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("Error: Failed to read final_customer_data.json"));
    assert_eq!(stdout.lines().count(), 1);
    assert!(!temp_dir.path().join("database").exists());

    Ok(())
}

#[test]
fn test_strict_missing_input_exits_one() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = run_seeder(&temp_dir, &["--strict"])?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("Error: Failed to read final_customer_data.json"));

    Ok(())
}
