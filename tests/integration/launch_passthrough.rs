use std::env;

use anyhow::Result;

use crate::common::{run, stderr_of, ScratchRoot};

#[test]
fn no_arguments_invoke_default_python_with_conf_default() -> Result<()> {
    let root = ScratchRoot::new()?;
    let fake_bin = root.fake_python_dir()?;
    let path = env::join_paths(
        std::iter::once(fake_bin).chain(env::split_paths(&env::var_os("PATH").unwrap_or_default())),
    )?;

    let output = run(root.launcher().env("PATH", path))?;
    assert!(
        output.status.success(),
        "launcher should succeed: {}",
        stderr_of(&output)
    );

    let recorded = root.recorded()?;
    assert_eq!(
        recorded,
        vec![
            "fake-python".to_string(),
            root.script().display().to_string(),
            "etc/conf".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn python_exe_and_arguments_are_forwarded_verbatim() -> Result<()> {
    let root = ScratchRoot::new()?;

    let output = run(root
        .launcher()
        .env("PYTHON_EXE", "sh")
        .args(["--profile", "prod"]))?;
    assert!(
        output.status.success(),
        "launcher should succeed: {}",
        stderr_of(&output)
    );

    assert_eq!(
        root.recorded()?,
        vec![
            "sh".to_string(),
            root.script().display().to_string(),
            "--profile".to_string(),
            "prod".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn help_like_and_separator_arguments_reach_the_script() -> Result<()> {
    let root = ScratchRoot::new()?;

    let output = run(root
        .launcher()
        .env("PYTHON_EXE", "sh")
        .args(["--help", "--", "-V", "with space"]))?;
    assert!(
        output.status.success(),
        "launcher should succeed: {}",
        stderr_of(&output)
    );

    let recorded = root.recorded()?;
    assert_eq!(&recorded[2..], ["--help", "--", "-V", "with space"]);
    Ok(())
}

#[test]
fn script_exit_code_is_propagated() -> Result<()> {
    let root = ScratchRoot::new()?;

    for code in [0, 2, 42] {
        let output = run(root
            .launcher()
            .env("PYTHON_EXE", "sh")
            .env("CONFIGURE_TEST_EXIT", code.to_string()))?;
        assert_eq!(
            output.status.code(),
            Some(code),
            "launcher should exit with the script's code: {}",
            stderr_of(&output)
        );
    }
    Ok(())
}

#[test]
fn script_stdout_passes_through_and_launcher_stays_quiet() -> Result<()> {
    let root = ScratchRoot::new()?;

    let output = run(root
        .launcher()
        .env("PYTHON_EXE", "sh")
        .env("CONFIGURE_TEST_EXIT", "3"))?;
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "configured\n");
    assert!(
        output.stderr.is_empty(),
        "launcher must not add output for a failing script: {}",
        stderr_of(&output)
    );
    Ok(())
}

#[test]
fn killed_script_maps_to_shell_signal_status() -> Result<()> {
    let root = ScratchRoot::new()?;

    let output = run(root
        .launcher()
        .env("PYTHON_EXE", "sh")
        .env("CONFIGURE_TEST_SIGNAL", "TERM"))?;
    assert_eq!(output.status.code(), Some(128 + 15));
    Ok(())
}

#[test]
fn missing_interpreter_exits_with_command_not_found() -> Result<()> {
    let root = ScratchRoot::new()?;

    let output = run(root
        .launcher()
        .env("PYTHON_EXE", "definitely-not-an-interpreter-7f3a"))?;
    assert_eq!(output.status.code(), Some(127));
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("definitely-not-an-interpreter-7f3a"),
        "stderr should name the interpreter: {stderr}"
    );
    assert!(!root.record_path().exists(), "script must not have run");
    Ok(())
}

#[test]
fn missing_script_is_reported_by_the_interpreter() -> Result<()> {
    let root = ScratchRoot::new()?;
    std::fs::remove_file(root.script())?;

    let output = run(root.launcher().env("PYTHON_EXE", "sh"))?;
    assert!(
        !output.status.success(),
        "a missing script should fail with the interpreter's status"
    );
    Ok(())
}

#[test]
fn non_utf8_argument_reaches_the_script_unchanged() -> Result<()> {
    use std::{ffi::OsString, os::unix::ffi::OsStringExt};

    let root = ScratchRoot::new()?;
    let raw = OsString::from_vec(vec![0x66, 0xff, 0x6f]);

    let output = run(root.launcher().env("PYTHON_EXE", "sh").arg(&raw))?;
    assert!(
        output.status.success(),
        "launcher should succeed: {}",
        stderr_of(&output)
    );

    let recorded = root.recorded_bytes()?;
    assert_eq!(recorded.len(), 3, "marker, script, one argument: {recorded:?}");
    assert_eq!(recorded[2], vec![0x66, 0xff, 0x6f]);
    Ok(())
}

#[test]
fn explicit_empty_argument_is_forwarded_instead_of_defaults() -> Result<()> {
    let root = ScratchRoot::new()?;

    let output = run(root.launcher().env("PYTHON_EXE", "sh").arg(""))?;
    assert!(
        output.status.success(),
        "launcher should succeed: {}",
        stderr_of(&output)
    );

    assert_eq!(
        root.recorded()?,
        vec![
            "sh".to_string(),
            root.script().display().to_string(),
            String::new(),
        ]
    );
    Ok(())
}

#[test]
fn launcher_failure_is_reported_once_without_color() -> Result<()> {
    let root = ScratchRoot::new()?;

    let output = run(root
        .launcher()
        .env("PYTHON_EXE", "definitely-not-an-interpreter-7f3a"))?;
    assert_eq!(output.status.code(), Some(127));

    let stderr = stderr_of(&output);
    let lines: Vec<&str> = stderr.lines().filter(|line| !line.is_empty()).collect();
    assert_eq!(lines.len(), 1, "expected a single diagnostic line: {stderr}");
    assert!(lines[0].starts_with("configure: "), "stderr: {stderr}");
    assert!(!stderr.contains('\u{1b}'), "stderr must not carry ANSI codes: {stderr:?}");
    Ok(())
}
