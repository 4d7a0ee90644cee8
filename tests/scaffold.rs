use std::fs;
use std::path::PathBuf;

use stencil::error::FsError;
use stencil::template::{ProjectTemplate, TemplateKind};
use tempfile::TempDir;

fn template(kind: TemplateKind, root: PathBuf) -> ProjectTemplate {
    ProjectTemplate::new("demo app", "Test Author", root, kind)
}

#[test]
fn pyscript_writes_a_single_script() {
    let temp_dir = TempDir::new().unwrap();
    let summary = template(TemplateKind::PyScript, temp_dir.path().to_path_buf())
        .create_project("python3", false)
        .unwrap();

    let script = temp_dir.path().join("demo_app.py");
    assert!(script.is_file());
    let body = fs::read_to_string(&script).unwrap();
    assert!(body.contains("demo_app.py"));
    assert!(body.contains("Test Author"));
    assert!(summary.contains("pyscript"));
}

#[test]
fn pyproject_materializes_the_full_tree() {
    let temp_dir = TempDir::new().unwrap();
    let summary = template(TemplateKind::PyProject, temp_dir.path().to_path_buf())
        .create_project("python3", false)
        .unwrap();

    let project = temp_dir.path().join("Demo_App");
    assert!(summary.contains("Demo_App"));
    assert!(project.join("demo_app/__init__.py").is_file());
    assert!(project.join("demo_app/model.py").is_file());
    assert!(project.join(".gitignore").is_file());
    assert!(project.join("main.py").is_file());
    assert!(project.join("requirements.txt").is_file());
    assert!(project.join("README.md").is_file());
    // setup.py has neither text nor binary content: created empty
    assert_eq!(fs::read(project.join("setup.py")).unwrap(), b"");
    // provisioning skipped
    assert!(!project.join("env").exists());
}

#[test]
fn flaskapp_materializes_nested_static_tree() {
    let temp_dir = TempDir::new().unwrap();
    template(TemplateKind::FlaskApp, temp_dir.path().to_path_buf())
        .create_project("python3", false)
        .unwrap();

    let project = temp_dir.path().join("Demo_App");
    assert!(project.join("app/routes.py").is_file());
    assert!(project.join("app/__init__.py").is_file());
    assert!(project.join("app/templates/index.html").is_file());
    assert!(project.join("app/static/css/style.css").is_file());
    assert!(project.join("app/static/images").is_dir());
    assert!(project.join("run.py").is_file());
    assert!(project.join("config.py").is_file());
    assert!(project.join("LICENSE").is_file());
    assert!(project.join("scripts").is_dir());

    let license = fs::read_to_string(project.join("LICENSE")).unwrap();
    assert!(license.starts_with("MIT License"));
    assert!(license.contains("Test Author"));
}

#[test]
fn scaffolding_twice_fails_without_clobbering() {
    let temp_dir = TempDir::new().unwrap();
    let t = template(TemplateKind::PyProject, temp_dir.path().to_path_buf());
    t.create_project("python3", false).unwrap();

    let marker = temp_dir.path().join("Demo_App/marker.txt");
    fs::write(&marker, "survives").unwrap();

    match t.create_project("python3", false) {
        Err(FsError::AlreadyExists(_)) => {}
        other => panic!("expected AlreadyExists, got {:?}", other),
    }
    assert_eq!(fs::read_to_string(&marker).unwrap(), "survives");
}

#[test]
fn provisioning_failure_degrades_to_a_warning_in_the_summary() {
    let temp_dir = TempDir::new().unwrap();
    // An interpreter that cannot exist: provisioning must not fail the run.
    let summary = template(TemplateKind::PyProject, temp_dir.path().to_path_buf())
        .create_project("definitely-not-a-real-python", true)
        .unwrap();

    assert!(temp_dir.path().join("Demo_App/main.py").is_file());
    assert!(summary.contains("WARNING"));
    assert!(summary.contains("manually") || summary.contains("-m venv"));
}
