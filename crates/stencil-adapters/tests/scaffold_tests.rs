//! End-to-end scaffolding through the real adapters.

use std::fs;
use std::path::{Path, PathBuf};

use stencil_adapters::{LocalFilesystem, MemoryFilesystem, load_config, load_registry};
use stencil_core::{
    domain::{
        ComponentConfig, DatabaseConfig, ProjectConfig, ProjectName, Section, SkipReason,
        TemplateRegistry,
    },
    error::StencilError,
    prelude::{Filesystem, ScaffoldError, ScaffoldService},
};

const FLASK: &str = "from flask import Flask\n\napp = Flask('{project_name}')\n";
const REACT: &str = "export default function App() {{ return '{project_name}'; }}\n";
const SCHEMA: &str = "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT);\n";

fn registry() -> TemplateRegistry {
    TemplateRegistry::new()
        .with_template(Section::Backend, "flask", FLASK)
        .with_template(Section::Frontend, "react", REACT)
        .with_template(Section::Database, "sqlite", SCHEMA)
}

fn demo_config() -> ProjectConfig {
    ProjectConfig::new(ProjectName::parse("demo").unwrap())
        .with_backend(ComponentConfig::new("flask").with_dependencies(["flask"]))
        .with_database(DatabaseConfig::new("sqlite"))
}

/// In-memory filesystem with the `/out` base already in place.
fn memory_fs() -> MemoryFilesystem {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("/out")).unwrap();
    fs
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn demo_project_on_disk() {
    let temp = tempfile::tempdir().unwrap();
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    let summary = service
        .scaffold(temp.path(), &demo_config(), &registry())
        .unwrap();

    let root = temp.path().join("demo");
    assert_eq!(summary.root, root);
    assert_eq!(
        read(root.join("backend/app.py")),
        "from flask import Flask\n\napp = Flask('demo')\n"
    );
    assert_eq!(read(root.join("database/schema.sql")), SCHEMA);
    assert!(!root.join("frontend").exists());

    assert_eq!(summary.warnings.len(), 1);
    assert_eq!(summary.warnings[0].section, Section::Frontend);
    assert_eq!(summary.warnings[0].reason, SkipReason::Missing);

    let script = read(root.join("install_dependencies.sh"));
    assert!(script.starts_with("#!/bin/bash\n"));
    assert!(script.contains("pip install flask\n"));
    assert!(!script.contains("frontend"));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(&summary.install_script)
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}

#[test]
fn missing_base_path_is_not_created() {
    let temp = tempfile::tempdir().unwrap();
    let base = temp.path().join("does/not/exist");
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    let err = service
        .scaffold(&base, &demo_config(), &registry())
        .unwrap_err();

    match err {
        StencilError::Scaffold(ScaffoldError::CreateRoot { path, source }) => {
            assert_eq!(path, base.join("demo"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected root error, got {other:?}"),
    }
    assert!(!temp.path().join("does").exists());
}

#[test]
fn inline_schema_overrides_registry() {
    let fs = memory_fs();
    let service = ScaffoldService::new(Box::new(fs.clone()));
    let inline = "CREATE TABLE notes (body TEXT); -- {project_name} stays\n";
    let config = ProjectConfig::new(ProjectName::parse("demo").unwrap())
        .with_database(DatabaseConfig::new("sqlite").with_schema(inline));

    service.scaffold("/out", &config, &registry()).unwrap();

    assert_eq!(
        fs.read_file("/out/demo/database/schema.sql").as_deref(),
        Some(inline)
    );
}

#[test]
fn empty_config_writes_only_the_banner() {
    let temp = tempfile::tempdir().unwrap();
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let config = ProjectConfig::new(ProjectName::parse("bare").unwrap());

    let summary = service.scaffold(temp.path(), &config, &registry()).unwrap();

    assert!(summary.created.is_empty());
    assert_eq!(summary.warnings.len(), 3);
    assert_eq!(
        read(temp.path().join("bare/install_dependencies.sh")),
        "#!/bin/bash\n\necho 'Installing dependencies...'\n\n"
    );
}

#[test]
fn rerun_over_existing_project_succeeds() {
    let temp = tempfile::tempdir().unwrap();
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    service
        .scaffold(temp.path(), &demo_config(), &registry())
        .unwrap();
    let second = service
        .scaffold(temp.path(), &demo_config(), &registry())
        .unwrap();

    assert_eq!(second.created.len(), 2);
}

#[test]
fn rerun_replaces_the_install_script() {
    let temp = tempfile::tempdir().unwrap();
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let script = temp.path().join("demo/install_dependencies.sh");

    service
        .scaffold(temp.path(), &demo_config(), &registry())
        .unwrap();
    assert!(read(&script).contains("pip install flask\n"));

    let updated = ProjectConfig::new(ProjectName::parse("demo").unwrap()).with_backend(
        ComponentConfig::new("flask").with_dependencies(["flask", "sqlalchemy"]),
    );
    service.scaffold(temp.path(), &updated, &registry()).unwrap();

    let content = read(&script);
    assert!(content.contains("pip install flask sqlalchemy\n"));
    assert_eq!(content.matches("pip install").count(), 1);
}

#[test]
fn frontend_install_needs_both_deps_and_directory() {
    let fs = memory_fs();
    let service = ScaffoldService::new(Box::new(fs.clone()));
    let script = PathBuf::from("/out/web/install_dependencies.sh");

    // Created, with dependencies.
    let with_deps = ProjectConfig::new(ProjectName::parse("web").unwrap())
        .with_frontend(ComponentConfig::new("react").with_dependencies(["react", "react-dom"]));
    service.scaffold("/out", &with_deps, &registry()).unwrap();
    assert!(
        fs.read_file(&script)
            .unwrap()
            .contains("cd frontend && npm install react react-dom && cd ..\n")
    );
    assert_eq!(
        fs.read_file("/out/web/frontend/index.js").as_deref(),
        Some("export default function App() { return 'web'; }\n")
    );

    // Created, no dependencies.
    let no_deps = ProjectConfig::new(ProjectName::parse("web").unwrap())
        .with_frontend(ComponentConfig::new("react"));
    service.scaffold("/out", &no_deps, &registry()).unwrap();
    assert!(!fs.read_file(&script).unwrap().contains("frontend"));

    // Dependencies, but the framework is unknown.
    let unknown = ProjectConfig::new(ProjectName::parse("web").unwrap())
        .with_frontend(ComponentConfig::new("svelte").with_dependencies(["svelte"]));
    service.scaffold("/out", &unknown, &registry()).unwrap();
    assert!(!fs.read_file(&script).unwrap().contains("frontend"));
}

#[test]
fn unknown_backend_is_one_warning_and_no_directory() {
    let fs = memory_fs();
    let service = ScaffoldService::new(Box::new(fs.clone()));
    let config = ProjectConfig::new(ProjectName::parse("demo").unwrap())
        .with_backend(ComponentConfig::new("rails").with_dependencies(["rails"]))
        .with_frontend(ComponentConfig::new("react"))
        .with_database(DatabaseConfig::new("sqlite"));

    let summary = service.scaffold("/out", &config, &registry()).unwrap();

    assert!(!fs.exists(Path::new("/out/demo/backend")));
    let backend: Vec<_> = summary
        .warnings
        .iter()
        .filter(|w| w.section == Section::Backend)
        .collect();
    assert_eq!(backend.len(), 1);
    assert_eq!(backend[0].name(), Some("rails"));
    assert_eq!(summary.warnings.len(), 1);

    // Backend dependencies are still installed.
    assert!(
        fs.read_file("/out/demo/install_dependencies.sh")
            .unwrap()
            .contains("pip install rails\n")
    );
}

#[test]
fn failure_keeps_earlier_files() {
    let fs = memory_fs();
    fs.deny("/out/demo/database");
    let service = ScaffoldService::new(Box::new(fs.clone()));

    let err = service
        .scaffold("/out", &demo_config(), &registry())
        .unwrap_err();

    assert!(matches!(
        err,
        StencilError::Scaffold(ScaffoldError::CreateDirectory {
            section: Section::Database,
            ..
        })
    ));
    assert!(fs.read_file("/out/demo/backend/app.py").is_some());
    assert!(fs.read_file("/out/demo/install_dependencies.sh").is_none());
}

#[test]
fn loaded_files_drive_a_scaffold() {
    let temp = tempfile::tempdir().unwrap();
    let config_path = temp.path().join("config.json");
    let registry_path = temp.path().join("templates.json");
    fs::write(
        &config_path,
        r#"{
            "project_name": "MyCoolApp",
            "backend": { "framework": "express", "dependencies": ["express"] },
            "frontend": { "framework": "react", "dependencies": ["react"] },
            "database": { "type": "postgres" }
        }"#,
    )
    .unwrap();
    fs::write(
        &registry_path,
        r#"{
            "backend": { "express": "const name = '{project_name}';\n" },
            "frontend": { "react": "// {project_name}\n" },
            "database": { "postgres": "CREATE TABLE items (id SERIAL);\n" }
        }"#,
    )
    .unwrap();

    let config = load_config(&config_path).unwrap();
    let registry = load_registry(&registry_path).unwrap();
    let out = temp.path().join("out");
    fs::create_dir(&out).unwrap();

    let summary = ScaffoldService::new(Box::new(LocalFilesystem::new()))
        .scaffold(&out, &config, &registry)
        .unwrap();

    let root = out.join("MyCoolApp");
    assert!(summary.warnings.is_empty());
    assert_eq!(
        read(root.join("backend/app.js")),
        "const name = 'MyCoolApp';\n"
    );
    assert_eq!(read(root.join("frontend/index.js")), "// MyCoolApp\n");
    assert_eq!(
        read(root.join("database/schema.sql")),
        "CREATE TABLE items (id SERIAL);\n"
    );
    let script = read(root.join("install_dependencies.sh"));
    assert!(script.contains("npm install express\n"));
    assert!(script.contains("cd frontend && npm install react && cd ..\n"));
}
