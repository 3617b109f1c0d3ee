//! Integration tests for CLI commands routed through RunContext

use filerev::cli::{Commands, NamingArgs, RunContext};
use filerev::config::FilerevConfig;
use filerev::ApiError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::integration::{md5_suffix, summary_form, write_file};

fn asset_tree(root: &Path) {
    write_file(root, "dist/js/app.js", "app");
    write_file(root, "dist/js/app.js.map", "{}");
    write_file(root, "dist/css/site.css", "site");
    write_file(root, "dist/index.html", "<html></html>");
}

fn run_command(targets: &[&str], format: &str) -> Commands {
    Commands::Run {
        targets: targets.iter().map(|t| t.to_string()).collect(),
        summary: None,
        jobs: None,
        merge: false,
        format: format.to_string(),
    }
}

#[test]
fn test_run_in_place_target_writes_summary() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    asset_tree(root);
    fs::write(
        root.join("filerev.toml"),
        r#"
[options]
drop_cwd = true

[build]
max_concurrent_groups = 1
summary_file = "dist/filerev.json"

[targets.assets]
cwd = "dist"
src = ["**/*.js", "**/*.css"]
"#,
    )
    .unwrap();

    let context = RunContext::new(root.to_path_buf(), None).unwrap();
    let output = context.execute(&run_command(&[], "json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["revised"], 2);
    assert_eq!(value["companions"], 1);

    let app = format!("app.{}.js", md5_suffix("app"));
    let key = summary_form(&["js", "app.js"]);
    assert_eq!(value["summary"][&key], summary_form(&["js", &app]));

    assert!(root.join("dist/js").join(&app).is_file());
    assert!(root.join("dist/index.html").is_file(), "unmatched files stay put");

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join("dist/filerev.json")).unwrap())
            .unwrap();
    assert_eq!(written.as_object().unwrap().len(), 3);
}

#[test]
fn test_run_expanded_target_mirrors_directories() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    asset_tree(root);
    fs::write(
        root.join("filerev.toml"),
        r#"
[targets.scripts]
cwd = "dist"
src = ["**/*.js"]
dest = "build"
expand = true
"#,
    )
    .unwrap();

    let context = RunContext::new(root.to_path_buf(), None).unwrap();
    context.execute(&run_command(&["scripts"], "text")).unwrap();

    let hash = md5_suffix("app");
    assert!(root.join(format!("build/js/app.{}.js", hash)).is_file());
    assert!(root.join(format!("build/js/app.{}.js.map", hash)).is_file());
    assert!(root.join("dist/js/app.js").is_file());
    assert_eq!(context.summary().len(), 2);
}

#[test]
fn test_run_unknown_target() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    asset_tree(root);
    fs::write(
        root.join("filerev.toml"),
        "[targets.assets]\ncwd = \"dist\"\nsrc = [\"**/*.js\"]\n",
    )
    .unwrap();

    let context = RunContext::new(root.to_path_buf(), None).unwrap();
    let err = context.execute(&run_command(&["nope"], "text")).unwrap_err();
    assert!(matches!(err, ApiError::TargetNotFound(ref name) if name == "nope"));
}

#[test]
fn test_run_destination_conflict_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    asset_tree(root);
    write_file(root, "build", "a file where a directory should be");
    fs::write(
        root.join("filerev.toml"),
        "[targets.assets]\ncwd = \"dist\"\nsrc = [\"**/*.css\"]\ndest = \"build\"\n",
    )
    .unwrap();

    let context = RunContext::new(root.to_path_buf(), None).unwrap();
    let err = context.execute(&run_command(&[], "text")).unwrap_err();
    assert!(matches!(
        err,
        ApiError::Revision(ref e) if e.is_destination_conflict()
    ));
    assert!(root.join("dist/css/site.css").is_file());
}

#[test]
fn test_run_merge_seeds_summary_from_previous_file() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "dist/site.css", "site");
    write_file(
        root,
        "dist/filerev.json",
        r#"{ "vendor.js": "vendor.0badc0de.js", "site.css": "stale.css" }"#,
    );
    fs::write(
        root.join("filerev.toml"),
        r#"
[options]
drop_cwd = true

[build]
summary_file = "dist/filerev.json"

[targets.styles]
cwd = "dist"
src = ["*.css"]
"#,
    )
    .unwrap();

    let context = RunContext::new(root.to_path_buf(), None).unwrap();
    context
        .execute(&Commands::Run {
            targets: vec![],
            summary: None,
            jobs: None,
            merge: true,
            format: "json".to_string(),
        })
        .unwrap();

    let summary = context.summary();
    assert_eq!(summary.len(), 2);
    assert_eq!(summary.get("vendor.js"), Some("vendor.0badc0de.js".to_string()));
    assert_eq!(
        summary.get("site.css"),
        Some(format!("site.{}.css", md5_suffix("site")))
    );

    let written = filerev::Summary::load_json(&root.join("dist/filerev.json")).unwrap();
    assert_eq!(written.snapshot(), summary.snapshot());
}

#[test]
fn test_run_merge_without_summary_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    asset_tree(root);
    fs::write(
        root.join("filerev.toml"),
        "[targets.assets]\ncwd = \"dist\"\nsrc = [\"**/*.js\"]\n",
    )
    .unwrap();

    let context = RunContext::new(root.to_path_buf(), None).unwrap();
    let err = context
        .execute(&Commands::Run {
            targets: vec![],
            summary: None,
            jobs: None,
            merge: true,
            format: "text".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::ConfigError(_)));
    assert!(root.join("dist/js/app.js").is_file());
}

#[test]
fn test_rev_copies_into_destination() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let source = write_file(root, "lib.js", "lib");

    let context =
        RunContext::with_config(root.to_path_buf(), FilerevConfig::default()).unwrap();
    let output = context
        .execute(&Commands::Rev {
            files: vec![source.clone()],
            dest: Some(root.join("out")),
            naming: NamingArgs {
                algorithm: Some("sha1".to_string()),
                length: Some(6),
                trailing_dot: false,
            },
            drop_cwd: true,
            cwd: Some(root.to_path_buf()),
            summary: Some(root.join("summary.json")),
            format: "text".to_string(),
        })
        .unwrap();

    let revised = format!(
        "lib.{}.js",
        crate::integration::suffix_of(filerev::Algorithm::Sha1, "lib", 6)
    );
    assert!(output.contains(&revised));
    assert!(source.is_file());
    assert!(root.join("out").join(&revised).is_file());
    assert_eq!(
        context.summary().get("lib.js"),
        Some(summary_form(&["out", &revised]))
    );
    assert!(root.join("summary.json").is_file());
}

#[test]
fn test_hash_touches_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let source = write_file(root, "a.css", "a");

    let context =
        RunContext::with_config(root.to_path_buf(), FilerevConfig::default()).unwrap();
    let output = context
        .execute(&Commands::Hash {
            files: vec![source.clone()],
            naming: NamingArgs::default(),
        })
        .unwrap();

    assert!(output.ends_with(&format!("a.{}.css", md5_suffix("a"))));
    assert!(source.is_file());
    assert!(context.summary().is_empty());
}

#[test]
fn test_init_then_load() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let context =
        RunContext::with_config(root.to_path_buf(), FilerevConfig::default()).unwrap();
    let output = context.execute(&Commands::Init { force: false }).unwrap();
    assert!(output.starts_with("Wrote "));

    let reloaded = RunContext::new(root.to_path_buf(), None).unwrap();
    assert!(reloaded.config().targets.contains_key("assets"));

    assert!(context.execute(&Commands::Init { force: false }).is_err());
}
