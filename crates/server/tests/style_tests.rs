//! Style manifest loading and rendering tests.

use oauth_callback_server::error::ManifestError;
use oauth_callback_server::style::{OutputFormat, StyleManifest, StylePlugin, write_rendered};
use std::fs;
use std::process::Command;

fn style_config() -> Command {
    Command::new(env!("CARGO_BIN_EXE_style-config"))
}

#[test]
fn test_load_yaml_manifest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let manifest_path = dir.path().join("style.yaml");
    fs::write(
        &manifest_path,
        r#"
content:
  - "./src/**/*.{html,js,svelte,ts}"
  - "./static/**/*.html"
theme:
  extend:
    fontFamily:
      georgia: ["Georgia", "serif"]
plugins:
  - "@tailwindcss/typography"
  - forms
"#,
    )
    .expect("write manifest");

    let manifest = StyleManifest::load(&manifest_path).expect("manifest loads");
    assert_eq!(manifest.content.len(), 2);
    assert_eq!(
        manifest.plugins,
        vec![StylePlugin::Typography, StylePlugin::Forms]
    );
    assert_eq!(
        manifest.font_stack("georgia"),
        Some(&["Georgia".to_string(), "serif".to_string()][..])
    );
}

#[test]
fn test_load_json_manifest_round_trips_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let manifest_path = dir.path().join("style.json");
    let default = StyleManifest::default();
    fs::write(
        &manifest_path,
        serde_json::to_string_pretty(&default).expect("serialize"),
    )
    .expect("write manifest");

    let loaded = StyleManifest::load(&manifest_path).expect("manifest loads");
    assert_eq!(loaded, default);
}

#[test]
fn test_load_rejects_duplicate_plugins() {
    let dir = tempfile::tempdir().expect("tempdir");
    let manifest_path = dir.path().join("style.yaml");
    fs::write(
        &manifest_path,
        "content: [\"./src/**/*.svelte\"]\nplugins: [forms, forms]\n",
    )
    .expect("write manifest");

    let err = StyleManifest::load(&manifest_path).unwrap_err();
    assert_eq!(err, ManifestError::DuplicatePlugin("@tailwindcss/forms"));
}

#[test]
fn test_load_reports_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = StyleManifest::load(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ManifestError::Load(_)));
}

#[test]
fn test_loaded_manifest_renders_imports_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let manifest_path = dir.path().join("style.yaml");
    fs::write(
        &manifest_path,
        "content: [\"./src/**/*.ts\"]\nplugins: [containerQueries, typography]\n",
    )
    .expect("write manifest");

    let js = StyleManifest::load(&manifest_path)
        .expect("manifest loads")
        .render_config_js();
    let cq = js
        .find("import containerQueries from '@tailwindcss/container-queries';")
        .expect("container queries import");
    let typo = js
        .find("import typography from '@tailwindcss/typography';")
        .expect("typography import");
    assert!(cq < typo);
    assert!(js.contains("  plugins: [containerQueries, typography],"));
    assert!(js.contains("  content: ['./src/**/*.ts'],"));
}

#[test]
fn test_example_manifest_matches_builtin() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("style.example.yaml");
    let loaded = StyleManifest::load(path).expect("example manifest loads");
    assert_eq!(loaded, StyleManifest::default());
    // Same tokens in the same order, so the rendered module is identical too
    assert_eq!(
        loaded.render_config_js(),
        StyleManifest::default().render_config_js()
    );
}

// =============================================================================
// Rendering / Output Tests
// =============================================================================

#[test]
fn test_write_rendered_to_stdout_buffer() {
    let rendered = StyleManifest::default()
        .render(OutputFormat::Js)
        .expect("render");
    let mut out = Vec::new();
    write_rendered(&rendered, None, &mut out).expect("write");
    assert_eq!(String::from_utf8(out).expect("utf8"), rendered);
}

#[test]
fn test_write_rendered_to_file_leaves_stdout_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("tailwind.config.json");
    let rendered = StyleManifest::default()
        .render(OutputFormat::Json)
        .expect("render");

    let mut out = Vec::new();
    write_rendered(&rendered, Some(&target), &mut out).expect("write");

    assert!(out.is_empty());
    assert_eq!(fs::read_to_string(&target).expect("read"), rendered);
}

// =============================================================================
// style-config Binary Tests
// =============================================================================

#[test]
fn test_binary_defaults_to_js_on_stdout() {
    let output = style_config().output().expect("run style-config");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf8"),
        StyleManifest::default().render_config_js()
    );
}

#[test]
fn test_binary_json_matches_to_json() {
    let output = style_config()
        .args(["--format", "json"])
        .output()
        .expect("run style-config");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.ends_with("}\n"));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("json");
    assert_eq!(parsed, StyleManifest::default().to_json().expect("to_json"));
}

#[test]
fn test_binary_writes_output_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("tailwind.config.js");

    let output = style_config()
        .arg("--output")
        .arg(&target)
        .output()
        .expect("run style-config");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(&target).expect("read"),
        StyleManifest::default().render_config_js()
    );
}

#[test]
fn test_binary_renders_given_manifest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let manifest_path = dir.path().join("style.yaml");
    fs::write(&manifest_path, "content: [\"./src/**/*.ts\"]\nplugins: [forms]\n")
        .expect("write manifest");

    let output = style_config()
        .arg("--manifest")
        .arg(&manifest_path)
        .output()
        .expect("run style-config");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.starts_with("import forms from '@tailwindcss/forms';\n"));
    assert!(stdout.contains("  content: ['./src/**/*.ts'],"));
}

#[test]
fn test_binary_fails_on_invalid_manifest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let manifest_path = dir.path().join("style.yaml");
    fs::write(&manifest_path, "content: []\n").expect("write manifest");

    let output = style_config()
        .arg("--manifest")
        .arg(&manifest_path)
        .output()
        .expect("run style-config");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_binary_fails_on_missing_manifest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = style_config()
        .arg("--manifest")
        .arg(dir.path().join("absent.yaml"))
        .output()
        .expect("run style-config");
    assert!(!output.status.success());
}
