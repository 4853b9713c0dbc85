//! End-to-end tests for `plugwire update` against throwaway project trees

use plugwire::commands::update_platform;
use plugwire::config::ProjectConfig;
use plugwire::plugin::Platform;
use plugwire::toolchain::NodeToolchain;
use plugwire::PlugwireError;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::{tempdir, TempDir};

const SETTINGS: &str = "android/capacitor.settings.gradle";
const APP_BUILD: &str = "android/app/capacitor.build.gradle";
const WORKSPACE_BUILD: &str = "android/capacitor-cordova-android-plugins/build.gradle";
const WORKSPACE_VARIABLES: &str = "android/capacitor-cordova-android-plugins/cordova.variables.gradle";

/// App root with the Android runtime installed and a two-plugin set
fn sample_project(framework: &str) -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::create_dir_all(root.join("node_modules/@capacitor/android/capacitor")).unwrap();
    fs::create_dir_all(root.join("node_modules/@acme/foo/android")).unwrap();
    fs::create_dir_all(root.join("android/app")).unwrap();

    let bridge = root.join("node_modules/cordova-plugin-bar");
    fs::create_dir_all(bridge.join("src/android")).unwrap();
    fs::write(bridge.join("src/android/Bar.java"), "package com.bar;\nclass Bar {}\n").unwrap();

    let plugins = serde_json::json!([
        {
            "id": "@acme/foo",
            "version": "1.2.0",
            "rootPath": "node_modules/@acme/foo",
            "native": { "android": { "src": "android" } }
        },
        {
            "id": "cordova-plugin-bar",
            "version": "3.0.1",
            "rootPath": "node_modules/cordova-plugin-bar",
            "hasLegacyManifest": true,
            "engines": [{ "name": "cordova-android", "version": ">=9.0.0" }],
            "platforms": {
                "android": {
                    "framework": [{ "src": framework }],
                    "preference": [{ "name": "API_KEY", "default": "demo" }],
                    "source-file": [
                        { "src": "src/android/Bar.java", "target-dir": "src/com/bar" }
                    ]
                }
            }
        }
    ]);
    fs::write(
        root.join("plugwire.plugins.json"),
        serde_json::to_string_pretty(&plugins).unwrap(),
    )
    .unwrap();

    dir
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative))
        .unwrap_or_else(|e| panic!("failed to read {relative}: {e}"))
}

fn run_update(root: &Path) -> plugwire::Result<plugwire::commands::UpdateReport> {
    let config = ProjectConfig::load(root)?;
    update_platform(&config, Platform::Android, &NodeToolchain::new())
}

#[test]
fn test_native_and_bridge_plugins_are_wired() {
    let project = sample_project("com.example:lib:1.0");
    let root = project.path();

    let report = run_update(root).unwrap();
    assert_eq!(report.native_core, 1);
    assert_eq!(report.bridge_compatible, 1);
    assert_eq!(report.copied_files, 1);

    let settings = read(root, SETTINGS);
    assert!(settings.contains("include ':capacitor-android'"));
    assert!(settings.contains("new File('../node_modules/@capacitor/android/capacitor')"));
    assert!(settings.contains("include ':acme-foo'"));
    assert!(settings.contains("project(':acme-foo').projectDir = new File('../node_modules/@acme/foo/android')"));

    let app_build = read(root, APP_BUILD);
    assert!(app_build.contains("implementation project(':acme-foo')"));
    assert!(app_build.contains("implementation \"com.example:lib:1.0\""));
    assert!(app_build.contains("JavaVersion.VERSION_1_8"));

    let workspace_build = read(root, WORKSPACE_BUILD);
    assert!(workspace_build.contains("implementation \"com.example:lib:1.0\""));
    assert!(workspace_build.contains("// SUB-PROJECT DEPENDENCIES START"));
    assert!(workspace_build.contains("// PLUGIN GRADLE EXTENSIONS END"));

    assert!(read(root, WORKSPACE_VARIABLES).contains("rootProject.ext.minSdkVersion : 22"));
    assert!(root
        .join("android/capacitor-cordova-android-plugins/src/main/java/com/bar/Bar.java")
        .is_file());

    for file in [SETTINGS, APP_BUILD, WORKSPACE_BUILD] {
        assert!(!read(root, file).contains("${API_KEY}"), "{file} has a placeholder");
    }
}

#[test]
fn test_preference_defaults_substituted() {
    let project = sample_project("com.example:lib:${API_KEY}");
    let root = project.path();

    run_update(root).unwrap();
    assert!(read(root, APP_BUILD).contains("implementation \"com.example:lib:demo\""));
    assert!(read(root, WORKSPACE_BUILD).contains("implementation \"com.example:lib:demo\""));
}

#[test]
fn test_override_file_keeps_placeholder() {
    let project = sample_project("com.example:lib:${API_KEY}");
    let root = project.path();
    fs::write(root.join("android/variables.gradle"), "ext {\n  API_KEY = 'live'\n}\n").unwrap();

    run_update(root).unwrap();
    assert!(read(root, APP_BUILD).contains("implementation \"com.example:lib:${API_KEY}\""));
}

#[test]
fn test_update_is_idempotent() {
    let project = sample_project("com.example:lib:1.0");
    let root = project.path();

    run_update(root).unwrap();
    let first: Vec<String> = [SETTINGS, APP_BUILD, WORKSPACE_BUILD, WORKSPACE_VARIABLES]
        .iter()
        .map(|file| read(root, file))
        .collect();

    run_update(root).unwrap();
    let second: Vec<String> = [SETTINGS, APP_BUILD, WORKSPACE_BUILD, WORKSPACE_VARIABLES]
        .iter()
        .map(|file| read(root, file))
        .collect();

    assert_eq!(first, second);
    assert_eq!(read(root, WORKSPACE_BUILD).matches("com.example:lib:1.0").count(), 1);
}

#[test]
fn test_stale_workspace_files_are_removed() {
    let project = sample_project("com.example:lib:1.0");
    let root = project.path();
    let stale = root.join("android/capacitor-cordova-android-plugins/src/main/java/Old.java");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "class Old {}").unwrap();

    run_update(root).unwrap();
    assert!(!stale.exists());
}

#[test]
fn test_missing_runtime_aborts() {
    let project = sample_project("com.example:lib:1.0");
    let root = project.path();
    fs::remove_dir_all(root.join("node_modules/@capacitor")).unwrap();

    let err = run_update(root).unwrap_err();
    assert!(matches!(err, PlugwireError::RuntimeNotFound { .. }));
    assert!(!root.join(SETTINGS).exists());
    assert!(!root.join(APP_BUILD).exists());
}

#[test]
fn test_missing_plugin_file_names_plugin() {
    let project = sample_project("com.example:lib:1.0");
    let root = project.path();
    fs::remove_file(root.join("node_modules/cordova-plugin-bar/src/android/Bar.java")).unwrap();

    match run_update(root).unwrap_err() {
        PlugwireError::PluginFile { plugin, path, .. } => {
            assert_eq!(plugin, "cordova-plugin-bar");
            assert!(path.ends_with("Bar.java"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_config_file_overrides_defaults() {
    let project = sample_project("com.example:lib:1.0");
    let root = project.path();
    fs::write(
        root.join("plugwire.toml"),
        "[android]\nmin_sdk_version = 26\njava_version = \"VERSION_17\"\n",
    )
    .unwrap();

    run_update(root).unwrap();
    assert!(read(root, APP_BUILD).contains("JavaVersion.VERSION_17"));
    assert!(read(root, WORKSPACE_VARIABLES).contains("rootProject.ext.minSdkVersion : 26"));
}

#[test]
fn test_binary_update_and_failure_exit_code() {
    let binary = env!("CARGO_BIN_EXE_plugwire");

    let project = sample_project("com.example:lib:1.0");
    let output = Command::new(binary)
        .args(["update", "-p"])
        .arg(project.path())
        .output()
        .expect("failed to run plugwire");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Found 1 Capacitor plugin for android"));
    assert!(project.path().join(SETTINGS).is_file());

    fs::remove_dir_all(project.path().join("node_modules/@capacitor")).unwrap();
    let output = Command::new(binary)
        .arg("update")
        .arg(project.path())
        .output()
        .expect("failed to run plugwire");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Are you sure @capacitor/android is installed?"));
}
