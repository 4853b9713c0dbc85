//! Constants used throughout Plugwire

/// Project configuration file name
pub const CONFIG_FILE: &str = "plugwire.toml";

/// Environment variable overriding the configuration file path
pub const CONFIG_ENV: &str = "PLUGWIRE_CONFIG";

/// Header written at the top of every generated Gradle file
pub const GENERATED_HEADER: &str =
    "// DO NOT EDIT THIS FILE! IT IS GENERATED EACH TIME \"plugwire update\" IS RUN";

/// Gradle build defaults
pub const DEFAULT_ANDROID_DIR: &str = "android";
pub const DEFAULT_MIN_SDK_VERSION: u32 = 22;
pub const DEFAULT_JAVA_VERSION: &str = "VERSION_1_8";
pub const DEFAULT_PLUGINS_FOLDER: &str = "capacitor-cordova-android-plugins";
pub const DEFAULT_PLUGINS_MANIFEST: &str = "plugwire.plugins.json";

/// Runtime packages
pub const DEFAULT_RUNTIME_PACKAGE: &str = "@capacitor/android";
pub const DEFAULT_CORE_PACKAGE: &str = "@capacitor/core";
pub const RUNTIME_SUBDIR: &str = "capacitor";
pub const RUNTIME_PROJECT_NAME: &str = "capacitor-android";

/// Bridge plugin engine compatibility
pub const BRIDGE_ENGINE_NAME: &str = "cordova-android";
pub const DEFAULT_BRIDGE_COMPAT_VERSION: &str = "10.1.1";

/// Upper bound on install-and-reload passes
pub const DEFAULT_MAX_INSTALL_PASSES: usize = 10;

/// Gradle file names
pub const SETTINGS_FILE: &str = "capacitor.settings.gradle";
pub const APP_BUILD_FILE: &str = "capacitor.build.gradle";
pub const WORKSPACE_BUILD_FILE: &str = "build.gradle";
pub const WORKSPACE_VARIABLES_FILE: &str = "cordova.variables.gradle";
pub const OVERRIDE_VARIABLES_FILE: &str = "variables.gradle";

/// Bridge plugins known not to work on Android
pub const INCOMPATIBLE_ANDROID_PLUGINS: &[&str] = &[
    "cordova-plugin-splashscreen",
    "cordova-plugin-ionic-webview",
    "cordova-plugin-crosswalk-webview",
    "cordova-plugin-wkwebview-engine",
    "cordova-plugin-console",
    "cordova-plugin-music-controls",
    "cordova-plugin-add-swift-support",
    "cordova-plugin-ionic-keyboard",
    "cordova-plugin-braintree",
    "@ionic-enterprise/filesystem",
    "@ionic-enterprise/keyboard",
    "@ionic-enterprise/splashscreen",
    "cordova-support-google-services",
];
