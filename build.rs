use std::env;
use std::path::PathBuf;

fn main() {
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    println!("cargo:rerun-if-changed=build.rs");

    if target_os == "macos" {
        create_macos_plist();
    }
}

fn create_macos_plist() {
    let plist_content = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleName</key>
    <string>Pixel Probe</string>
    <key>CFBundleDisplayName</key>
    <string>Pixel Probe</string>
    <key>CFBundleIdentifier</key>
    <string>com.pixel-probe.app</string>
    <key>CFBundleVersion</key>
    <string>0.1.0</string>
    <key>CFBundleShortVersionString</key>
    <string>0.1.0</string>
    <key>NSScreenCaptureUsageDescription</key>
    <string>Pixel Probe reads the pixels under the cursor to magnify them and pick their color.</string>
</dict>
</plist>"#;

    let Ok(out_dir) = env::var("OUT_DIR") else {
        println!("cargo:warning=OUT_DIR not set, skipping Info.plist");
        return;
    };
    let plist_path = PathBuf::from(&out_dir).join("Info.plist");

    if let Err(error) = std::fs::write(&plist_path, plist_content) {
        println!("cargo:warning=Failed to write Info.plist: {}", error);
        return;
    }

    println!("cargo:warning=Created Info.plist for macOS with screen capture usage description");
}
