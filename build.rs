use std::{path::Path, process::Command};

const TAILWIND_SHEET: &str = "assets/tailwind.css";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Embedded stylesheets and favicon are baked in at compile time.
    println!("cargo:rerun-if-changed=assets");

    if !Path::new(TAILWIND_SHEET).exists() {
        println!(
            "cargo:warning={TAILWIND_SHEET} is missing; run the Tailwind build (`dx serve` or \
             `npx @tailwindcss/cli -i tailwind.css -o {TAILWIND_SHEET}`) or the UI renders unstyled"
        );
    }

    if let Some(tag) = latest_tag() {
        println!("cargo:rustc-env=GIT_TAG={tag}");
    }
}

fn latest_tag() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output()
        .ok()
        .filter(|output| output.status.success())?;
    let tag = String::from_utf8(output.stdout).ok()?;
    let tag = tag.trim();
    (!tag.is_empty()).then(|| tag.to_string())
}
