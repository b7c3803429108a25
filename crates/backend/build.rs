use std::env;
use std::fs;
use std::path::Path;

/// Файлы из корня рабочего пространства, которые кладутся рядом с бинарником
const RUNTIME_FILES: &[&str] = &["config.toml", "status_catalog.json"];

fn main() {
    for name in RUNTIME_FILES {
        println!("cargo:rerun-if-changed=../../{}", name);
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();

    // OUT_DIR: target/<profile>/build/backend-xxx/out
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    for name in RUNTIME_FILES {
        let source = workspace_root.join(name);
        if !source.exists() {
            continue;
        }
        let dest = target_dir.join(name);
        fs::copy(&source, &dest)
            .unwrap_or_else(|e| panic!("Failed to copy {}: {}", name, e));
        println!("cargo:warning=Copied {} to {:?}", name, dest);
    }
}
