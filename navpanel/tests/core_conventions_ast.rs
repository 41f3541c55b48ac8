use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

#[test]
fn given_core_crate_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let core_dir = manifest_dir.join("../navpanel-core/src");
    let lib_rs = core_dir.join("lib.rs");

    let mut violations: Vec<String> = Vec::new();

    let lib_source = fs::read_to_string(&lib_rs).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", lib_rs.display())
    });
    let lib_file = syn::parse_file(&lib_source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", lib_rs.display())
    });

    let mut declared_modules = BTreeSet::new();
    for item in &lib_file.items {
        if let Item::Mod(item_mod) = item {
            if is_private(&item_mod.vis) && item_mod.content.is_none() {
                declared_modules.insert(item_mod.ident.to_string());
            } else {
                violations.push(format!(
                    "{}: module declaration '{}' must be a private mod <name>;",
                    lib_rs.display(),
                    item_mod.ident
                ));
            }
        }

        if let Item::Use(item_use) = item {
            if use_tree_has_glob(&item_use.tree) {
                violations.push(format!(
                    "{}: wildcard re-export is forbidden",
                    lib_rs.display()
                ));
            }
        }
    }

    let mut fs_modules = BTreeSet::new();
    let entries = fs::read_dir(&core_dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", core_dir.display())
    });
    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let path = entry.path();
        let file_type = entry.file_type().unwrap_or_else(|err| {
            panic!("failed to read file type for {}: {err}", path.display())
        });

        if file_type.is_dir() {
            violations.push(format!(
                "{}: nested module directories are forbidden in the core crate",
                path.display()
            ));
            continue;
        }

        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }

        let stem = path
            .file_stem()
            .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
            .to_string_lossy()
            .to_string();
        if stem != "lib" {
            fs_modules.insert(stem);
        }
    }

    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match file modules {:?}",
            lib_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    for module in &declared_modules {
        let file_path = core_dir.join(format!("{module}.rs"));
        validate_core_file(&file_path, module, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "core convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_core_file(
    file_path: &Path,
    module: &str,
    violations: &mut Vec<String>,
) {
    let source = fs::read_to_string(file_path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", file_path.display())
    });
    let file = syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", file_path.display())
    });

    for forbidden in ["iced::", "use iced", "std::fs::", "std::thread"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: host-only dependency detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    if module != "clock" {
        for forbidden in ["Instant::now", ".elapsed("] {
            if source.contains(forbidden) {
                violations.push(format!(
                    "{}: wall clock read outside the clock module: {forbidden}",
                    file_path.display()
                ));
            }
        }
    }

    let runtime_source = match source.find("#[cfg(test)]") {
        Some(offset) => &source[..offset],
        None => source.as_str(),
    };
    for forbidden in [".unwrap()", ".expect("] {
        if runtime_source.contains(forbidden) {
            violations.push(format!(
                "{}: panicking accessor in non-test code: {forbidden}",
                file_path.display()
            ));
        }
    }

    for item in &file.items {
        if let Item::Use(item_use) = item {
            if use_tree_has_glob(&item_use.tree) {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
            }
        }
    }
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_private(vis: &Visibility) -> bool {
    matches!(vis, Visibility::Inherited)
}
