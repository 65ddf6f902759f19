use std::fs;
use std::path::Path;

use init_project::error::Error;
use init_project::ignore::{build_rules, BUILTIN_PATTERNS};
use init_project::placeholder::Placeholders;
use init_project::processor::{apply, planned_renames, FileOperation, Processor};
use init_project::project::{ProjectConfig, ProjectNumber};
use tempfile::TempDir;

fn config() -> ProjectConfig {
    ProjectConfig {
        project_name: "my-proj".parse().unwrap(),
        exec_name: "hello".parse().unwrap(),
        project_number: ProjectNumber::new(42).unwrap(),
        dry_run: false,
        no_prompt: true,
        self_destruct: true,
    }
}

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, relative).unwrap();
}

fn setup_template() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    touch(root, ".git/HEAD");
    touch(root, ".gitignore");
    touch(root, "build/output");
    touch(root, "main.cpp");
    touch(root, "src/<EXEC>/main.cpp");
    touch(root, "<PROJECT_NAME>/<EXEC>.cpp");
    touch(root, "include/__PROJID__.hpp");
    temp_dir
}

#[test]
fn test_placeholder_substitution() {
    let placeholders = Placeholders::from_config(&config());

    assert_eq!(placeholders.substitute("<EXEC>"), Some("hello".to_string()));
    assert_eq!(
        placeholders.substitute("<PROJECT_NAME>___PROJID__.hpp"),
        Some("my-proj_000042.hpp".to_string())
    );
    assert_eq!(placeholders.substitute("main.cpp"), None);
}

#[test]
fn test_scan_skips_ignored_paths_without_pruning() {
    let temp_dir = setup_template();
    let rules = build_rules(&BUILTIN_PATTERNS, ["build/"]).unwrap();
    let placeholders = Placeholders::from_config(&config());
    let processor = Processor::new(temp_dir.path(), &rules, &placeholders);

    let relative: Vec<String> = processor
        .scan()
        .unwrap()
        .into_iter()
        .map(|result| result.relative)
        .collect();

    assert_eq!(
        relative,
        vec![
            "<PROJECT_NAME>",
            "<PROJECT_NAME>/<EXEC>.cpp",
            "build",
            "include",
            "include/__PROJID__.hpp",
            "main.cpp",
            "src",
            "src/<EXEC>",
            "src/<EXEC>/main.cpp",
        ]
    );
}

#[test]
fn test_process_single_entry() {
    let temp_dir = setup_template();
    let root = temp_dir.path();
    let rules = build_rules(&BUILTIN_PATTERNS, ["build/"]).unwrap();
    let placeholders = Placeholders::from_config(&config());
    let processor = Processor::new(root, &rules, &placeholders);

    assert!(processor.process(root.join(".git/HEAD")).unwrap().is_none());
    assert!(processor.process(root.join("build/output")).unwrap().is_none());

    let result = processor.process(root.join("main.cpp")).unwrap().unwrap();
    assert_eq!(result.operation, FileOperation::Report);

    let result = processor.process(root.join("src/<EXEC>")).unwrap().unwrap();
    assert_eq!(
        result.operation,
        FileOperation::Rename { target: root.join("src/hello") }
    );
}

#[test]
fn test_renames_are_ordered_children_first() {
    let temp_dir = setup_template();
    let root = temp_dir.path();
    let rules = build_rules(&BUILTIN_PATTERNS, ["build/"]).unwrap();
    let placeholders = Placeholders::from_config(&config());
    let processor = Processor::new(root, &rules, &placeholders);
    let results = processor.scan().unwrap();

    let renames = planned_renames(&results);
    let sources: Vec<_> = renames
        .iter()
        .map(|(source, _)| source.strip_prefix(root).unwrap().to_path_buf())
        .collect();

    let child = sources
        .iter()
        .position(|p| p == Path::new("<PROJECT_NAME>/<EXEC>.cpp"))
        .unwrap();
    let parent = sources
        .iter()
        .position(|p| p == Path::new("<PROJECT_NAME>"))
        .unwrap();
    assert!(child < parent);
    assert_eq!(renames.len(), 4);
}

#[test]
fn test_apply_renames() {
    let temp_dir = setup_template();
    let root = temp_dir.path();
    let rules = build_rules(&BUILTIN_PATTERNS, ["build/"]).unwrap();
    let placeholders = Placeholders::from_config(&config());
    let processor = Processor::new(root, &rules, &placeholders);
    let results = processor.scan().unwrap();

    assert_eq!(apply(&results).unwrap(), 4);

    let expected = TempDir::new().unwrap();
    let expected_root = expected.path();
    fs::create_dir_all(expected_root.join(".git")).unwrap();
    fs::write(expected_root.join(".git/HEAD"), ".git/HEAD").unwrap();
    fs::write(expected_root.join(".gitignore"), ".gitignore").unwrap();
    fs::create_dir_all(expected_root.join("build")).unwrap();
    fs::write(expected_root.join("build/output"), "build/output").unwrap();
    fs::write(expected_root.join("main.cpp"), "main.cpp").unwrap();
    fs::create_dir_all(expected_root.join("src/hello")).unwrap();
    fs::write(expected_root.join("src/hello/main.cpp"), "src/<EXEC>/main.cpp").unwrap();
    fs::create_dir_all(expected_root.join("my-proj")).unwrap();
    fs::write(expected_root.join("my-proj/hello.cpp"), "<PROJECT_NAME>/<EXEC>.cpp").unwrap();
    fs::create_dir_all(expected_root.join("include")).unwrap();
    fs::write(expected_root.join("include/000042.hpp"), "include/__PROJID__.hpp").unwrap();

    assert!(!dir_diff::is_different(root, expected_root).unwrap());
}

#[test]
fn test_scan_does_not_touch_tree() {
    let temp_dir = setup_template();
    let snapshot = TempDir::new().unwrap();
    let root = temp_dir.path();
    for relative in [
        ".git/HEAD",
        ".gitignore",
        "build/output",
        "main.cpp",
        "src/<EXEC>/main.cpp",
        "<PROJECT_NAME>/<EXEC>.cpp",
        "include/__PROJID__.hpp",
    ] {
        touch(snapshot.path(), relative);
    }

    let rules = build_rules(&BUILTIN_PATTERNS, ["build/"]).unwrap();
    let placeholders = Placeholders::from_config(&config());
    let results = Processor::new(root, &rules, &placeholders).scan().unwrap();

    assert_eq!(planned_renames(&results).len(), 4);
    assert!(!dir_diff::is_different(root, snapshot.path()).unwrap());
}

#[test]
fn test_apply_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, "<EXEC>.cpp");
    touch(root, "hello.cpp");

    let rules = build_rules(&BUILTIN_PATTERNS, std::iter::empty()).unwrap();
    let placeholders = Placeholders::from_config(&config());
    let results = Processor::new(root, &rules, &placeholders).scan().unwrap();

    assert!(matches!(apply(&results), Err(Error::ProcessError { .. })));
    assert!(root.join("<EXEC>.cpp").exists());
}

#[test]
fn test_apply_checks_every_target_before_renaming() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, "a/<EXEC>.cpp");
    touch(root, "<EXEC>.cpp");
    touch(root, "hello.cpp");

    let rules = build_rules(&BUILTIN_PATTERNS, std::iter::empty()).unwrap();
    let placeholders = Placeholders::from_config(&config());
    let results = Processor::new(root, &rules, &placeholders).scan().unwrap();

    assert!(matches!(apply(&results), Err(Error::ProcessError { .. })));
    assert!(root.join("a/<EXEC>.cpp").exists());
    assert!(!root.join("a/hello.cpp").exists());
    assert!(root.join("<EXEC>.cpp").exists());
}

#[test]
fn test_apply_rejects_duplicate_targets() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, "<EXEC>.cpp");
    touch(root, "<PROJECT_NAME>.cpp");

    let mut same = config();
    same.project_name = "same".parse().unwrap();
    same.exec_name = "same".parse().unwrap();

    let rules = build_rules(&BUILTIN_PATTERNS, std::iter::empty()).unwrap();
    let placeholders = Placeholders::from_config(&same);
    let results = Processor::new(root, &rules, &placeholders).scan().unwrap();

    match apply(&results) {
        Err(Error::ProcessError { reason, .. }) => assert!(reason.contains("more than once")),
        other => panic!("Expected ProcessError, got {:?}", other),
    }
    assert!(root.join("<EXEC>.cpp").exists());
    assert!(root.join("<PROJECT_NAME>.cpp").exists());
    assert!(!root.join("same.cpp").exists());
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_names_are_not_renamed() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let path = root.join(OsStr::from_bytes(b"<EXEC>\xff.cpp"));
    fs::write(&path, "content").unwrap();

    let rules = build_rules(&BUILTIN_PATTERNS, std::iter::empty()).unwrap();
    let placeholders = Placeholders::from_config(&config());
    let processor = Processor::new(root, &rules, &placeholders);

    let result = processor.process(&path).unwrap().unwrap();
    assert_eq!(result.operation, FileOperation::Report);
}
