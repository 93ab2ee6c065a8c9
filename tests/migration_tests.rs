//! End-to-end tests: run the migration over a small project tree

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use slf4j_migrate::{run_migration, MigrationConfig, RunOptions, RunSummary};

const CONTROLLER: &str = "package com.shop.api;

import java.util.List;
import org.springframework.web.bind.annotation.RestController;

@RestController
public class ProductController {

    public List<Product> list() {
        System.out.println(\"Listing products\");
        List<Product> result = repository.findAll();
        System.out.println(result);
        return result;
    }

    public void fail(Exception e) {
        System.err.println(\"Value: \" + x);
    }
}
";

const QUIET: &str = "package com.shop.api;

public class Product {
    private String name;
}
";

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn run(root: &Path, dry_run: bool) -> (RunSummary, String) {
    let options = RunOptions {
        dry_run,
        use_color: false,
    };
    let mut out = Vec::new();
    let summary = run_migration(root, MigrationConfig::default(), &options, &mut out).unwrap();
    (summary, String::from_utf8(out).unwrap())
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/main/java/com/shop/api/ProductController.java", CONTROLLER);
    write(dir.path(), "src/main/java/com/shop/api/Product.java", QUIET);
    dir
}

#[test]
fn test_migrates_controller() {
    let dir = project();
    let (summary, transcript) = run(dir.path(), false);

    assert_eq!(summary, RunSummary { found: 2, updated: 1, failed: 0 });

    let migrated = fs::read_to_string(
        dir.path().join("src/main/java/com/shop/api/ProductController.java"),
    )
    .unwrap();

    assert!(migrated.contains("log.info(\"Listing products\");"));
    assert!(migrated.contains("log.info(\"{}\",result);"));
    assert!(migrated.contains("log.error(\"Value: {}\", x);"));
    assert!(migrated.contains(
        "import org.springframework.web.bind.annotation.RestController;\nimport org.slf4j.Logger;\nimport org.slf4j.LoggerFactory;\n"
    ));
    // @RestController is not the recognised annotation, but the class brace still matches
    assert!(migrated.contains(
        "public class ProductController {\n\n    private static final Logger log = LoggerFactory.getLogger(ProductController.class);\n"
    ));
    assert_eq!(migrated.matches("private static final Logger log").count(), 1);

    assert!(transcript.contains("Found 2 Java files"));
    assert!(transcript.contains("  ➕ Adding SLF4J imports"));
    assert!(transcript.contains("  ➕ Adding logger for class ProductController"));
    assert!(transcript.contains("  ✅ File updated"));
    assert!(transcript.contains("  ⏭️  No System.out/err - skipping"));
    assert!(transcript.trim_end().ends_with("Files updated: 1/2"));
}

#[test]
fn test_irrelevant_file_is_byte_identical() {
    let dir = project();
    run(dir.path(), false);

    let quiet = fs::read(dir.path().join("src/main/java/com/shop/api/Product.java")).unwrap();
    assert_eq!(quiet, QUIET.as_bytes());
}

#[test]
fn test_second_run_changes_nothing() {
    let dir = project();
    run(dir.path(), false);
    let path = dir.path().join("src/main/java/com/shop/api/ProductController.java");
    let after_first = fs::read_to_string(&path).unwrap();

    let (summary, transcript) = run(dir.path(), false);
    assert_eq!(summary.updated, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
    assert!(transcript.contains("Files updated: 0/2"));
}

#[test]
fn test_second_run_reports_no_changes_needed_when_calls_remain() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "Main.java",
        "import java.io.PrintStream;\n\npublic class Main {\n    void f() {\n        System.out.print(\"no newline\");\n    }\n}\n",
    );

    let (first, _) = run(dir.path(), false);
    assert_eq!(first.updated, 1);

    let (second, transcript) = run(dir.path(), false);
    assert_eq!(second.updated, 0);
    assert!(transcript.contains("  ℹ️  No changes needed"));
    assert!(transcript.contains("  ⚠️  1 System.out/err occurrence left unchanged"));
}

#[test]
fn test_dry_run_leaves_files_untouched() {
    let dir = project();
    let path = dir.path().join("src/main/java/com/shop/api/ProductController.java");

    let (summary, transcript) = run(dir.path(), true);

    assert_eq!(fs::read_to_string(&path).unwrap(), CONTROLLER);
    assert_eq!(summary.updated, 1);
    assert!(transcript.starts_with("🔍 DRY-RUN MODE - no files will be modified"));
    assert!(transcript.contains("  🔍 [DRY-RUN] Would update"));
    assert!(transcript.contains("+ import org.slf4j.Logger;"));
    assert!(transcript.contains("System.out.println(result);"));
    assert!(transcript.contains("log.info(\"{}\",result);"));
    assert!(transcript.contains("[DRY-RUN] Files updated: 1/2"));
    assert!(transcript.contains("💡 Run without --dry-run to apply the changes"));
}

#[test]
fn test_excluded_directories_are_not_touched() {
    let dir = project();
    write(dir.path(), "target/generated/Gen.java", CONTROLLER);
    write(dir.path(), ".git/objects/Obj.java", CONTROLLER);

    let (summary, _) = run(dir.path(), false);
    assert_eq!(summary.found, 2);
    assert_eq!(
        fs::read_to_string(dir.path().join("target/generated/Gen.java")).unwrap(),
        CONTROLLER
    );
    assert_eq!(
        fs::read_to_string(dir.path().join(".git/objects/Obj.java")).unwrap(),
        CONTROLLER
    );
}

#[test]
fn test_unreadable_file_does_not_stop_the_run() {
    let dir = project();
    fs::write(dir.path().join("Broken.java"), [0xffu8, 0xfe, 0x00, 0x53]).unwrap();

    let (summary, transcript) = run(dir.path(), false);
    assert_eq!(summary, RunSummary { found: 3, updated: 1, failed: 1 });
    assert!(transcript.contains("  ❌ File is not valid UTF-8"));
    assert!(transcript.contains("Files failed: 1"));
}

#[test]
fn test_empty_tree() {
    let dir = TempDir::new().unwrap();
    let (summary, transcript) = run(dir.path(), false);
    assert_eq!(summary, RunSummary::default());
    assert!(transcript.contains("Found 0 Java files"));
    assert!(transcript.contains("Files updated: 0/0"));
}
