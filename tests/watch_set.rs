// tests/watch_set.rs

mod common;

use common::{init_tracing, relative_names, FixtureDir, WatchConfigBuilder};
use on_change::fs::RealFileSystem;
use on_change::watch::build_watch_set;

#[test]
fn directory_target_yields_every_file() {
    init_tracing();
    let fixture = FixtureDir::test_folder();
    let cfg = WatchConfigBuilder::new("ls", fixture.root())
        .target("test_folder")
        .build();

    let set = build_watch_set(&RealFileSystem, &cfg.cwd, &cfg.targets, &cfg.filter).unwrap();

    assert_eq!(
        relative_names(&set, fixture.root()),
        vec![
            "test_folder/test1.txt",
            "test_folder/test2.csv",
            "test_folder/test3.log",
        ]
    );
}

#[test]
fn extension_list_narrows_the_set() {
    init_tracing();
    let fixture = FixtureDir::test_folder();
    let cfg = WatchConfigBuilder::new("ls", fixture.root())
        .target("test_folder")
        .extension(".txt")
        .extension(".csv")
        .build();

    let set = build_watch_set(&RealFileSystem, &cfg.cwd, &cfg.targets, &cfg.filter).unwrap();

    assert_eq!(
        relative_names(&set, fixture.root()),
        vec!["test_folder/test1.txt", "test_folder/test2.csv"]
    );
}

#[test]
fn exclusion_pattern_removes_matches() {
    init_tracing();
    let fixture = FixtureDir::test_folder();
    let cfg = WatchConfigBuilder::new("ls", fixture.root())
        .target("test_folder")
        .exclude(r"test[12]\.")
        .build();

    let set = build_watch_set(&RealFileSystem, &cfg.cwd, &cfg.targets, &cfg.filter).unwrap();

    assert_eq!(relative_names(&set, fixture.root()), vec!["test_folder/test3.log"]);
}

#[test]
fn nested_directories_are_walked_to_any_depth() {
    init_tracing();
    let fixture = FixtureDir::new();
    fixture.file("src/main.rs");
    fixture.file("src/a/b/c/deep.rs");
    fixture.file("src/a/notes.md");
    fixture.dir("src/empty");

    let cfg = WatchConfigBuilder::new("cargo check", fixture.root())
        .target("src")
        .extension(".rs")
        .build();

    let set = build_watch_set(&RealFileSystem, &cfg.cwd, &cfg.targets, &cfg.filter).unwrap();

    assert_eq!(
        relative_names(&set, fixture.root()),
        vec!["src/a/b/c/deep.rs", "src/main.rs"]
    );
}

#[test]
fn file_and_directory_targets_are_combined_without_duplicates() {
    init_tracing();
    let fixture = FixtureDir::test_folder();
    fixture.file("Cargo.toml");

    let cfg = WatchConfigBuilder::new("ls", fixture.root())
        .target("Cargo.toml")
        .target("test_folder")
        .target("test_folder/test1.txt")
        .build();

    let set = build_watch_set(&RealFileSystem, &cfg.cwd, &cfg.targets, &cfg.filter).unwrap();

    assert_eq!(set.len(), 4);
    assert!(set.contains(&fixture.path("Cargo.toml")));
    assert!(set.contains(&fixture.path("test_folder/test1.txt")));
}

#[test]
fn filters_that_match_nothing_give_an_empty_set() {
    init_tracing();
    let fixture = FixtureDir::test_folder();
    let cfg = WatchConfigBuilder::new("ls", fixture.root())
        .target("test_folder")
        .extension(".rs")
        .build();

    let set = build_watch_set(&RealFileSystem, &cfg.cwd, &cfg.targets, &cfg.filter).unwrap();

    assert!(set.is_empty());
}

#[cfg(unix)]
#[test]
fn symlinked_directory_cycle_is_expanded_once() {
    init_tracing();
    let fixture = FixtureDir::new();
    fixture.file("tree/one.txt");
    std::os::unix::fs::symlink(fixture.path("tree"), fixture.path("tree/loop")).unwrap();

    let cfg = WatchConfigBuilder::new("ls", fixture.root())
        .target("tree")
        .build();

    let set = build_watch_set(&RealFileSystem, &cfg.cwd, &cfg.targets, &cfg.filter).unwrap();

    assert_eq!(relative_names(&set, fixture.root()), vec!["tree/one.txt"]);
}
