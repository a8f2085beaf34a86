//! End-to-end tests for writing compile_commands.json into a directory.

use ccgen_build::{
    CompileCommands, FixedPrefix, GenError, Generator, GeneratorConfig, LookupPolicy,
    PackageQuery,
};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn project(files: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for name in files {
        fs::write(dir.path().join(name), "").expect("Failed to write file");
    }
    dir
}

fn generator() -> Generator<FixedPrefix> {
    Generator::new(
        GeneratorConfig::default(),
        FixedPrefix("/usr/local/opt/jpeg".to_string()),
    )
}

fn read_back(path: &Path) -> CompileCommands {
    CompileCommands::from_file(path).expect("Output should be valid JSON")
}

#[test]
fn test_only_c_files_get_records() {
    let dir = project(&["a.c", "b.c", "readme.md"]);

    let path = generator().run(dir.path()).expect("Failed to run");
    let commands = read_back(&path);

    let files: Vec<&Path> = commands.files().collect();
    assert_eq!(files, vec![Path::new("a.c"), Path::new("b.c")]);
    assert!(commands.find_command(Path::new("readme.md")).is_none());
}

#[test]
fn test_records_share_directory_and_arguments() {
    let dir = project(&["cyberpunk.c", "grey-scale.c", "util.c"]);

    let commands = read_back(&generator().run(dir.path()).unwrap());
    let first = &commands.commands()[0];

    for cmd in commands.commands() {
        assert_eq!(cmd.directory, first.directory);
        assert_eq!(cmd.arguments, first.arguments);
    }
    assert_eq!(
        first.arguments,
        vec!["gcc-14", "-O3", "-I/usr/local/opt/jpeg/include"]
    );
}

#[test]
fn test_no_duplicates_or_omissions() {
    let names = ["x.c", "y.c", "z.c", "notes.txt", "x.c.bak"];
    let dir = project(&names);

    let commands = generator().generate(dir.path()).unwrap();

    let expected: HashSet<PathBuf> = ["x.c", "y.c", "z.c"].iter().map(PathBuf::from).collect();
    let actual: HashSet<PathBuf> = commands.files().map(Path::to_path_buf).collect();
    assert_eq!(actual, expected);
    assert_eq!(commands.len(), expected.len());
}

#[test]
fn test_empty_directory_still_writes_file() {
    let dir = project(&["Makefile"]);

    let path = generator().run(dir.path()).unwrap();

    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    assert!(read_back(&path).is_empty());
}

#[test]
fn test_written_file_round_trips() {
    let dir = project(&["decode.c", "encode.c"]);

    let generated = generator().generate(dir.path()).unwrap();
    let path = generator().run(dir.path()).unwrap();

    assert_eq!(read_back(&path), generated);
}

#[test]
fn test_existing_output_is_replaced() {
    let dir = project(&["main.c"]);
    let out = dir.path().join("compile_commands.json");
    fs::write(&out, "stale content that is much longer than the new file ".repeat(50)).unwrap();

    generator().run(dir.path()).unwrap();

    let commands = read_back(&out);
    assert_eq!(commands.len(), 1);
    assert_eq!(commands.commands()[0].file, PathBuf::from("main.c"));
}

#[test]
fn test_output_file_is_not_listed_as_source() {
    let dir = project(&["a.c"]);

    generator().run(dir.path()).unwrap();
    let commands = read_back(&generator().run(dir.path()).unwrap());

    assert_eq!(commands.len(), 1);
}

#[test]
fn test_trailing_newline_in_prefix_is_stripped() {
    let dir = project(&["a.c"]);
    let generator = Generator::new(
        GeneratorConfig::default(),
        FixedPrefix("/opt/homebrew/opt/jpeg\n".to_string()),
    );

    let commands = generator.generate(dir.path()).unwrap();
    assert_eq!(
        commands.commands()[0].arguments[2],
        "-I/opt/homebrew/opt/jpeg/include"
    );
}

#[test]
fn test_missing_query_program_proceeds_by_default() {
    let dir = project(&["a.c"]);
    let generator = Generator::new(
        GeneratorConfig::default(),
        PackageQuery::new("ccgen-missing-package-manager", vec!["--prefix".to_string()]),
    );

    let commands = read_back(&generator.run(dir.path()).unwrap());
    assert_eq!(commands.commands()[0].arguments[2], "-I/include");
}

#[test]
fn test_missing_query_program_aborts_in_strict_mode() {
    let dir = project(&["a.c"]);
    let config = GeneratorConfig {
        query: vec!["ccgen-missing-package-manager".to_string()],
        on_lookup_failure: LookupPolicy::Abort,
        ..GeneratorConfig::default()
    };
    let generator = Generator::with_query(config).unwrap();

    let err = generator.run(dir.path()).unwrap_err();
    assert!(matches!(err, GenError::PrefixLookup { .. }));
    assert!(!dir.path().join("compile_commands.json").exists());
}

#[test]
fn test_config_overrides_template_and_output() {
    let dir = project(&["a.c", "b.cpp"]);
    let config = GeneratorConfig::from_str(
        r#"
directory = "/work/img"
compiler = "clang"
flags = ["-O0", "-g"]
suffix = ".cpp"
output = "db.json"
        "#,
    )
    .unwrap();
    let generator = Generator::new(config, FixedPrefix("/usr".to_string()));

    let path = generator.run(dir.path()).unwrap();
    assert_eq!(path, dir.path().join("db.json"));

    let commands = read_back(&path);
    assert_eq!(commands.len(), 1);
    let cmd = &commands.commands()[0];
    assert_eq!(cmd.directory, PathBuf::from("/work/img"));
    assert_eq!(cmd.arguments, vec!["clang", "-O0", "-g", "-I/usr/include"]);
    assert_eq!(cmd.file, PathBuf::from("b.cpp"));
}

#[cfg(unix)]
#[test]
fn test_unwritable_output_fails() {
    let dir = project(&["a.c"]);
    // A directory where the output file should be makes the write fail.
    fs::create_dir(dir.path().join("compile_commands.json")).unwrap();

    let err = generator().run(dir.path()).unwrap_err();
    assert!(matches!(err, GenError::Io(_)));
}
