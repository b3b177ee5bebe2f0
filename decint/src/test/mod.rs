use difference::{Changeset, Difference};
use libtest_mimic::{run_tests, Arguments, Outcome, Test};
use std::error::Error;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

#[macro_use]
mod common;

use common::*;
use decint_emit_test::DecintEmitTest;
use exec::*;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Arguments::from_args();
    let test_files = collect_test_files()?;
    let tests = test_files.into_iter().map(TestCase::new).collect();
    run_tests(&args, tests, TestCase::drive_test).exit();
}

/// Collects all `.decint` system test files, starting from decint/src/test and visiting all nested
/// directories.
fn collect_test_files() -> Result<Vec<Test<PathBuf>>, Box<dyn Error>> {
    let root_test_path = Path::new("src/test");
    let mut dirs_to_visit = vec![root_test_path.to_path_buf()];
    let mut tests = Vec::with_capacity(64);
    while let Some(dir) = dirs_to_visit.pop() {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let entry_type = entry.file_type()?;
            if entry_type.is_dir() {
                dirs_to_visit.push(path);
                continue;
            }
            if path.extension() == Some(OsStr::new("decint")) {
                let name = path.strip_prefix(root_test_path)?.display().to_string();

                tests.push(Test {
                    name,
                    kind: "system".to_owned(),
                    is_ignored: false,
                    is_bench: false,
                    data: path,
                });
            }
        }
    }
    Ok(tests)
}

#[derive(Clone)]
struct TestCase {
    path: PathBuf,
    variant: TestCaseVariant,
}

impl TestCase {
    /// Executes a decint system test.
    fn drive_test(test: &Test<Self>) -> Outcome {
        let test_name = test.name.clone();
        let test_path = test.data.path.clone();
        match test.data.variant.clone() {
            TestCaseVariant::FailedTestConstruction(msg) => Outcome::Failed { msg: Some(msg) },
            TestCaseVariant::DecintEmit(tc) => tc.drive_test(test_name, test_path),
        }
    }

    /// Creates a test case from a decint system test file.
    fn new(test_file: Test<PathBuf>) -> Test<Self> {
        let variant = match fs::read_to_string(&test_file.data) {
            Ok(content) => match DecintEmitTest::new(&test_file, content) {
                Ok(test) => TestCaseVariant::DecintEmit(test),
                Err(msg) => TestCaseVariant::FailedTestConstruction(msg),
            },
            Err(e) => TestCaseVariant::FailedTestConstruction(e.to_string()),
        };

        Test {
            name: test_file.name,
            data: TestCase {
                path: test_file.data,
                variant,
            },
            kind: "system".to_owned(),
            is_ignored: false,
            is_bench: false,
        }
    }
}

#[derive(Clone)]
enum TestCaseVariant {
    DecintEmit(DecintEmitTest),
    FailedTestConstruction(String),
}

/// Returns the command to bless a test file.
fn get_bless_cmd(test_name: &str) -> String {
    format!("BLESS=1 cargo test --test system_tests -- \"{}\"", test_name)
}
