use super::*;
use std::fs;
use tempfile::TempDir;

#[derive(Debug)]
enum TestError {
    Scratch,
    Failed,
}

impl From<ScratchError> for TestError {
    fn from(_: ScratchError) -> Self {
        TestError::Scratch
    }
}

#[test]
fn test_scratch_dir_created_with_prefix() {
    let parent = TempDir::new().unwrap();
    let scratch = ScratchDir::new_in(parent.path(), "req-").unwrap();

    assert!(scratch.path().is_dir());
    assert!(scratch.path().starts_with(parent.path()));
    let name = scratch.path().file_name().unwrap().to_string_lossy();
    assert!(name.starts_with("req-"));
}

#[test]
fn test_scratch_dirs_are_unique() {
    let parent = TempDir::new().unwrap();
    let a = ScratchDir::new_in(parent.path(), DEFAULT_PREFIX).unwrap();
    let b = ScratchDir::new_in(parent.path(), DEFAULT_PREFIX).unwrap();
    assert_ne!(a.path(), b.path());
}

#[cfg(unix)]
#[test]
fn test_scratch_dir_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let parent = TempDir::new().unwrap();
    let scratch = ScratchDir::new_in(parent.path(), DEFAULT_PREFIX).unwrap();
    let mode = fs::metadata(scratch.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o077, 0);
}

#[test]
fn test_drop_removes_nested_tree() {
    let parent = TempDir::new().unwrap();
    let scratch = ScratchDir::new_in(parent.path(), DEFAULT_PREFIX).unwrap();
    let root = scratch.path().to_path_buf();

    fs::create_dir_all(root.join("a/b/c")).unwrap();
    fs::create_dir_all(root.join("empty")).unwrap();
    fs::write(root.join("a/b/c/deep.txt"), "x").unwrap();
    fs::write(root.join("top.md"), "y").unwrap();

    drop(scratch);
    assert!(!root.exists());
}

#[test]
fn test_cleanup_reports_no_failures() {
    let parent = TempDir::new().unwrap();
    let scratch = ScratchDir::new_in(parent.path(), DEFAULT_PREFIX).unwrap();
    fs::write(scratch.path().join("f.txt"), "x").unwrap();

    assert_eq!(scratch.cleanup(), 0);
    assert!(!scratch.path().exists());
    // Already gone: nothing to do
    assert_eq!(scratch.cleanup(), 0);
}

#[test]
fn test_with_scratch_dir_success_cleans_up() {
    let parent = TempDir::new().unwrap();
    let mut seen = None;

    let result: Result<u32, TestError> = with_scratch_dir(parent.path(), "ok-", |dir| {
        fs::write(dir.join("file.txt"), "data").unwrap();
        seen = Some(dir.to_path_buf());
        Ok(7)
    });

    assert_eq!(result.unwrap(), 7);
    assert!(!seen.unwrap().exists());
    assert_eq!(fs::read_dir(parent.path()).unwrap().count(), 0);
}

#[test]
fn test_with_scratch_dir_failure_cleans_up() {
    let parent = TempDir::new().unwrap();

    let result: Result<(), TestError> = with_scratch_dir(parent.path(), "err-", |dir| {
        fs::create_dir_all(dir.join("partial/tree")).unwrap();
        Err(TestError::Failed)
    });

    assert!(matches!(result, Err(TestError::Failed)));
    assert_eq!(fs::read_dir(parent.path()).unwrap().count(), 0);
}

#[test]
fn test_with_scratch_dir_panic_cleans_up() {
    let parent = TempDir::new().unwrap();
    let parent_path = parent.path().to_path_buf();

    let outcome = std::panic::catch_unwind(|| {
        let _: Result<(), TestError> = with_scratch_dir(&parent_path, "panic-", |dir| {
            fs::write(dir.join("f.txt"), "x").unwrap();
            panic!("boom");
        });
    });

    assert!(outcome.is_err());
    assert_eq!(fs::read_dir(parent.path()).unwrap().count(), 0);
}

#[test]
fn test_unusable_parent_is_an_error() {
    let parent = TempDir::new().unwrap();
    let blocker = parent.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    let result: Result<(), TestError> = with_scratch_dir(&blocker, "x-", |_| Ok(()));
    assert!(matches!(result, Err(TestError::Scratch)));
}
