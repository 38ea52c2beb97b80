use super::*;

#[test]
fn ensure_log_dir_in_creates_nested_directory() {
    let base = tempfile::tempdir().unwrap();
    let dir = ensure_log_dir_in(base.path()).unwrap();
    assert!(dir.is_dir());
    assert!(dir.ends_with("cellmenu/logs"));
}

#[test]
fn ensure_log_dir_in_is_idempotent() {
    let base = tempfile::tempdir().unwrap();
    let first = ensure_log_dir_in(base.path()).unwrap();
    let second = ensure_log_dir_in(base.path()).unwrap();
    assert_eq!(first, second);
}
