use std::fs;
use std::path::{Path, PathBuf};

/// Files whose change means HEAD may point at a different commit.
///
/// Covers branch switches (`HEAD`), new commits on the checked-out branch
/// (the ref file and the `refs/heads` directory) and `git pack-refs`.
pub fn watched_paths(git_dir: &Path) -> Vec<PathBuf> {
    let head = git_dir.join("HEAD");
    let mut paths = vec![
        head.clone(),
        git_dir.join("refs").join("heads"),
        git_dir.join("packed-refs"),
    ];

    if let Ok(content) = fs::read_to_string(&head) {
        if let Some(reference) = content.trim().strip_prefix("ref: ") {
            paths.push(git_dir.join(reference));
        }
    }

    // A missing path would make cargo rerun the build script on every build.
    paths.retain(|path| path.exists());
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git_dir_on_branch(branch: &str) -> tempfile::TempDir {
        let temp = tempfile::tempdir().unwrap();
        let heads = temp.path().join("refs").join("heads");
        fs::create_dir_all(&heads).unwrap();
        let head = format!("ref: refs/heads/{branch}\n");
        fs::write(temp.path().join("HEAD"), head).unwrap();
        temp
    }

    #[test]
    fn test_watches_checked_out_branch_ref() {
        let git_dir = git_dir_on_branch("main");
        let main_ref = git_dir.path().join("refs").join("heads").join("main");
        fs::write(&main_ref, "1a312b9\n").unwrap();

        let paths = watched_paths(git_dir.path());

        assert!(paths.contains(&git_dir.path().join("HEAD")));
        assert!(paths.contains(&git_dir.path().join("refs").join("heads")));
        assert!(paths.contains(&main_ref));
    }

    #[test]
    fn test_watches_packed_refs_when_present() {
        let git_dir = git_dir_on_branch("main");
        let packed_refs = git_dir.path().join("packed-refs");
        fs::write(&packed_refs, "59405ab refs/heads/main\n").unwrap();

        let paths = watched_paths(git_dir.path());

        assert!(paths.contains(&packed_refs));
        // refs/heads/main is packed, so there is no loose ref file to watch.
        assert!(!paths.contains(&git_dir.path().join("refs").join("heads").join("main")));
    }

    #[test]
    fn test_detached_head_watches_head_only_refs() {
        let temp = tempfile::tempdir().unwrap();
        let detached = "59405ab0000000000000000000000000000000\n";
        fs::write(temp.path().join("HEAD"), detached).unwrap();

        let paths = watched_paths(temp.path());

        assert_eq!(paths, vec![temp.path().join("HEAD")]);
    }

    #[test]
    fn test_no_git_dir_watches_nothing() {
        let temp = tempfile::tempdir().unwrap();
        assert!(watched_paths(&temp.path().join(".git")).is_empty());
    }
}
