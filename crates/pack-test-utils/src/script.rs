//! Stand-in executables for end-to-end runs.
//!
//! The pipeline shells out to `php composer.phar ...` and `zip`. Tests point
//! the packager at these shell scripts instead so no PHP toolchain is needed.

#[cfg(unix)]
use std::path::{Path, PathBuf};

/// Fake `php`: on `create-project` it populates the target directory
/// (the second-to-last argument) with a small project and vendor tree;
/// every other command succeeds without output.
pub const FAKE_PHP: &str = r##"#!/bin/sh
case "$2" in
  create-project)
    for last; do :; done
    target=""
    prev=""
    for arg; do
      if [ "$arg" = "$last" ]; then target="$prev"; fi
      prev="$arg"
    done
    mkdir -p "$target/src" "$target/docs" "$target/vendor/acme/lib/src" "$target/vendor/acme/lib/tests/unit"
    echo "<?php" > "$target/index.php"
    echo "# readme" > "$target/README.md"
    echo "{}" > "$target/composer.json"
    echo "<?php" > "$target/src/App.php"
    echo "guide" > "$target/docs/guide.md"
    echo "<?php" > "$target/vendor/autoload.php"
    echo "<?php" > "$target/vendor/acme/lib/src/Lib.php"
    echo "<?php" > "$target/vendor/acme/lib/tests/unit/LibTest.php"
    echo "$last" > "$target/VERSION"
    ;;
  *)
    ;;
esac
exit 0
"##;

/// Fake `zip -r -q <archive> <dir>`: writes the archived directory name into
/// the archive path.
pub const FAKE_ZIP: &str = r##"#!/bin/sh
echo "$4" > "$3"
exit 0
"##;

/// A script that always fails.
pub const FAILING: &str = "#!/bin/sh\necho boom >&2\nexit 2\n";

/// Write an executable script into `dir` and return its path.
#[cfg(unix)]
pub fn install(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}
