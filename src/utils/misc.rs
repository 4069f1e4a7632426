use std::{
    fs,
    path::{Component, Path, PathBuf},
};

// game files are referenced with windows separators
pub fn fix_backslash(i: &str) -> String {
    i.replace("\\", "/")
}

/// Joins `relative` onto `root`. If that path does not exist, every component
/// is looked up again ignoring ASCII case.
///
/// Returns the exact join when nothing matches so the caller reports the path
/// it actually asked for.
pub fn resolve_case_insensitive(root: &Path, relative: &Path) -> PathBuf {
    let relative = PathBuf::from(fix_backslash(&relative.to_string_lossy()));
    let exact = root.join(&relative);

    if exact.exists() {
        return exact;
    }

    let mut current = root.to_path_buf();

    for component in relative.components() {
        let Component::Normal(name) = component else {
            current.push(component);
            continue;
        };

        let name = name.to_string_lossy();

        let found = fs::read_dir(&current).ok().and_then(|rd| {
            rd.filter_map(|entry| entry.ok())
                .find(|entry| entry.file_name().to_string_lossy().eq_ignore_ascii_case(&name))
        });

        match found {
            Some(entry) => current.push(entry.file_name()),
            None => return exact,
        }
    }

    current
}

#[macro_export]
macro_rules! err {
    ($e: ident) => {{
        use eyre::eyre;

        Err(eyre!($e))
    }};

    ($format_string: literal) => {{
        use eyre::eyre;

        Err(eyre!($format_string))
    }};

    ($($arg:tt)*) => {{
        use eyre::eyre;

        Err(eyre!($($arg)*))
    }};
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exact_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("GFX")).unwrap();
        fs::write(dir.path().join("GFX/STADTFLD.BSH"), b"").unwrap();

        let res = resolve_case_insensitive(dir.path(), Path::new("GFX/STADTFLD.BSH"));

        assert_eq!(res, dir.path().join("GFX/STADTFLD.BSH"));
    }

    #[test]
    fn mixed_case_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("SGFX")).unwrap();
        fs::write(dir.path().join("SGFX/Stadtfld.bsh"), b"").unwrap();

        let res = resolve_case_insensitive(dir.path(), Path::new("sgfx\\STADTFLD.BSH"));

        assert_eq!(res, dir.path().join("SGFX/Stadtfld.bsh"));
    }

    #[test]
    fn missing_path() {
        let dir = tempfile::tempdir().unwrap();

        let res = resolve_case_insensitive(dir.path(), Path::new("ToolGfx/STADTFLD.COL"));

        assert_eq!(res, dir.path().join("ToolGfx/STADTFLD.COL"));
    }
}
