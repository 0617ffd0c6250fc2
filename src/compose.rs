//! Pure construction of the editor command line. No side effects here;
//! execution lives in [`crate::launcher`].

use anyhow::{Context, Result};

use crate::editor::EditorProfile;

/// Build the shell command line for launching `profile` on `paths`.
///
/// Every token is quoted with [`shlex`], so paths containing spaces,
/// quotes, or shell metacharacters survive a later `shlex::split` as
/// single arguments. The profile's new-window flag is appended exactly
/// once when the launch targets a directory or `always_new_window` is set.
///
/// # Errors
///
/// Fails only when a token cannot be represented on a command line
/// (an interior NUL byte).
pub fn compose(
    profile: &EditorProfile,
    paths: &[String],
    targets_directory: bool,
    always_new_window: bool,
) -> Result<String> {
    let mut parts: Vec<String> = Vec::with_capacity(paths.len() + 2);
    parts.push(quote(&profile.command)?);
    if targets_directory || always_new_window {
        if let Some(flag) = profile.new_window_flag {
            parts.push(flag.to_string());
        }
    }
    for path in paths {
        parts.push(quote(path)?);
    }
    Ok(parts.join(" "))
}

fn quote(token: &str) -> Result<String> {
    let quoted = shlex::try_quote(token)
        .with_context(|| format!("Cannot place on a command line: {token}"))?;
    Ok(quoted.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::editor::EditorKind;

    fn profile(kind: EditorKind) -> EditorProfile {
        EditorProfile::from_config(kind, &Config::default())
    }

    #[test]
    fn test_plain_file_launch() {
        let cmd = compose(
            &profile(EditorKind::Code),
            &["/tmp/a.txt".to_string()],
            false,
            false,
        )
        .unwrap();
        assert_eq!(cmd, "code /tmp/a.txt");
    }

    #[test]
    fn test_directory_adds_new_window_flag_once() {
        let cmd = compose(
            &profile(EditorKind::Code),
            &["/home/u/proj".to_string()],
            true,
            true,
        )
        .unwrap();
        assert_eq!(cmd.matches("--new-window").count(), 1);
        assert_eq!(cmd, "code --new-window /home/u/proj");
    }

    #[test]
    fn test_kiro_directory_has_no_flag() {
        let cmd = compose(
            &profile(EditorKind::Kiro),
            &["/home/u/proj".to_string()],
            true,
            false,
        )
        .unwrap();
        assert_eq!(cmd, "kiro /home/u/proj");
    }

    #[test]
    fn test_hostile_path_roundtrips_as_one_argument() {
        let hostile = r#"/tmp/a b"c;rm -rf ~.txt"#.to_string();
        let cmd = compose(&profile(EditorKind::Code), &[hostile.clone()], false, false).unwrap();
        let argv = shlex::split(&cmd).unwrap();
        assert_eq!(argv, vec!["code".to_string(), hostile]);
    }

    #[test]
    fn test_multiple_paths_keep_selection_order() {
        let paths = vec!["/tmp/z.txt".to_string(), "/tmp/a dir".to_string()];
        let cmd = compose(&profile(EditorKind::Code), &paths, false, false).unwrap();
        let argv = shlex::split(&cmd).unwrap();
        assert_eq!(argv[1..], paths[..]);
    }

    #[test]
    fn test_nul_byte_is_rejected() {
        let bad = "a\0b".to_string();
        assert!(compose(&profile(EditorKind::Code), &[bad], false, false).is_err());
    }
}
