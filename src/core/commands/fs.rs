//! Thin wrappers over filesystem calls, all relative to the session directory.

use super::{required, Command, CommandError, Outcome};
use crate::core::session::Session;
use std::fs::{self, File};

#[derive(Debug, Clone, Default)]
pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(&self, _args: &[String], session: &mut Session) -> Result<Outcome, CommandError> {
        Ok(Outcome::Print(session.cwd().display().to_string()))
    }
}

/// Lists entry names, sorted. An optional argument names another directory.
#[derive(Debug, Clone, Default)]
pub struct LsCommand;

impl Command for LsCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Outcome, CommandError> {
        let dir = match args.first() {
            Some(target) => session.resolve(target)?,
            None => session.cwd().to_path_buf(),
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir).map_err(CommandError::io("ls"))? {
            let entry = entry.map_err(CommandError::io("ls"))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        if names.is_empty() {
            return Ok(Outcome::Nothing);
        }
        names.sort();
        Ok(Outcome::Print(names.join("\n")))
    }
}

#[derive(Debug, Clone, Default)]
pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Outcome, CommandError> {
        let name = required(args, "mkdir", "folder name")?;
        let path = session.resolve(name)?;

        let mut builder = fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder.create(&path).map_err(CommandError::io("mkdir"))?;
        Ok(Outcome::Nothing)
    }
}

/// Creates an empty file, truncating one that already exists.
#[derive(Debug, Clone, Default)]
pub struct TouchCommand;

impl Command for TouchCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Outcome, CommandError> {
        let name = required(args, "touch", "file name")?;
        File::create(session.resolve(name)?).map_err(CommandError::io("touch"))?;
        Ok(Outcome::Nothing)
    }
}

/// Removes a file or an empty directory.
#[derive(Debug, Clone, Default)]
pub struct RmCommand;

impl Command for RmCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Outcome, CommandError> {
        let name = required(args, "rm", "file name")?;
        let path = session.resolve(name)?;

        let metadata = fs::symlink_metadata(&path).map_err(CommandError::io("rm"))?;
        let removed = if metadata.is_dir() {
            fs::remove_dir(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.map_err(CommandError::io("rm"))?;
        Ok(Outcome::Nothing)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatCommand;

impl Command for CatCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Outcome, CommandError> {
        let name = required(args, "cat", "file name")?;
        let data = fs::read(session.resolve(name)?).map_err(CommandError::io("cat"))?;

        if data.is_empty() {
            return Ok(Outcome::Nothing);
        }
        Ok(Outcome::Print(String::from_utf8_lossy(&data).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Session) {
        let tmp = tempfile::tempdir().unwrap();
        let session = Session::new(tmp.path().to_path_buf());
        (tmp, session)
    }

    fn arg(s: &str) -> Vec<String> {
        vec![s.to_string()]
    }

    fn io_kind(result: Result<Outcome, CommandError>) -> Option<ErrorKind> {
        match result {
            Err(CommandError::Io { source, .. }) => Some(source.kind()),
            _ => None,
        }
    }

    #[test]
    fn test_pwd_reports_session_dir() {
        let (tmp, mut session) = setup();
        assert_eq!(
            PwdCommand.execute(&[], &mut session).unwrap(),
            Outcome::Print(tmp.path().display().to_string())
        );
    }

    #[test]
    fn test_mkdir_then_ls() {
        let (_tmp, mut session) = setup();

        MkdirCommand.execute(&arg("X"), &mut session).unwrap();
        let listing = LsCommand.execute(&[], &mut session).unwrap();
        assert_eq!(listing, Outcome::Print("X".to_string()));
    }

    #[test]
    fn test_mkdir_twice_fails() {
        let (_tmp, mut session) = setup();

        MkdirCommand.execute(&arg("X"), &mut session).unwrap();
        let second = MkdirCommand.execute(&arg("X"), &mut session);
        assert_eq!(io_kind(second), Some(ErrorKind::AlreadyExists));
    }

    #[test]
    fn test_ls_sorted_and_empty() {
        let (_tmp, mut session) = setup();
        assert_eq!(LsCommand.execute(&[], &mut session).unwrap(), Outcome::Nothing);

        for name in ["b", "a", "c"] {
            TouchCommand.execute(&arg(name), &mut session).unwrap();
        }
        assert_eq!(
            LsCommand.execute(&[], &mut session).unwrap(),
            Outcome::Print("a\nb\nc".to_string())
        );
    }

    #[test]
    fn test_ls_other_dir() {
        let (tmp, mut session) = setup();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub").join("inner"), "x").unwrap();

        assert_eq!(
            LsCommand.execute(&arg("sub"), &mut session).unwrap(),
            Outcome::Print("inner".to_string())
        );
        assert_eq!(
            io_kind(LsCommand.execute(&arg("nope"), &mut session)),
            Some(ErrorKind::NotFound)
        );
    }

    #[test]
    fn test_touch_cat_rm_cat() {
        let (_tmp, mut session) = setup();

        TouchCommand.execute(&arg("F"), &mut session).unwrap();
        assert_eq!(CatCommand.execute(&arg("F"), &mut session).unwrap(), Outcome::Nothing);

        RmCommand.execute(&arg("F"), &mut session).unwrap();
        assert_eq!(
            io_kind(CatCommand.execute(&arg("F"), &mut session)),
            Some(ErrorKind::NotFound)
        );
    }

    #[test]
    fn test_cat_prints_contents() {
        let (tmp, mut session) = setup();
        fs::write(tmp.path().join("notes.txt"), "line one\nline two\n").unwrap();

        assert_eq!(
            CatCommand.execute(&arg("notes.txt"), &mut session).unwrap(),
            Outcome::Print("line one\nline two\n".to_string())
        );
    }

    #[test]
    fn test_touch_truncates() {
        let (tmp, mut session) = setup();
        fs::write(tmp.path().join("F"), "old").unwrap();

        TouchCommand.execute(&arg("F"), &mut session).unwrap();
        assert_eq!(fs::read(tmp.path().join("F")).unwrap().len(), 0);
    }

    #[test]
    fn test_rm_empty_dir() {
        let (tmp, mut session) = setup();
        fs::create_dir(tmp.path().join("D")).unwrap();

        RmCommand.execute(&arg("D"), &mut session).unwrap();
        assert!(!tmp.path().join("D").exists());
    }

    #[test]
    fn test_missing_arguments() {
        let (_tmp, mut session) = setup();

        let cases: Vec<(&dyn Command, &str)> = vec![
            (&MkdirCommand, "mkdir: missing folder name"),
            (&TouchCommand, "touch: missing file name"),
            (&RmCommand, "rm: missing file name"),
            (&CatCommand, "cat: missing file name"),
        ];
        for (command, message) in cases {
            let err = command.execute(&[], &mut session).unwrap_err();
            assert_eq!(err.to_string(), message);
        }
    }
}
