use super::{Command, CommandError, Outcome};
use crate::core::session::Session;
use std::fs;

/// Changes the session's working directory. Takes exactly one path.
#[derive(Debug, Clone, Default)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Outcome, CommandError> {
        let target = match args {
            [] => {
                return Err(CommandError::MissingArgument {
                    command: "cd",
                    what: "path",
                })
            }
            [target] => target,
            _ => {
                return Err(CommandError::InvalidArguments(
                    "cd: too many arguments".to_string(),
                ))
            }
        };

        let path = session.resolve(target)?;
        let dir = fs::canonicalize(&path).map_err(CommandError::io("cd"))?;
        if !dir.is_dir() {
            return Err(CommandError::InvalidArguments(format!(
                "cd: not a directory: {}",
                target
            )));
        }

        session.set_cwd(dir);
        Ok(Outcome::Nothing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathExpander;
    use std::path::PathBuf;

    fn session_in(dir: &std::path::Path) -> Session {
        Session::new(fs::canonicalize(dir).unwrap())
    }

    #[test]
    fn test_cd_into_subdir() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        let mut session = session_in(tmp.path());

        let result = CdCommand.execute(&["sub".to_string()], &mut session);
        assert_eq!(result.unwrap(), Outcome::Nothing);
        assert_eq!(session.cwd(), fs::canonicalize(tmp.path().join("sub")).unwrap());
    }

    #[test]
    fn test_cd_parent_is_normalized() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        let mut session = session_in(&tmp.path().join("sub"));

        CdCommand.execute(&["..".to_string()], &mut session).unwrap();
        assert_eq!(session.cwd(), fs::canonicalize(tmp.path()).unwrap());
    }

    #[test]
    fn test_cd_nonexistent_keeps_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let mut session = session_in(tmp.path());
        let before = session.cwd().to_path_buf();

        let result = CdCommand.execute(&["no/such/dir".to_string()], &mut session);
        assert!(matches!(result, Err(CommandError::Io { command: "cd", .. })));
        assert_eq!(session.cwd(), before);
    }

    #[test]
    fn test_cd_onto_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("f"), "").unwrap();
        let mut session = session_in(tmp.path());
        let before = session.cwd().to_path_buf();

        let result = CdCommand.execute(&["f".to_string()], &mut session);
        assert!(matches!(result, Err(CommandError::InvalidArguments(_))));
        assert_eq!(session.cwd(), before);
    }

    #[test]
    fn test_cd_argument_count() {
        let mut session = Session::new(PathBuf::from("/"));

        assert!(matches!(
            CdCommand.execute(&[], &mut session),
            Err(CommandError::MissingArgument { command: "cd", .. })
        ));
        assert!(matches!(
            CdCommand.execute(&["a".to_string(), "b".to_string()], &mut session),
            Err(CommandError::InvalidArguments(_))
        ));
        assert_eq!(session.cwd(), PathBuf::from("/"));
    }

    #[test]
    fn test_cd_home() {
        let tmp = tempfile::tempdir().unwrap();
        let home = fs::canonicalize(tmp.path()).unwrap();
        let mut session = Session::new(PathBuf::from("/"))
            .with_path_expander(PathExpander::with_home(Some(home.clone())));

        CdCommand.execute(&["~".to_string()], &mut session).unwrap();
        assert_eq!(session.cwd(), home);
    }
}
