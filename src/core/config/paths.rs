use std::path::PathBuf;

pub const RC_FILE: &str = ".sprigrc";
pub const HISTORY_FILE: &str = ".sprig_history";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: Option<PathBuf>,
    /// Set when the rc file was named explicitly; it must then exist.
    pub explicit: bool,
    pub history_path: Option<PathBuf>,
}

impl ConfigPaths {
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self::with_home(dirs::home_dir(), explicit)
    }

    pub fn with_home(home: Option<PathBuf>, explicit: Option<PathBuf>) -> Self {
        let history_path = home.as_ref().map(|home| home.join(HISTORY_FILE));
        match explicit {
            Some(path) => ConfigPaths {
                rc_path: Some(path),
                explicit: true,
                history_path,
            },
            None => ConfigPaths {
                rc_path: home.map(|home| home.join(RC_FILE)),
                explicit: false,
                history_path,
            },
        }
    }
}
