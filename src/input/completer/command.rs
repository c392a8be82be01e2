use rustyline::completion::Pair;

/// Completes the command word against the builtin names.
#[derive(Debug, Clone, Default)]
pub struct CommandCompleter {
    commands: Vec<&'static str>,
}

impl CommandCompleter {
    pub fn new(mut commands: Vec<&'static str>) -> Self {
        commands.sort_unstable();
        commands.dedup();
        Self { commands }
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.binary_search_by(|probe| (*probe).cmp(name)).is_ok()
    }

    /// Every builtin sharing `partial` as a case-insensitive prefix, sorted.
    pub fn matches(&self, partial: &str) -> Vec<&'static str> {
        let partial = partial.to_lowercase();
        self.commands
            .iter()
            .copied()
            .filter(|cmd| cmd.to_lowercase().starts_with(&partial))
            .collect()
    }

    pub fn complete_command(&self, partial: &str) -> Vec<Pair> {
        self.matches(partial)
            .into_iter()
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect()
    }
}
