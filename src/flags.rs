use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<&'static str, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: &'static str,
    pub long: &'static str,
    pub description: &'static str,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn new(short: &'static str, long: &'static str, description: &'static str) -> Self {
        Flag {
            short,
            long,
            description,
            takes_value: false,
            value: None,
        }
    }

    fn with_value(mut self) -> Self {
        self.takes_value = true;
        self
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let flags = BTreeMap::from([
            ("help", Flag::new("-h", "--help", "Print this help message")),
            ("version", Flag::new("-v", "--version", "Show version information")),
            (
                "config",
                Flag::new("-c", "--config", "Read settings from this file").with_value(),
            ),
            ("quiet", Flag::new("-q", "--quiet", "Only log errors")),
            ("debug", Flag::new("-d", "--debug", "Enable debug logging")),
            (
                "plain",
                Flag::new("-p", "--plain", "Read lines without the line editor"),
            ),
        ]);

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == flag.short || arg == flag.long)
                .ok_or_else(|| ShellError::Usage(format!("Unknown argument {}", arg)))?;

            flag.value = if flag.takes_value {
                let value = args.next().ok_or_else(|| {
                    ShellError::Usage(format!("Flag {} requires a value", arg))
                })?;
                Some(value.clone())
            } else {
                Some("true".to_string())
            };
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&str> {
        self.flags.get(name).and_then(|f| f.value.as_deref())
    }

    pub fn print_help(&self) {
        println!("Usage: sprig [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            let long = if flag.takes_value {
                format!("{} <path>", flag.long)
            } else {
                flag.long.to_string()
            };
            println!("  {}, {:<17} {}", flag.short, long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Flags, ShellError> {
        let mut flags = Flags::new();
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        flags.parse(&args)?;
        Ok(flags)
    }

    #[test]
    fn test_no_flags() {
        let flags = parse(&[]).unwrap();
        assert!(!flags.is_set("plain"));
        assert!(!flags.is_set("debug"));
        assert_eq!(flags.get_value("config"), None);
    }

    #[test]
    fn test_short_and_long() {
        let flags = parse(&["-p", "--debug"]).unwrap();
        assert!(flags.is_set("plain"));
        assert!(flags.is_set("debug"));
        assert!(!flags.is_set("quiet"));
    }

    #[test]
    fn test_config_takes_value() {
        let flags = parse(&["--config", "/tmp/rc", "-q"]).unwrap();
        assert_eq!(flags.get_value("config"), Some("/tmp/rc"));
        assert!(flags.is_set("quiet"));
    }

    #[test]
    fn test_config_without_value() {
        assert!(matches!(parse(&["-c"]), Err(ShellError::Usage(_))));
    }

    #[test]
    fn test_unknown_argument() {
        assert!(matches!(parse(&["--frob"]), Err(ShellError::Usage(_))));
        assert!(matches!(parse(&["script.sh"]), Err(ShellError::Usage(_))));
    }
}
