use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<&'static str, Flag>,
    positional: Vec<String>,
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
        Self {
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

    fn matches(&self, arg: &str) -> bool {
        arg == self.short || arg == self.long
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let flags = [
            ("help", Flag::new("-h", "--help", "Print this help message")),
            ("version", Flag::new("-v", "--version", "Show version information")),
            ("debug", Flag::new("-d", "--debug", "Enable debug logging on stderr")),
            (
                "config",
                Flag::new("-c", "--config", "Run commands from this file before the first line").with_value(),
            ),
        ]
        .into_iter()
        .collect();

        Flags {
            flags,
            positional: Vec::new(),
        }
    }

    /// Options may appear anywhere; everything else is positional.
    /// A lone `-` or anything after `--` is positional too.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            if arg == "--" {
                self.positional.extend(args.by_ref().cloned());
                break;
            }
            if !arg.starts_with('-') || arg == "-" {
                self.positional.push(arg.clone());
                continue;
            }

            let flag = self
                .flags
                .values_mut()
                .find(|flag| flag.matches(arg))
                .ok_or_else(|| ShellError::Flag(format!("unknown option {}", arg)))?;

            flag.value = if flag.takes_value {
                let value = args
                    .next()
                    .ok_or_else(|| ShellError::Flag(format!("Flag {} requires a value", arg)))?;
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

    /// The batch script, if one was given. More than one is a usage error.
    pub fn script(&self) -> Result<Option<&str>, ShellError> {
        match self.positional.as_slice() {
            [] => Ok(None),
            [script] => Ok(Some(script.as_str())),
            _ => Err(ShellError::Usage),
        }
    }

    pub fn print_help(&self) {
        println!("Usage: sbsh [OPTIONS] [SCRIPT]");
        println!("\nWithout SCRIPT, commands are read interactively.");
        println!("\nOptions:");
        for flag in self.flags.values() {
            let long = if flag.takes_value {
                format!("{} <file>", flag.long)
            } else {
                flag.long.to_string()
            };
            println!("  {}, {:<17} {}", flag.short, long, flag.description);
        }
    }
}
