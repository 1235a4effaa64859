use std::fmt;

/// The argument a control word carries, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlArg {
    Text(String),
    Int(i64),
}

impl fmt::Display for ControlArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlArg::Text(s) => f.write_str(s),
            ControlArg::Int(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for ControlArg {
    fn from(s: &str) -> Self {
        ControlArg::Text(s.to_string())
    }
}

impl From<i64> for ControlArg {
    fn from(n: i64) -> Self {
        ControlArg::Int(n)
    }
}

/// A single RTF control-word command.
///
/// `emphasize` marks the word as an ignorable destination (`\*`), which
/// readers that do not know the word skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlWord {
    pub name: String,
    pub arg: Option<ControlArg>,
    pub emphasize: bool,
}

impl ControlWord {
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arg: None,
            emphasize: false,
        }
    }

    pub fn with_arg(name: impl Into<String>, arg: impl Into<ControlArg>, emphasize: bool) -> Self {
        Self {
            name: name.into(),
            arg: Some(arg.into()),
            emphasize,
        }
    }
}

impl fmt::Display for ControlWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.emphasize {
            f.write_str("\\*")?;
        }
        write!(f, "\\{}", self.name)?;
        if let Some(arg) = &self.arg {
            write!(f, "{}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_rtf_syntax() {
        assert_eq!(ControlWord::bare("par").to_string(), "\\par");
        assert_eq!(ControlWord::with_arg("q", "c", false).to_string(), "\\qc");
        assert_eq!(ControlWord::with_arg("sb", 240i64, false).to_string(), "\\sb240");
        assert_eq!(ControlWord::with_arg("fi", -360i64, false).to_string(), "\\fi-360");
        assert_eq!(
            ControlWord::with_arg("shpwr", 3i64, true).to_string(),
            "\\*\\shpwr3"
        );
    }
}
