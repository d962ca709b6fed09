/// Non-fatal diagnostics
///
/// Statement compilation can drop individual statements without aborting
/// the rest of the component. Each dropped statement is recorded here as a
/// structured entry the caller can inspect or report.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A propCall statement carried no "calls" reference.
    MissingCallsReference { event: String },
    /// A propCall statement referenced a prop with no definition.
    UnknownPropReference { event: String, prop: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingCallsReference { event } => {
                write!(f, "event \"{event}\": no prop referenced under the \"calls\" field")
            }
            Diagnostic::UnknownPropReference { event, prop } => {
                write!(f, "event \"{event}\": no prop definition was found for \"{prop}\"")
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    pub fn warn(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_entries_in_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warn(Diagnostic::MissingCallsReference { event: "onOpen".into() });
        diagnostics.warn(Diagnostic::UnknownPropReference {
            event: "onClose".into(),
            prop: "onClose".into(),
        });

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(
            diagnostics.entries()[0],
            Diagnostic::MissingCallsReference { event: "onOpen".into() }
        );
        assert!(diagnostics.entries()[1].to_string().contains("onClose"));
    }
}
