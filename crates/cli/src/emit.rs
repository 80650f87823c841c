use std::io::{self, Stdout, Write};

/// Writes the tab-separated data lines (ROW / TABLE / CHECKPOINT) that form
/// the stdout contract. Diagnostics never go through here; they reach
/// stderr via the tracing layer.
pub struct Emitter<W> {
    out: W,
}

impl Emitter<Stdout> {
    pub fn stdout() -> Self {
        Emitter { out: io::stdout() }
    }
}

impl<W: Write> Emitter<W> {
    pub fn row(&mut self, timestamp: &str, formatted: &str) -> io::Result<()> {
        writeln!(self.out, "ROW\t{timestamp}\t{formatted}")
    }

    pub fn table(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "TABLE\t{name}")
    }

    pub fn checkpoint(&mut self, value: &str) -> io::Result<()> {
        writeln!(self.out, "CHECKPOINT\t{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture() -> Emitter<Vec<u8>> {
        Emitter { out: Vec::new() }
    }

    #[test]
    fn test_row_line_shape() {
        let mut emitter = capture();
        emitter.row("3", r#"{"id":3,"name":"c"}"#).unwrap();
        assert_eq!(
            String::from_utf8(emitter.out).unwrap(),
            "ROW\t3\t{\"id\":3,\"name\":\"c\"}\n"
        );
    }

    #[test]
    fn test_table_and_checkpoint_lines() {
        let mut emitter = capture();
        emitter.table("users").unwrap();
        emitter.checkpoint("3").unwrap();
        assert_eq!(
            String::from_utf8(emitter.out).unwrap(),
            "TABLE\tusers\nCHECKPOINT\t3\n"
        );
    }
}
