use std::io::{self, Write};

use backend_core::AppDescriptor;
use tracing::debug;

/// Writes the greeting line followed by the `Health:` line.
pub fn write_report<W: Write>(out: &mut W, app: &AppDescriptor) -> io::Result<()> {
    let health = app.health_check();
    writeln!(out, "{}", app.greet())?;
    writeln!(out, "Health: {health}")?;
    out.flush()?;

    debug!(stage = "report", service = app.name(), version = app.version(), status = %health.status, "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn render(app: &AppDescriptor) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, app).expect("writing to a vec cannot fail");
        String::from_utf8(buf).expect("report is utf-8")
    }

    #[test]
    fn prints_greeting_then_health() {
        let output = render(&AppDescriptor::new());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Hello from Backend Application v1.0.0");

        let record = lines[1]
            .strip_prefix("Health: ")
            .expect("second line starts with Health:");
        let value: Value = serde_json::from_str(record).expect("health record is json");
        assert_eq!(
            value,
            json!({
                "status": "healthy",
                "service": "Backend Application",
                "version": "1.0.0",
            })
        );
    }

    #[test]
    fn output_is_stable_across_runs() {
        let app = AppDescriptor::new();
        assert_eq!(render(&app), render(&app));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn surfaces_write_errors() {
        let err = write_report(&mut ClosedPipe, &AppDescriptor::new()).expect_err("pipe is closed");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
