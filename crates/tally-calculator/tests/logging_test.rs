use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tally_calculator::{Calculator, Operation};
use tracing_subscriber::fmt::MakeWriter;

/// In-memory sink for formatted log lines
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap().lines().map(str::to_string).collect()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(run: impl FnOnce(&mut Calculator)) -> Vec<String> {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, || run(&mut Calculator::new()));
    logs.lines()
}

#[test]
fn direct_methods_log_each_calculation() {
    let lines = capture(|calc| {
        calc.add(5.0, 3.0);
        calc.subtract(10.0, 4.0);
        calc.multiply(6.0, 7.0);
        calc.divide(20.0, 5.0).unwrap();
    });

    assert_eq!(lines.len(), 4);
    for (line, operation) in lines.iter().zip(Operation::ALL) {
        assert!(line.contains("DEBUG"), "{line}");
        assert!(line.contains("calculation complete"), "{line}");
        assert!(line.contains(&format!("operation={operation}")), "{line}");
    }
    assert!(lines[2].contains("value=42.0"), "{}", lines[2]);
}

#[test]
fn calculate_logs_once_per_call() {
    let lines = capture(|calc| {
        calc.calculate(Operation::Add, 1.0, 2.0).unwrap();
    });
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("operation=add"), "{}", lines[0]);
}

#[test]
fn division_by_zero_is_not_logged() {
    let lines = capture(|calc| {
        assert!(calc.divide(1.0, 0.0).is_err());
        assert!(calc.calculate(Operation::Divide, 1.0, 0.0).is_err());
    });
    assert!(lines.is_empty(), "{lines:?}");
}
