use cheerpost_cli::CheerCliApp;
use cheerpost_core::Config;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, OnceLock};

struct CaptureLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

fn logger() -> &'static CaptureLogger {
    static LOGGER: OnceLock<CaptureLogger> = OnceLock::new();
    let logger = LOGGER.get_or_init(|| CaptureLogger {
        lines: Mutex::new(Vec::new()),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
    logger
}

fn logged(level: Level, needle: &str) -> bool {
    logger()
        .lines
        .lock()
        .unwrap()
        .iter()
        .any(|(l, line)| *l == level && line.contains(needle))
}

#[test]
fn session_emits_the_three_diagnostic_lines() {
    logger();
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_root(dir.path()).unwrap();

    let mut app = CheerCliApp::new(&config, "/src/modules/posts/index.html").unwrap();
    app.initialize();
    assert!(logged(Level::Info, "current module: /src/modules/posts/index.html"));

    app.run("1\nlog me please\n3\n6\n../stats/index.html\n7\n".as_bytes())
        .unwrap();

    assert!(logged(Level::Info, "log me please"));
    assert!(logged(Level::Error, "non-ASCII"));
    assert!(logged(Level::Info, "current module: /src/modules/stats/index.html"));
}
