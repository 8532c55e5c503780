use super::*;
use std::sync::Mutex;

#[derive(Default)]
struct RecordingOps {
    calls: Mutex<Vec<&'static str>>,
    fail_enter: bool,
}

impl RecordingOps {
    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

impl TerminalOps for RecordingOps {
    fn enter(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("enter");
        if self.fail_enter {
            return Err(io::Error::new(io::ErrorKind::Other, "no tty"));
        }
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("leave");
        Ok(())
    }
}

#[test]
fn test_guard_leaves_on_drop() {
    let ops = Arc::new(RecordingOps::default());
    drop(TerminalGuard::with_ops(ops.clone()).unwrap());

    assert_eq!(ops.calls(), vec!["enter", "leave"]);
}

#[test]
fn test_restorer_runs_once_across_clones() {
    let ops = Arc::new(RecordingOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let first = guard.restorer();
    let second = guard.restorer();

    first.restore().unwrap();
    assert_eq!(ops.calls(), vec!["enter", "leave"]);

    second.restore().unwrap();
    drop(guard);

    assert_eq!(ops.calls(), vec!["enter", "leave"]);
}

#[test]
fn test_failed_enter_returns_error_without_leave() {
    let ops = Arc::new(RecordingOps {
        fail_enter: true,
        ..RecordingOps::default()
    });

    assert!(TerminalGuard::with_ops(ops.clone()).is_err());
    assert_eq!(ops.calls(), vec!["enter"]);
}
