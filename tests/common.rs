// Shared helpers for the integration suites.

use sjavac::ErrorKind;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Assert that a program verifies cleanly.
pub fn assert_valid(source: &str) {
    init_logs();
    if let Err(e) = sjavac::verify(source) {
        panic!("expected a valid program, got: {e}");
    }
}

/// Assert that verification fails with the given taxonomy kind.
pub fn assert_fails_with(source: &str, kind: ErrorKind) {
    init_logs();
    match sjavac::verify(source) {
        Ok(()) => panic!("expected {kind:?}, but the program verified"),
        Err(err) => {
            let got = err
                .kind()
                .expect("expected a validation failure, got an IO error");
            assert_eq!(got, kind, "wrong error kind for: {err}");
        }
    }
}
