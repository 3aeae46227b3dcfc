#![no_main]

use http::StatusCode;
use libfuzzer_sys::fuzz_target;
use problem_details::ProblemDetails;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut problem = ProblemDetails::new(StatusCode::BAD_REQUEST);
        let before = problem.clone();
        // A rejected assignment must not touch the object.
        if problem.set_type(Some(s)).is_err() {
            assert_eq!(problem, before);
        }
        if problem.set_instance(Some(s)).is_ok() {
            assert!(problem.instance().is_some());
        }
    }
});
