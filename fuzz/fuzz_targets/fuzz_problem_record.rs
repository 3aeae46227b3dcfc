#![no_main]

use libfuzzer_sys::fuzz_target;
use problem_details::{ProblemDetails, ProblemDetailsRecord};

fuzz_target!(|data: &[u8]| {
    let Ok(record) = serde_json::from_slice::<ProblemDetailsRecord>(data) else {
        return;
    };
    // Anything accepted must survive a second trip through the wire shape unchanged.
    if let Ok(problem) = ProblemDetails::from_record(record) {
        let again = ProblemDetails::from_record(problem.to_record());
        assert_eq!(again.as_ref(), Ok(&problem));
    }
});
