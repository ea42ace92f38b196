//! Common assertion macros for stacklint tests

/// Assert that linting a stack succeeded
#[macro_export]
macro_rules! assert_lint_ok {
    ($result:expr) => {
        if let Some(failure) = &$result.failure {
            panic!("Expected lint to pass, but got: {}", failure);
        }
    };
}

/// Assert that linting failed on `resource` with a message containing `pattern`
#[macro_export]
macro_rules! assert_lint_error {
    ($result:expr, $resource:expr, $pattern:expr) => {
        assert!(!$result.success, "Expected lint error, but lint succeeded");
        assert_eq!($result.resource_name(), Some($resource), "Lint error tagged with wrong resource");
        let message = $result.message().unwrap_or_default();
        assert!(
            message.contains($pattern),
            "Expected error containing '{}', but got: {}",
            $pattern,
            message
        );
    };
}

/// Assert that the stack failed to parse
#[macro_export]
macro_rules! assert_parse_error {
    ($result:expr) => {
        assert!($result.is_parse_error(), "Expected parse error, but got: {:?}", $result.failure);
    };
    ($result:expr, $pattern:expr) => {
        assert!($result.is_parse_error(), "Expected parse error, but got: {:?}", $result.failure);
        let message = $result.message().unwrap_or_default();
        assert!(
            message.contains($pattern),
            "Expected error containing '{}', but got: {}",
            $pattern,
            message
        );
    };
}
