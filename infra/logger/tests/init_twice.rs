use rollcall_logger::{Logger, LoggerError};

#[test]
fn second_init_reports_subscriber_error() {
    let _guard = Logger::builder("first").init().expect("first init succeeds");

    let second = Logger::builder("second").init();
    assert!(matches!(second, Err(LoggerError::Subscriber(_))));
}

#[test]
fn no_outputs_is_an_invalid_configuration() {
    let result = Logger::builder("silent").console(false).init();
    assert!(matches!(result, Err(LoggerError::InvalidConfiguration(_))));
}
