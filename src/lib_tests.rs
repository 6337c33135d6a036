use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_ERROR);
}

#[test]
fn error_type_is_reexported() {
    let result: Result<()> = Err(PlotlyLightError::EmptyData);
    assert_eq!(result.unwrap_err().to_string(), "Empty data");
}
