// SPDX-License-Identifier: MIT

use squadup_core::error::AppError;

#[test]
fn test_gateway_message_classification_permission() {
    let err = AppError::from_gateway_message(
        "status: PermissionDenied, message: \"Missing or insufficient permissions.\"".to_string(),
    );
    assert!(matches!(err, AppError::PermissionDenied(_)));

    let err = AppError::from_gateway_message("status: Unauthenticated".to_string());
    assert!(matches!(err, AppError::PermissionDenied(_)));
}

#[test]
fn test_gateway_message_classification_not_found() {
    let err = AppError::from_gateway_message(
        "status: NotFound, message: \"Document not found\"".to_string(),
    );
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn test_gateway_message_classification_fallback() {
    let err = AppError::from_gateway_message("status: Unavailable, transport error".to_string());
    assert!(matches!(err, AppError::Database(_)));

    let err = AppError::from_gateway_message("connection reset".to_string());
    assert!(matches!(err, AppError::Database(_)));
}
