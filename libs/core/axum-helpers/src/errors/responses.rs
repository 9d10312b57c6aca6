//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

/// 400 for a request body: a failed field rule or a rejected business rule
#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation failed or rejected by a business rule",
    content_type = "application/json",
    examples(
        ("Validation" = (
            summary = "A field is missing, mistyped or empty",
            value = json!({
                "code": 1001,
                "error": "VALIDATION_ERROR",
                "message": "Request validation failed",
                "details": {
                    "name": [{
                        "code": "length",
                        "message": "The name is required",
                        "params": {"min": 1, "value": ""}
                    }]
                }
            })
        )),
        ("BusinessRule" = (
            summary = "The request conflicts with existing data",
            value = json!({
                "code": 1006,
                "error": "BAD_REQUEST",
                "message": "Email already exists"
            })
        ))
    )
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid ID",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_ID",
        "message": "Invalid ID format: abc"
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "User not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
