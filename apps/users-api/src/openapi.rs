use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Users API",
        version = "0.1.0",
        description = "Create, list, read, update and delete user records with unique emails"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = domain_users::handlers::URL, api = domain_users::ApiDoc)
    )
)]
pub struct ApiDoc;
