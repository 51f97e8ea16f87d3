use utoipa::OpenApi;

/// Users API documentation
///
/// The domain crate documents its own routes relative to the router
/// root; they are nested here under the mount point used in `main`.
#[derive(OpenApi)]
#[openapi(
    nest((path = "/api/users", api = domain_users::handlers::UsersApi)),
    components(schemas(
        domain_users::User,
        domain_users::Role,
        domain_users::CreateUser,
        domain_users::UpdateUser,
        axum_helpers::ErrorResponse,
        axum_helpers::ErrorBody,
    )),
    tags((name = "users", description = "User management operations"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_covers_all_user_endpoints() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        let collection = paths
            .get("/api/users/")
            .expect("collection path missing from OpenAPI document");
        assert!(collection.get.is_some());
        assert!(collection.post.is_some());

        let item = paths
            .get("/api/users/{id}")
            .expect("item path missing from OpenAPI document");
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
    }
}
