use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{ErrorResponse, ValidatedJson};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{CreateUser, ListQuery, Role, UpdateUser, User};
use crate::query::{self, QueryOptions, Sort, SortDirection, SortField};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(shared_service)
}

/// OpenAPI paths for this router, to be nested under the mount point
/// by the serving application.
#[derive(utoipa::OpenApi)]
#[openapi(paths(list_users, create_user, get_user, update_user, delete_user))]
pub struct UsersApi;

/// Single-record envelope: `{"data": ...}`
#[derive(Debug, Serialize, ToSchema)]
pub struct DataResponse<T> {
    data: T,
}

/// Pagination metadata echoed back on list responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    limit: usize,
    offset: usize,
    total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<String>,
}

/// List envelope: `{"meta": {...}, "data": [...]}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ListUsersResponse {
    meta: ListMeta,
    data: Vec<User>,
}

/// Parse the sort parameters leniently: an unrecognized field means no
/// sort at all (not an error), an unrecognized direction falls back to
/// ascending.
fn parse_sort(params: &ListQuery) -> Option<Sort> {
    let field: SortField = params.sort_by.as_deref()?.parse().ok()?;
    let direction = params
        .order
        .as_deref()
        .and_then(|s| s.parse::<SortDirection>().ok())
        .unwrap_or_default();

    Some(Sort { field, direction })
}

/// List users with optional filters
///
/// GET /users?role=student&sortBy=name&order=asc&limit=10&offset=0
#[utoipa::path(
    get,
    path = "/",
    tag = "users",
    params(ListQuery),
    responses(
        (status = 200, description = "Filtered, sorted page of users", body = ListUsersResponse),
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Query(params): Query<ListQuery>,
) -> UserResult<Json<ListUsersResponse>> {
    let options = QueryOptions {
        role: params.role,
        sort: parse_sort(&params),
        limit: params.limit,
        offset: params.offset,
    };

    let result = service.list_users(options.clone()).await?;

    Ok(Json(ListUsersResponse {
        meta: ListMeta {
            limit: query::clamp_limit(options.limit),
            offset: query::clamp_offset(options.offset),
            total: result.total,
            role: options.role,
            sort_by: options.sort.map(|s| s.field.to_string()),
            order: options.sort.map(|s| s.direction.to_string()),
        },
        data: result.items,
    }))
}

/// Create a new user
///
/// POST /users
#[utoipa::path(
    post,
    path = "/",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "Created user", body = DataResponse<User>),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse),
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// Get a user by ID
///
/// GET /users/:id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = DataResponse<User>),
        (status = 404, description = "No user with this id", body = ErrorResponse),
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<Uuid>,
) -> UserResult<Json<DataResponse<User>>> {
    let user = service.get_user(id).await?;
    Ok(Json(DataResponse { data: user }))
}

/// Update a user
///
/// PUT /users/:id
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "Updated user", body = DataResponse<User>),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 404, description = "No user with this id", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse),
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> UserResult<Json<DataResponse<User>>> {
    let user = service.update_user(id, input).await?;
    Ok(Json(DataResponse { data: user }))
}

/// Delete a user
///
/// DELETE /users/:id
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "No user with this id", body = ErrorResponse),
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<Uuid>,
) -> UserResult<impl IntoResponse> {
    service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
