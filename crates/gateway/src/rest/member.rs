//! Member REST endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use roster_members::{Member, MemberFilter, MemberPayload, MemberRepo};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{ErrorResponse, GatewayError, GatewayResult};
use crate::state::GatewayState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: i64,
    pub first_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Body of create and update requests.
///
/// Absent or null fields are read as empty strings so that they surface as
/// validation failures rather than extractor rejections.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListMembersQuery {
    /// Substring the first name must contain
    pub first_name: Option<String>,
    /// Substring the address must contain
    pub address: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub id: i64,
    pub message: String,
}

impl MessageResponse {
    fn new(id: i64, message: &str) -> Self {
        Self {
            id,
            message: message.to_string(),
        }
    }
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            first_name: member.first_name,
            email: member.email,
            phone: member.phone,
            address: member.address,
        }
    }
}

impl From<MemberRequest> for MemberPayload {
    fn from(request: MemberRequest) -> Self {
        MemberPayload::new(
            request.first_name.unwrap_or_default(),
            request.email.unwrap_or_default(),
            request.phone_number.unwrap_or_default(),
            request.address.unwrap_or_default(),
        )
    }
}

impl From<ListMembersQuery> for MemberFilter {
    fn from(query: ListMembersQuery) -> Self {
        MemberFilter {
            first_name: query.first_name,
            address: query.address,
        }
    }
}

/// Create member routes
pub fn create_member_routes<R>() -> Router<Arc<GatewayState<R>>>
where
    R: MemberRepo + 'static,
{
    Router::new()
        .route(
            "/api/member",
            get(list_members::<R>).post(create_member::<R>),
        )
        .route(
            "/api/member/:id",
            get(get_member::<R>)
                .put(update_member::<R>)
                .delete(delete_member::<R>),
        )
}

#[utoipa::path(
    post,
    path = "/api/member",
    tag = "members",
    request_body = MemberRequest,
    responses(
        (status = 200, description = "Member created", body = MessageResponse),
        (status = 400, description = "Invalid member payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_member<R>(
    State(state): State<Arc<GatewayState<R>>>,
    Json(request): Json<MemberRequest>,
) -> GatewayResult<Json<MessageResponse>>
where
    R: MemberRepo + 'static,
{
    let member = state.member_service().create(request.into()).await?;

    Ok(Json(MessageResponse::new(member.id, "Member created successfully")))
}

#[utoipa::path(
    get,
    path = "/api/member/{id}",
    tag = "members",
    params(
        ("id" = i64, Path, description = "Member id")
    ),
    responses(
        (status = 200, description = "Member details", body = MemberResponse),
        (status = 404, description = "Member not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_member<R>(
    State(state): State<Arc<GatewayState<R>>>,
    Path(id): Path<i64>,
) -> GatewayResult<Json<MemberResponse>>
where
    R: MemberRepo + 'static,
{
    let member = state
        .member_service()
        .get(id)
        .await?
        .ok_or_else(|| GatewayError::NotFound("Member not found".to_string()))?;

    Ok(Json(MemberResponse::from(member)))
}

#[utoipa::path(
    get,
    path = "/api/member",
    tag = "members",
    params(ListMembersQuery),
    responses(
        (status = 200, description = "Members matching the filters", body = Vec<MemberResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_members<R>(
    State(state): State<Arc<GatewayState<R>>>,
    Query(query): Query<ListMembersQuery>,
) -> GatewayResult<Json<Vec<MemberResponse>>>
where
    R: MemberRepo + 'static,
{
    let members = state.member_service().list(&query.into()).await?;

    Ok(Json(members.into_iter().map(MemberResponse::from).collect()))
}

#[utoipa::path(
    put,
    path = "/api/member/{id}",
    tag = "members",
    params(
        ("id" = i64, Path, description = "Member id")
    ),
    request_body = MemberRequest,
    responses(
        (status = 200, description = "Member updated", body = MessageResponse),
        (status = 400, description = "Invalid member payload", body = ErrorResponse),
        (status = 404, description = "Member not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_member<R>(
    State(state): State<Arc<GatewayState<R>>>,
    Path(id): Path<i64>,
    Json(request): Json<MemberRequest>,
) -> GatewayResult<Json<MessageResponse>>
where
    R: MemberRepo + 'static,
{
    let member = state.member_service().update(id, request.into()).await?;

    Ok(Json(MessageResponse::new(member.id, "Member updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/member/{id}",
    tag = "members",
    params(
        ("id" = i64, Path, description = "Member id")
    ),
    responses(
        (status = 200, description = "Member deleted", body = MessageResponse),
        (status = 404, description = "Member not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_member<R>(
    State(state): State<Arc<GatewayState<R>>>,
    Path(id): Path<i64>,
) -> GatewayResult<Json<MessageResponse>>
where
    R: MemberRepo + 'static,
{
    state.member_service().delete(id).await?;

    Ok(Json(MessageResponse::new(id, "Member deleted successfully")))
}
