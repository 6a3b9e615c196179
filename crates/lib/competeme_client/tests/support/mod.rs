//! In-process mock of the Competeme backend for integration tests.
//!
//! Serves the REST surface the client consumes, counts per-path GET hits,
//! and exposes switches for scripted failure modes.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header::AUTHORIZATION};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;

use competeme_core::error::ErrorBody;
use competeme_core::models::activity::{ActivityEntry, NewActivity};
use competeme_core::models::auth::{
    AuthRequest, EmailResponse, RefreshRequest, RegisterRequest, Role, TokenClaims, TokenPair,
};
use competeme_core::models::challenge::{Challenge, NewChallenge, ProgressUpdate};
use competeme_core::models::friend::{FriendRequest, FriendRequestStatus, SendFriendRequest};
use competeme_core::models::stats::{StatsSummary, TopActivity};
use competeme_core::models::user::{ImageUpdate, UserProfile, UserSummary};

pub const JWT_SECRET: &[u8] = b"mock-backend-secret";
pub const KNOWN_EMAIL: &str = "ada@example.com";
pub const KNOWN_PASSWORD: &str = "open-sesame";

/// Mint a token for `sub` expiring `expires_in_secs` from now.
pub fn mint_token(sub: u64, expires_in_secs: i64) -> String {
    let now = Utc::now().timestamp();
    let claims = TokenClaims {
        sub: sub.to_string(),
        exp: now + expires_in_secs,
        iat: now,
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(JWT_SECRET),
    )
    .expect("encode token")
}

#[derive(Default)]
pub struct MockState {
    /// GET hits per logical path, e.g. `/users/3/challenges`.
    hits: Mutex<HashMap<String, usize>>,
    pub refresh_calls: AtomicUsize,
    pub fail_refresh: AtomicBool,
    /// Authorization headers observed on profile requests, in order.
    pub authorization_seen: Mutex<Vec<Option<String>>>,
    /// User ids whose profile answers 403.
    pub forbidden_users: Mutex<HashSet<u64>>,
    /// User ids whose profile answers 500.
    pub failing_users: Mutex<HashSet<u64>>,
}

impl MockState {
    fn hit(&self, path: String) {
        *self.hits.lock().unwrap().entry(path).or_insert(0) += 1;
    }

    pub fn hits_for(&self, path: &str) -> usize {
        self.hits.lock().unwrap().get(path).copied().unwrap_or(0)
    }
}

/// Bind an ephemeral port, serve the mock, return its base URL.
pub async fn spawn_backend(state: Arc<MockState>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("local addr");
    let app = router(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock backend");
    });
    format!("http://{addr}")
}

fn router(state: Arc<MockState>) -> Router {
    Router::new()
        .route("/api/v1/auth/authenticate", post(authenticate))
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/refresh-token", post(refresh))
        .route("/api/v1/auth/email", get(current_email))
        .route("/api/v1/users/search", get(search))
        .route("/api/v1/users/{user_id}/profile", get(profile))
        .route("/api/v1/users/{user_id}/image", put(update_image))
        .route(
            "/api/v1/users/{user_id}/activities/",
            get(list_activities).post(add_activity),
        )
        .route(
            "/api/v1/users/{user_id}/challenges/",
            get(list_challenges).post(create_challenge),
        )
        .route(
            "/api/v1/users/{user_id}/challenges/{challenge_id}/progress",
            post(add_progress),
        )
        .route("/api/v1/users/{user_id}/stats", get(stats_summary))
        .route("/api/v1/users/{user_id}/friends/", get(list_friends))
        .route(
            "/api/v1/users/{user_id}/friends/{friend_id}",
            delete(remove_friend),
        )
        .route(
            "/api/v1/users/{user_id}/friends/requests",
            get(list_requests).post(send_request),
        )
        .route(
            "/api/v1/users/{user_id}/friends/requests/{request_id}/accept",
            post(accept_request),
        )
        .route(
            "/api/v1/users/{user_id}/friends/requests/{request_id}/decline",
            post(decline_request),
        )
        .with_state(state)
}

fn error_body(error: &str, message: &str) -> Json<ErrorBody> {
    Json(ErrorBody {
        error: error.into(),
        message: message.into(),
    })
}

// ---------------------------------------------------------------------------
// Auth handlers
// ---------------------------------------------------------------------------

async fn authenticate(Json(body): Json<AuthRequest>) -> Response {
    if body.email == KNOWN_EMAIL && body.password == KNOWN_PASSWORD {
        Json(TokenPair {
            access_token: mint_token(7, 900),
            refresh_token: "refresh-0".into(),
        })
        .into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            error_body("not_found", "User not found"),
        )
            .into_response()
    }
}

async fn register(Json(body): Json<RegisterRequest>) -> Response {
    if body.password.len() < 8 {
        return (
            StatusCode::BAD_REQUEST,
            error_body("validation_error", "Password must be at least 8 characters"),
        )
            .into_response();
    }
    Json(TokenPair {
        access_token: mint_token(8, 900),
        refresh_token: "refresh-new".into(),
    })
    .into_response()
}

async fn refresh(State(state): State<Arc<MockState>>, Json(body): Json<RefreshRequest>) -> Response {
    let n = state.refresh_calls.fetch_add(1, Ordering::SeqCst) + 1;
    if state.fail_refresh.load(Ordering::SeqCst) {
        return (
            StatusCode::UNAUTHORIZED,
            error_body("unauthorized", "Invalid refresh token"),
        )
            .into_response();
    }
    if body.refresh_token.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            error_body("validation_error", "Missing refresh token"),
        )
            .into_response();
    }
    Json(TokenPair {
        access_token: mint_token(7, 900),
        refresh_token: format!("rotated-{n}"),
    })
    .into_response()
}

async fn current_email() -> Json<EmailResponse> {
    Json(EmailResponse {
        email: KNOWN_EMAIL.into(),
    })
}

// ---------------------------------------------------------------------------
// User handlers
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct SearchParams {
    query: String,
}

async fn search(Query(params): Query<SearchParams>) -> Json<Vec<UserSummary>> {
    Json(vec![UserSummary {
        id: 2,
        username: params.query,
        image_url: None,
    }])
}

async fn profile(
    State(state): State<Arc<MockState>>,
    Path(user_id): Path<u64>,
    headers: HeaderMap,
) -> Response {
    state.hit(format!("/users/{user_id}/profile"));
    state.authorization_seen.lock().unwrap().push(
        headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from),
    );
    if state.forbidden_users.lock().unwrap().contains(&user_id) {
        return (StatusCode::FORBIDDEN, error_body("forbidden", "Access denied")).into_response();
    }
    if state.failing_users.lock().unwrap().contains(&user_id) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_body("internal_error", "Internal server error"),
        )
            .into_response();
    }
    Json(sample_profile(user_id)).into_response()
}

async fn update_image(Path(user_id): Path<u64>, Json(image): Json<ImageUpdate>) -> Json<UserProfile> {
    let mut profile = sample_profile(user_id);
    profile.image_url = Some(image.image_url);
    Json(profile)
}

// ---------------------------------------------------------------------------
// Activity handlers
// ---------------------------------------------------------------------------

async fn list_activities(
    State(state): State<Arc<MockState>>,
    Path(user_id): Path<u64>,
) -> Json<Vec<ActivityEntry>> {
    state.hit(format!("/users/{user_id}/activities"));
    Json(vec![sample_activity(1)])
}

async fn add_activity(
    Path(_user_id): Path<u64>,
    Json(activity): Json<NewActivity>,
) -> Json<ActivityEntry> {
    Json(ActivityEntry {
        id: 99,
        title: activity.title,
        duration_minutes: activity.duration_minutes,
        date: Utc::now().date_naive(),
    })
}

// ---------------------------------------------------------------------------
// Challenge handlers
// ---------------------------------------------------------------------------

async fn list_challenges(
    State(state): State<Arc<MockState>>,
    Path(user_id): Path<u64>,
) -> Json<Vec<Challenge>> {
    state.hit(format!("/users/{user_id}/challenges"));
    Json(vec![sample_challenge(1, user_id)])
}

async fn create_challenge(
    Path(user_id): Path<u64>,
    Json(challenge): Json<NewChallenge>,
) -> Json<Challenge> {
    Json(Challenge {
        id: 99,
        title: challenge.title,
        description: challenge.description,
        goal: challenge.goal,
        progress: 0,
        unit: challenge.unit,
        participants: vec![user_id],
    })
}

async fn add_progress(
    Path((user_id, challenge_id)): Path<(u64, u64)>,
    Json(update): Json<ProgressUpdate>,
) -> Json<Challenge> {
    let mut challenge = sample_challenge(challenge_id, user_id);
    challenge.progress += update.amount;
    Json(challenge)
}

// ---------------------------------------------------------------------------
// Stats handler
// ---------------------------------------------------------------------------

async fn stats_summary(
    State(state): State<Arc<MockState>>,
    Path(user_id): Path<u64>,
) -> Json<StatsSummary> {
    state.hit(format!("/users/{user_id}/stats"));
    Json(StatsSummary {
        user_id,
        total_duration_minutes: 420,
        activity_count: 12,
        streak_days: 3,
        top_activities: vec![TopActivity {
            title: "running".into(),
            duration_minutes: 180,
        }],
    })
}

// ---------------------------------------------------------------------------
// Friend handlers
// ---------------------------------------------------------------------------

async fn list_friends(
    State(state): State<Arc<MockState>>,
    Path(user_id): Path<u64>,
) -> Json<Vec<UserSummary>> {
    state.hit(format!("/users/{user_id}/friends"));
    Json(vec![UserSummary {
        id: 2,
        username: "grace".into(),
        image_url: None,
    }])
}

async fn remove_friend(Path((_user_id, _friend_id)): Path<(u64, u64)>) -> StatusCode {
    StatusCode::OK
}

async fn list_requests(
    State(state): State<Arc<MockState>>,
    Path(user_id): Path<u64>,
) -> Json<Vec<FriendRequest>> {
    state.hit(format!("/users/{user_id}/friend-requests"));
    Json(vec![sample_request(11)])
}

async fn send_request(
    Path(_user_id): Path<u64>,
    Json(request): Json<SendFriendRequest>,
) -> Json<FriendRequest> {
    let mut sent = sample_request(12);
    sent.sender.id = request.target_id;
    Json(sent)
}

async fn accept_request(Path((_user_id, _request_id)): Path<(u64, u64)>) -> StatusCode {
    StatusCode::OK
}

async fn decline_request(Path((_user_id, _request_id)): Path<(u64, u64)>) -> StatusCode {
    StatusCode::OK
}

// ---------------------------------------------------------------------------
// Sample payloads
// ---------------------------------------------------------------------------

fn sample_profile(user_id: u64) -> UserProfile {
    UserProfile {
        id: user_id,
        username: "ada".into(),
        role: Role::User,
        image_url: None,
        date_joined: Utc::now(),
    }
}

fn sample_activity(id: u64) -> ActivityEntry {
    ActivityEntry {
        id,
        title: "running".into(),
        duration_minutes: 30,
        date: Utc::now().date_naive(),
    }
}

fn sample_challenge(id: u64, user_id: u64) -> Challenge {
    Challenge {
        id,
        title: "10k steps".into(),
        description: None,
        goal: 10_000,
        progress: 2_500,
        unit: "steps".into(),
        participants: vec![user_id],
    }
}

fn sample_request(id: u64) -> FriendRequest {
    FriendRequest {
        id,
        sender: UserSummary {
            id: 3,
            username: "linus".into(),
            image_url: None,
        },
        status: FriendRequestStatus::Pending,
    }
}
