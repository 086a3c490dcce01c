//! Game question handlers. Mirrors the board surface, scoped to a game.

use axum::extract::{Path, State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::QUESTION_TAG;
use crate::api::dto::{
    AnswerIdParams, AnswerRequest, AnswerResponse, AnswerUpdateRequest, Envelope, Page,
    QuestionDetailResponse, QuestionListParams, QuestionSummaryResponse, QuestionUpdateRequest,
    QuestionUploadRequest,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::{ValidatedJson, ValidatedQuery};

/// Creates the game question routes
///
/// # Routes
/// - `POST /upload` - Ask a question about a game
/// - `GET /{id}` - Question detail with answers
/// - `GET /list?game_id=` - Questions of a game
/// - `PUT /update` - Update a question (author only)
/// - `DELETE /{id}` - Delete a question (author only)
/// - `POST /answer` - Answer a question
/// - `PUT /answer` - Update an answer (author only)
/// - `DELETE /answer?id=` - Delete an answer (author only)
pub fn question_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(upload_question))
        .routes(routes!(list_questions))
        .routes(routes!(update_question))
        .routes(routes!(get_question, delete_question))
        .routes(routes!(add_answer, update_answer, delete_answer))
}

/// POST /question/upload - Ask a question about a game
#[utoipa::path(
    post,
    path = "/upload",
    tag = QUESTION_TAG,
    request_body = QuestionUploadRequest,
    responses(
        (status = 200, description = "Question uploaded", body = Envelope<QuestionDetailResponse>),
        (status = 400, description = "Game does not exist")
    ),
    security(("bearerAuth" = []))
)]
async fn upload_question(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<QuestionUploadRequest>,
) -> AppResult<Envelope<QuestionDetailResponse>> {
    let question = state
        .services
        .game_questions
        .upload(&auth.login_id, payload.game_id, payload.title, payload.content)
        .await?;
    Ok(Envelope::ok(
        "The question has been uploaded.",
        QuestionDetailResponse::from_parts(question, Vec::new()),
    ))
}

/// GET /question/{id} - Question detail with answers
#[utoipa::path(
    get,
    path = "/{id}",
    tag = QUESTION_TAG,
    params(("id" = i32, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question detail", body = Envelope<QuestionDetailResponse>),
        (status = 400, description = "Question does not exist")
    )
)]
async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Envelope<QuestionDetailResponse>> {
    let (question, answers) = state.services.game_questions.get_detail(id).await?;
    Ok(Envelope::ok(
        "Question detail.",
        QuestionDetailResponse::from_parts(question, answers),
    ))
}

/// GET /question/list?game_id= - Questions of a game
#[utoipa::path(
    get,
    path = "/list",
    tag = QUESTION_TAG,
    params(QuestionListParams),
    responses(
        (status = 200, description = "Paginated questions", body = Envelope<Page<QuestionSummaryResponse>>),
        (status = 400, description = "Game does not exist")
    )
)]
async fn list_questions(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<QuestionListParams>,
) -> AppResult<Envelope<Page<QuestionSummaryResponse>>> {
    let page_params = params.page_params();
    let (items, total) = state
        .services
        .game_questions
        .list_by_game(params.game_id, page_params.offset(), page_params.limit())
        .await?;

    if total == 0 {
        return Ok(Envelope::message("No questions for this game yet."));
    }

    let page = Page::new(
        items
            .into_iter()
            .map(QuestionSummaryResponse::from)
            .collect(),
        &page_params,
        total as u64,
    );
    Ok(Envelope::ok("Question list for the game.", page))
}

/// PUT /question/update - Update a question
#[utoipa::path(
    put,
    path = "/update",
    tag = QUESTION_TAG,
    request_body = QuestionUpdateRequest,
    responses(
        (status = 200, description = "Question updated"),
        (status = 400, description = "Question missing or not the author")
    ),
    security(("bearerAuth" = []))
)]
async fn update_question(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<QuestionUpdateRequest>,
) -> AppResult<Envelope<()>> {
    state
        .services
        .game_questions
        .update(&auth.login_id, payload.id, payload.title, payload.content)
        .await?;
    Ok(Envelope::message("The question has been updated."))
}

/// DELETE /question/{id} - Delete a question
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = QUESTION_TAG,
    params(("id" = i32, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question deleted"),
        (status = 400, description = "Question missing or not the author")
    ),
    security(("bearerAuth" = []))
)]
async fn delete_question(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Envelope<()>> {
    state
        .services
        .game_questions
        .delete(&auth.login_id, id)
        .await?;
    Ok(Envelope::message("The question has been deleted."))
}

/// POST /question/answer - Answer a question
#[utoipa::path(
    post,
    path = "/answer",
    tag = QUESTION_TAG,
    request_body = AnswerRequest,
    responses(
        (status = 200, description = "Answer added", body = Envelope<AnswerResponse>),
        (status = 400, description = "Question does not exist")
    ),
    security(("bearerAuth" = []))
)]
async fn add_answer(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<AnswerRequest>,
) -> AppResult<Envelope<AnswerResponse>> {
    let answer = state
        .services
        .game_questions
        .add_answer(&auth.login_id, payload.question_id, payload.content)
        .await?;
    Ok(Envelope::ok(
        "The answer has been added.",
        AnswerResponse::from(answer),
    ))
}

/// PUT /question/answer - Update an answer
#[utoipa::path(
    put,
    path = "/answer",
    tag = QUESTION_TAG,
    request_body = AnswerUpdateRequest,
    responses(
        (status = 200, description = "Answer updated"),
        (status = 400, description = "Answer missing or not the author")
    ),
    security(("bearerAuth" = []))
)]
async fn update_answer(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<AnswerUpdateRequest>,
) -> AppResult<Envelope<()>> {
    state
        .services
        .game_questions
        .update_answer(&auth.login_id, payload.id, &payload.content)
        .await?;
    Ok(Envelope::message("The answer has been updated."))
}

/// DELETE /question/answer?id= - Delete an answer
#[utoipa::path(
    delete,
    path = "/answer",
    tag = QUESTION_TAG,
    params(AnswerIdParams),
    responses(
        (status = 200, description = "Answer deleted"),
        (status = 400, description = "Answer missing or not the author")
    ),
    security(("bearerAuth" = []))
)]
async fn delete_answer(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedQuery(params): ValidatedQuery<AnswerIdParams>,
) -> AppResult<Envelope<()>> {
    state
        .services
        .game_questions
        .delete_answer(&auth.login_id, params.id)
        .await?;
    Ok(Envelope::message("The answer has been deleted."))
}
