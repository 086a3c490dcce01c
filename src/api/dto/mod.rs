//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `envelope` - the uniform `{status, message, data}` response wrapper
//! - `pagination` - page query parameters and the page payload
//! - `auth`, `user`, `board`, `game`, `review`, `game_question` - per-domain
//!   request/response DTOs

mod auth;
mod board;
mod envelope;
mod game;
mod game_question;
mod pagination;
mod review;
mod user;

pub use auth::{LoginRequest, RefreshTokenRequest, TokenResponse};
pub use board::{
    BoardDetailResponse, BoardReplyRequest, BoardReplyResponse, BoardReplyUpdateRequest,
    BoardSummaryResponse, BoardUpdateRequest, BoardUploadRequest, ReplyIdParams,
};
pub use envelope::Envelope;
pub use game::GameResponse;
pub use game_question::{
    AnswerIdParams, AnswerRequest, AnswerResponse, AnswerUpdateRequest, QuestionDetailResponse,
    QuestionListParams, QuestionSummaryResponse, QuestionUpdateRequest, QuestionUploadRequest,
};
pub use pagination::{ListParams, Page, PageParams};
pub use review::{ReviewDetailResponse, ReviewUpdateRequest, ReviewUploadRequest};
pub use user::{
    ChangePasswordRequest, FavoriteRequest, SignUpRequest, UpdateInfoRequest, UserProfileResponse,
};
