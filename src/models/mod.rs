mod board;
mod favorite;
mod game;
mod game_question;
mod review;
mod user;

pub use board::{Board, BoardReply, NewBoard, NewBoardReply, UpdateBoard};
pub use favorite::{Favorite, NewFavorite};
pub use game::Game;
pub use game_question::{
    GameQuestion, GameQuestionAnswer, NewGameQuestion, NewGameQuestionAnswer, UpdateGameQuestion,
};
pub use review::{NewReview, Review, UpdateReview};
pub use user::{NewUser, UpdateProfile, User};
