use thiserror::Error;

/// Domain failures the CLI wants to tell apart from generic store errors.
///
/// Missing rows are not errors: reads return `Option`, deletes return `bool`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoError {
    #[error("企業の登録上限（{limit}社）に達しました")]
    LimitExceeded { limit: usize },

    #[error("ステータス「{name}」は既に登録されています")]
    DuplicateName { name: String },
}
