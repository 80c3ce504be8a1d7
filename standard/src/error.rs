use near_sdk::FunctionError;
use thiserror::Error as ThisError;

use crate::TokenId;

pub type Result<T, E = TokenSignerError> = ::core::result::Result<T, E>;

#[derive(Debug, ThisError, FunctionError)]
pub enum TokenSignerError {
    #[error("predecessor is not the token owner")]
    NotTokenOwner,

    #[error("token '{0}' not found")]
    TokenNotFound(TokenId),
}
