use thiserror::Error;

use crate::ids::CategoryId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unknown category: {0}")]
    UnknownCategory(CategoryId),
}
