use strum::Display;
use thiserror::Error;

use crate::http_client::{self, StatusCode};

#[derive(Debug, Error)]
pub enum TaskClientError {
    #[error("{context}: `{source}`")]
    Request {
        context: &'static str,
        #[source]
        source: http_client::Error,
    },
    #[error("{context}: status code not {expected}, it was {status}")]
    UnexpectedStatus {
        context: &'static str,
        expected: StatusCode,
        status: StatusCode,
    },
    #[error("{context}: `{source}`")]
    Decode {
        context: &'static str,
        #[source]
        source: http_client::Error,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum TaskClientErrorKind {
    Request,
    Decode,
}

impl TaskClientError {
    pub fn kind(&self) -> TaskClientErrorKind {
        match self {
            TaskClientError::Request { .. } | TaskClientError::UnexpectedStatus { .. } => {
                TaskClientErrorKind::Request
            }
            TaskClientError::Decode { .. } => TaskClientErrorKind::Decode,
        }
    }

    pub(crate) fn request(context: &'static str) -> impl FnOnce(http_client::Error) -> Self {
        move |source| TaskClientError::Request { context, source }
    }

    pub(crate) fn decode(context: &'static str) -> impl FnOnce(http_client::Error) -> Self {
        move |source| TaskClientError::Decode { context, source }
    }

    pub(crate) fn expect_status(
        context: &'static str,
        expected: StatusCode,
        status: StatusCode,
    ) -> Result<(), Self> {
        if status == expected {
            Ok(())
        } else {
            Err(TaskClientError::UnexpectedStatus {
                context,
                expected,
                status,
            })
        }
    }
}
