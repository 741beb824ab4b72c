use async_graphql::connection::CursorType;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::PageWindow;

const PREFIX: &str = "cursor:";

/// Opaque connection cursor carrying a row's primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCursor(pub i32);

impl CursorType for RowCursor {
    type Error = AppError;

    fn decode_cursor(s: &str) -> Result<Self, Self::Error> {
        let invalid =
            || AppError::bad_request(ErrorCode::BadRequest, format!("invalid cursor '{s}'"));

        let raw = STANDARD.decode(s).map_err(|_| invalid())?;
        let text = String::from_utf8(raw).map_err(|_| invalid())?;
        text.strip_prefix(PREFIX)
            .and_then(|id| id.parse::<i32>().ok())
            .map(RowCursor)
            .ok_or_else(invalid)
    }

    fn encode_cursor(&self) -> String {
        STANDARD.encode(format!("{PREFIX}{}", self.0))
    }
}

/// Translate validated connection arguments into a keyset window.
pub fn window(
    after: Option<RowCursor>,
    before: Option<RowCursor>,
    first: Option<usize>,
    last: Option<usize>,
) -> PageWindow {
    PageWindow {
        after: after.map(|c| c.0),
        before: before.map(|c| c.0),
        first: first.map(|n| n as u64),
        last: last.map(|n| n as u64),
    }
}
