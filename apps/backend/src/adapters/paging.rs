//! Keyset window over a primary-key ordered `Select`.
//!
//! Relay connections page over table order; the cursor is the row's primary
//! key, so a window is a pair of exclusive bounds plus head/tail limits.

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};

/// Window parameters, already validated by the GraphQL layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageWindow {
    /// Exclusive lower bound (primary key of the `after` cursor).
    pub after: Option<i32>,
    /// Exclusive upper bound (primary key of the `before` cursor).
    pub before: Option<i32>,
    /// Keep at most this many rows from the head of the window.
    pub first: Option<u64>,
    /// Keep at most this many rows from the tail of the window.
    pub last: Option<u64>,
}

impl PageWindow {
    pub fn first_after(n: u64, after: i32) -> Self {
        Self {
            first: Some(n),
            after: Some(after),
            ..Self::default()
        }
    }
}

/// One page of rows in ascending key order.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<M> {
    pub rows: Vec<M>,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    /// Row count of the whole listing, ignoring the window.
    pub total_count: u64,
}

impl<M> Page<M> {
    pub fn map<T>(self, f: impl FnMut(M) -> T) -> Page<T> {
        Page {
            rows: self.rows.into_iter().map(f).collect(),
            has_previous_page: self.has_previous_page,
            has_next_page: self.has_next_page,
            total_count: self.total_count,
        }
    }
}

pub async fn fetch_window<E, C>(
    conn: &C,
    select: Select<E>,
    key: E::Column,
    window: PageWindow,
) -> Result<Page<E::Model>, sea_orm::DbErr>
where
    E: EntityTrait,
    E::Model: Send + Sync,
    C: ConnectionTrait,
{
    let total_count = select.clone().count(conn).await?;

    let mut bounded = select.clone();
    if let Some(after) = window.after {
        bounded = bounded.filter(key.gt(after));
    }
    if let Some(before) = window.before {
        bounded = bounded.filter(key.lt(before));
    }

    let mut has_next_page = false;
    let mut has_previous_page = false;

    let mut rows = match (window.first, window.last) {
        (Some(first), _) => {
            let mut rows = bounded
                .order_by_asc(key)
                .limit(first + 1)
                .all(conn)
                .await?;
            if rows.len() as u64 > first {
                rows.truncate(first as usize);
                has_next_page = true;
            }
            rows
        }
        (None, Some(last)) => {
            let mut rows = bounded
                .order_by_desc(key)
                .limit(last + 1)
                .all(conn)
                .await?;
            if rows.len() as u64 > last {
                rows.truncate(last as usize);
                has_previous_page = true;
            }
            rows.reverse();
            rows
        }
        (None, None) => bounded.order_by_asc(key).all(conn).await?,
    };

    // `first` and `last` together: take the tail of the head slice.
    if let (Some(_), Some(last)) = (window.first, window.last) {
        let last = last as usize;
        if rows.len() > last {
            rows.drain(..rows.len() - last);
            has_previous_page = true;
        }
    }

    if !has_previous_page {
        if let Some(after) = window.after {
            has_previous_page = select.clone().filter(key.lte(after)).count(conn).await? > 0;
        }
    }
    if !has_next_page {
        if let Some(before) = window.before {
            has_next_page = select.filter(key.gte(before)).count(conn).await? > 0;
        }
    }

    Ok(Page {
        rows,
        has_previous_page,
        has_next_page,
        total_count,
    })
}
