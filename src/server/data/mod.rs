//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for banks and branches. They are generic over
//! [`ConnectionTrait`] so the same code runs against a pooled connection or inside a
//! transaction, and they return raw [`DbErr`]s leaving classification to the service layer.

pub mod bank;
pub mod branch;
mod filter;

use sea_orm::{ConnectionTrait, DbErr, ItemsAndPagesNumber, Paginator, SelectorTrait};

/// One page of a listing along with the size of the whole listing.
#[derive(Debug)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub num_items: u64,
    pub num_pages: u64,
}

/// Counts the listing behind `paginator` then fetches the page at the 0-based `page_index`.
///
/// A page index past the end yields an empty page, callers decide whether that is an error.
async fn fetch_paged<'db, C, S>(
    paginator: Paginator<'db, C, S>,
    page_index: u64,
) -> Result<Paged<S::Item>, DbErr>
where
    C: ConnectionTrait,
    S: SelectorTrait + 'db,
{
    let ItemsAndPagesNumber {
        number_of_items,
        number_of_pages,
    } = paginator.num_items_and_pages().await?;

    let items = if page_index < number_of_pages {
        paginator.fetch_page(page_index).await?
    } else {
        Vec::new()
    };

    Ok(Paged {
        items,
        num_items: number_of_items,
        num_pages: number_of_pages,
    })
}
