// SPDX-License-Identifier: GPL-3.0-only

mod filters;
mod pagination;
pub mod presentation;

pub use filters::{Filters, FlagEffect};
pub use pagination::{PAGE_SIZE, PaginationAction, Paginator};
