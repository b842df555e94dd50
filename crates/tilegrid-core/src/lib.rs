#![forbid(unsafe_code)]

//! Model primitives for the Tilegrid placement library.
//!
//! This crate defines the data the solvers in `tilegrid-layout` operate on:
//! the [`Element`] record (position, span, caller payload), the validated
//! [`Span`] and [`GridOptions`] types, container-width classification via
//! [`ColumnBreakpoints`], and the shared [`GridError`].
//!
//! Everything here is plain owned data. No operation performs I/O or keeps
//! state between calls.

pub mod columns;
pub mod element;
pub mod error;

pub use columns::{ColumnBreakpoints, GridOptions};
pub use element::{Element, Span};
pub use error::GridError;
