//! Small cross-cutting helpers.

pub mod time;
