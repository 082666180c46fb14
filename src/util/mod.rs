//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, navigation) and pure
//! decisions (token decoding, route access) from page and component logic.

pub mod guard;
pub mod jwt;
pub mod navigate;
pub mod storage;
