//! # placement
//!
//! Composition root for the Placement onboarding backend.
//! 求职安置平台入门引导后端的组装根。

pub mod bootstrap;
