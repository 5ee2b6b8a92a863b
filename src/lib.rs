//! # Seller Dojo - Gamified Vendor Training Engine
//!
//! Seller Dojo is the state engine behind a gamified training dashboard for
//! marketplace vendors: video lessons with progress tracking, quizzes,
//! XP and levels, achievements, a leaderboard, and a support-ticket desk,
//! plus the authoring operations an admin console needs to manage that
//! content. All state is held in memory and seeded with starter data.
//!
//! ## Features
//!
//! - **Progression Engine**: XP accrual with level computation derived from a
//!   configurable threshold table, and automatic unlocking of lessons gated
//!   behind levels.
//! - **Content Authoring**: Lesson and quiz CRUD with cascade deletion and
//!   monotonic identifier assignment.
//! - **Quiz Sessions**: A per-attempt state machine that walks a question
//!   list, locks answers after the first submission, and owns the
//!   authoritative final score.
//! - **Achievements**: Trigger-driven unlocks (lessons completed, quizzes
//!   passed, level reached, XP earned) evaluated after every award.
//! - **Support Desk**: Ticket submission and admin status transitions with
//!   real timestamps.
//! - **Playback Simulation**: A Tokio interval task standing in for video
//!   playback, reporting progress and firing a completion callback once.
//! - **Data-Driven Seeds**: Starter content ships as JSON under
//!   `data/seeds/` so operators can customize without recompiling.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sellerdojo::academy::Academy;
//! use sellerdojo::config::Config;
//! use chrono::Utc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Load configuration
//!     let config = Config::load("config.toml").await?;
//!
//!     // Build a seeded academy and complete a lesson
//!     let mut academy = Academy::seeded(config.gamification.clone(), Utc::now());
//!     let report = academy.complete_lesson(2)?;
//!     println!("awarded {} XP", report.xp_awarded);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`academy`] - Learning domain: content store, progression engine, quiz
//!   sessions, achievements, roster and playback simulation
//! - [`support`] - Support-ticket desk
//! - [`config`] - Configuration management and validation
//! - [`validation`] - Input validation for authoring and ticket forms
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Page Views     │ ← External UI layer (not part of this crate)
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  Academy /      │ ← Explicitly owned state containers
//! │  SupportDesk    │
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  Stores & Seeds │ ← In-memory collections, JSON seed loading
//! └─────────────────┘
//! ```
//!
//! Views call engine and store operations directly and re-render from the
//! returned state; there is no queuing or retry layer. The only background
//! activity is the playback simulation task.

pub mod academy;
pub mod config;
pub mod logutil;
pub mod support;
pub mod validation;
