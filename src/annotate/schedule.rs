// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The highlight's timeline after it is inserted.
//!
//! ```text
//! wrap ──scroll_delay──▶ Scroll ──fade_delay──▶ Fade ──remove_delay──▶ Remove
//! ```
//!
//! Steps are plain data with due times. The host runs a timer for
//! [`AnnotationSchedule::next_due_ms`] and asks for whatever is due.

use crate::config::AnnotatorConfig;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationStep {
    Scroll,
    Fade,
    Remove,
}

#[derive(Debug, Clone, Default)]
pub struct AnnotationSchedule {
    steps: VecDeque<(u64, AnnotationStep)>,
}

impl AnnotationSchedule {
    pub fn new(start_ms: u64, config: &AnnotatorConfig) -> Self {
        let scroll_at = start_ms.saturating_add(config.scroll_delay_ms);
        let fade_at = scroll_at.saturating_add(config.fade_delay_ms);
        let remove_at = fade_at.saturating_add(config.remove_delay_ms);
        Self {
            steps: VecDeque::from([
                (scroll_at, AnnotationStep::Scroll),
                (fade_at, AnnotationStep::Fade),
                (remove_at, AnnotationStep::Remove),
            ]),
        }
    }

    /// Pop every step due at `now_ms`, in order.
    pub fn due(&mut self, now_ms: u64) -> Vec<AnnotationStep> {
        let mut due = Vec::new();
        while let Some(&(at, step)) = self.steps.front() {
            if at > now_ms {
                break;
            }
            self.steps.pop_front();
            due.push(step);
        }
        due
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        self.steps.front().map(|&(at, _)| at)
    }

    /// Drop every remaining step. Returns how many were dropped.
    pub fn cancel(&mut self) -> usize {
        let dropped = self.steps.len();
        self.steps.clear();
        dropped
    }

    pub fn is_finished(&self) -> bool {
        self.steps.is_empty()
    }
}
